// Build-time knobs. `REELS_SPONSOR_URL` is read from the environment Trunk
// runs `cargo build` in; everything else is fixed.

const DEFAULT_SPONSOR_URL: &str = "https://www.webhtml5.info/";

/// sessionStorage key for the "sponsor already shown" flag.
pub const SESSION_GATE_KEY: &str = "reels_sponsor_seen_v1";
pub const SESSION_GATE_VALUE: &str = "1";

/// Minimum |deltaY| for a wheel event to count as a step.
pub const WHEEL_THRESHOLD: f64 = 10.0;
/// How long further wheel events are ignored after a step.
pub const WHEEL_COOLDOWN_MS: u32 = 400;
/// Minimum vertical travel for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 40.0;

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/720x1280?text=Creator";
pub const UNNAMED: &str = "Unnamed";
pub const EMPTY_URL: &str = "#";

pub const OPEN_TARGET: &str = "_blank";
pub const OPEN_FEATURES: &str = "noopener,noreferrer";

pub fn sponsor_url() -> &'static str {
    match option_env!("REELS_SPONSOR_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_SPONSOR_URL,
    }
}
