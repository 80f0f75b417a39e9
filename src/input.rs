// Gesture recognition for the reel. Each port turns raw event data into at
// most one `Step`; nothing here touches the DOM, so the rules are testable
// without a browser.

use crate::config::{SWIPE_THRESHOLD, WHEEL_COOLDOWN_MS, WHEEL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advance,
    Retreat,
}

/// Wheel port. One physical scroll fires a burst of wheel events; after a
/// step every wheel event is dropped until `WHEEL_COOLDOWN_MS` have passed.
/// Times are event timestamps in milliseconds.
#[derive(Debug, Default)]
pub struct WheelGate {
    locked_until: Option<f64>,
}

impl WheelGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.locked_until.is_some_and(|until| now_ms < until)
    }

    /// Positive `delta_y` scrolls down (advance). Returns the step taken, if
    /// any; a step locks the gate.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) -> Option<Step> {
        if self.is_locked(now_ms) || delta_y.abs() <= WHEEL_THRESHOLD {
            return None;
        }
        self.locked_until = Some(now_ms + f64::from(WHEEL_COOLDOWN_MS));
        Some(if delta_y > 0.0 {
            Step::Advance
        } else {
            Step::Retreat
        })
    }
}

/// Touch port: remembers where the finger went down.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_y: Option<f64>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Forget the start point (touch cancelled, or ended without a position).
    pub fn reset(&mut self) {
        self.start_y = None;
    }

    /// Swiping up (finger moves to a smaller y) advances. Short moves are
    /// taps. The start point is forgotten either way.
    pub fn on_touch_end(&mut self, y: f64) -> Option<Step> {
        let start = self.start_y.take()?;
        let delta = y - start;
        if delta.abs() <= SWIPE_THRESHOLD {
            None
        } else if delta < 0.0 {
            Some(Step::Advance)
        } else {
            Some(Step::Retreat)
        }
    }
}

/// Keyboard port. `key` is `KeyboardEvent.key`.
pub fn step_for_key(key: &str) -> Option<Step> {
    match key {
        "ArrowDown" => Some(Step::Advance),
        "ArrowUp" => Some(Step::Retreat),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Step(Step),
    Dismiss,
}

/// What a window-level keydown does. While the interstitial is up only
/// Escape counts; arrows typed into a text field stay with the field.
pub fn key_action(key: &str, interstitial_open: bool, in_text_field: bool) -> Option<KeyAction> {
    if interstitial_open {
        return (key == "Escape").then_some(KeyAction::Dismiss);
    }
    if in_text_field {
        return None;
    }
    step_for_key(key).map(KeyAction::Step)
}
