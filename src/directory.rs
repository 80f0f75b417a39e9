use serde::Deserialize;
use serde_json::Value;

use crate::config::{EMPTY_URL, PLACEHOLDER_IMAGE, UNNAMED};

const CREATORS_JSON: &str = include_str!("../assets/creators.json");

#[derive(Debug, Clone, PartialEq)]
pub struct CreatorRecord {
    pub name: String,
    pub url: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl CreatorRecord {
    /// `"#"` is the placeholder url: there is nowhere to go.
    pub fn has_link(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url != EMPTY_URL
    }
}

// What the asset may contain: every field optional and untyped, so one bad
// field never takes the rest of the entry down with it.
#[derive(Debug, Default, Deserialize)]
struct RawCreator {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    url: Value,
    #[serde(default)]
    image: Value,
    #[serde(default)]
    tags: Value,
}

/// Counts of fields that had to be filled in, for the load log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub records: usize,
    pub defaulted_fields: usize,
}

fn or_default(field: Value, fallback: &str, defaulted: &mut usize) -> String {
    match field {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => {
            *defaulted += 1;
            fallback.to_string()
        }
    }
}

fn normalize(raw: RawCreator, defaulted: &mut usize) -> CreatorRecord {
    let tags = match raw.tags {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::Null => Vec::new(),
        _ => {
            *defaulted += 1;
            Vec::new()
        }
    };

    CreatorRecord {
        name: or_default(raw.name, UNNAMED, defaulted),
        url: or_default(raw.url, EMPTY_URL, defaulted),
        image: or_default(raw.image, PLACEHOLDER_IMAGE, defaulted),
        tags,
    }
}

/// Parses and normalizes a directory. Entries that are not objects become
/// all-default records; wrongly typed fields are defaulted one by one.
pub fn parse_directory(json: &str) -> Result<(Vec<CreatorRecord>, LoadReport), String> {
    let entries: Vec<Value> =
        serde_json::from_str(json).map_err(|e| format!("creators.json is not a JSON array: {e}"))?;

    let mut report = LoadReport::default();
    let records = entries
        .into_iter()
        .map(|entry| {
            let raw = serde_json::from_value::<RawCreator>(entry).unwrap_or_default();
            normalize(raw, &mut report.defaulted_fields)
        })
        .collect::<Vec<_>>();
    report.records = records.len();

    Ok((records, report))
}

/// The embedded directory. A broken asset gives an empty reel, never a panic.
pub fn load_directory() -> Vec<CreatorRecord> {
    match parse_directory(CREATORS_JSON) {
        Ok((records, report)) => {
            gloo::console::log!(format!(
                "creator-reels: loaded {} creators ({} fields defaulted)",
                report.records, report.defaulted_fields
            ));
            records
        }
        Err(e) => {
            gloo::console::error!(e);
            Vec::new()
        }
    }
}
