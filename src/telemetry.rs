use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

static MIN_LEVEL: AtomicU8 = AtomicU8::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
        }
    }

    fn from_rank(rank: u8) -> Self {
        if rank == 0 {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

pub fn init(level: LogLevel) {
    MIN_LEVEL.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn min_level() -> LogLevel {
    LogLevel::from_rank(MIN_LEVEL.load(AtomicOrdering::Relaxed))
}

/// Writes one structured line if `level` passes the configured minimum.
pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if level < min_level() {
        return;
    }

    emit(&format_event(now_millis(), level, event, fields));
}

fn format_event(ts: f64, level: LogLevel, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert(
        "ts".to_string(),
        Number::from_f64(ts)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    );
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn formatted_event_merges_extra_fields() {
        let line = format_event(
            1_000.0,
            LogLevel::Info,
            "section_view",
            json!({ "section": "about" }),
        );
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "section_view");
        assert_eq!(parsed["section"], "about");
        assert_eq!(parsed["ts"], 1_000.0);
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(0.0, LogLevel::Debug, "noop", Value::Null);
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed.as_object().map(|fields| fields.len()), Some(3));
    }
}
