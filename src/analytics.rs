use serde::Serialize;

use crate::reveal::{RevealTracker, SECTION_VIEW_THRESHOLD};
use crate::telemetry::{log_event, LogLevel};

pub const TRACKED_BUTTON_SELECTOR: &str = ".btn";
pub const TRACKED_SECTION_SELECTOR: &str = "section[id]";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageLoad {
        #[serde(rename = "loadMs")]
        load_ms: f64,
    },
    ButtonClick {
        label: String,
    },
    SectionView {
        section: String,
    },
}

impl AnalyticsEvent {
    pub fn message(&self) -> String {
        match self {
            Self::PageLoad { load_ms } => format!("Page loaded in {load_ms:.2}ms"),
            Self::ButtonClick { label } => format!("Button clicked: {label}"),
            Self::SectionView { section } => format!("Section viewed: {section}"),
        }
    }
}

/// Load duration from the navigation entry's `loadEventEnd`, or `now` while it is still unset.
pub fn page_load_ms(load_event_end: Option<f64>, now: f64) -> f64 {
    load_event_end.filter(|end| *end > 0.0).unwrap_or(now)
}

/// Fire-and-log interaction tracking; nothing is buffered or sent anywhere.
#[derive(Debug)]
pub struct Analytics {
    page_load_logged: bool,
    sections: RevealTracker,
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            page_load_logged: false,
            sections: RevealTracker::new(SECTION_VIEW_THRESHOLD),
        }
    }
}

impl Analytics {
    pub fn page_loaded(&mut self, load_ms: f64) -> Option<AnalyticsEvent> {
        if self.page_load_logged {
            return None;
        }
        self.page_load_logged = true;

        Some(record(AnalyticsEvent::PageLoad { load_ms }))
    }

    pub fn button_clicked(&mut self, text: &str) -> AnalyticsEvent {
        record(AnalyticsEvent::ButtonClick {
            label: text.trim().to_string(),
        })
    }

    pub fn section_visibility(&mut self, section: &str, ratio: f64) -> Option<AnalyticsEvent> {
        if !self.sections.on_intersection(section, ratio) {
            return None;
        }

        Some(record(AnalyticsEvent::SectionView {
            section: section.to_string(),
        }))
    }
}

fn record(event: AnalyticsEvent) -> AnalyticsEvent {
    let mut fields = serde_json::to_value(&event).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(map) = &mut fields {
        map.insert("message".to_string(), serde_json::Value::String(event.message()));
    }

    log_event(LogLevel::Info, "analytics", fields);
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_is_logged_once() {
        let mut analytics = Analytics::default();

        let first = analytics.page_loaded(12.3456).expect("first load is logged");
        assert_eq!(first.message(), "Page loaded in 12.35ms");
        assert!(analytics.page_loaded(20.0).is_none());
    }

    #[test]
    fn load_time_prefers_navigation_timing() {
        assert_eq!(page_load_ms(Some(842.5), 5_000.0), 842.5);
        assert_eq!(page_load_ms(Some(0.0), 5_000.0), 5_000.0);
        assert_eq!(page_load_ms(None, 120.0), 120.0);
    }

    #[test]
    fn button_labels_are_trimmed() {
        let mut analytics = Analytics::default();

        let event = analytics.button_clicked("  Download CV \n");
        assert_eq!(event.message(), "Button clicked: Download CV");
    }

    #[test]
    fn sections_log_first_half_visible_event_only() {
        let mut analytics = Analytics::default();

        assert!(analytics.section_visibility("about", 0.3).is_none());
        assert_eq!(
            analytics.section_visibility("about", 0.6),
            Some(AnalyticsEvent::SectionView {
                section: "about".to_string()
            })
        );
        assert!(analytics.section_visibility("about", 1.0).is_none());
        assert!(analytics.section_visibility("contact", 0.5).is_some());
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let value = serde_json::to_value(AnalyticsEvent::PageLoad { load_ms: 1.5 })
            .expect("event serializes");

        assert_eq!(value["kind"], "page_load");
        assert_eq!(value["loadMs"], 1.5);
    }
}
