use crate::download::DEFAULT_RESUME_PATH;
use crate::telemetry::{LogLevel, DEFAULT_LOG_LEVEL};

pub const DEFAULT_TYPING_SPEED_MS: u32 = 150;
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 2_000;
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

const TYPING_SPEED_MS_BOUNDS: (u32, u32) = (20, 2_000);
const SUBMIT_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 200);

pub const TYPING_SPEED_ATTR: &str = "data-typing-speed-ms";
pub const SUBMIT_DELAY_ATTR: &str = "data-submit-delay-ms";
pub const PARTICLE_COUNT_ATTR: &str = "data-particle-count";
pub const RESUME_PATH_ATTR: &str = "data-resume-path";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Page tunables, read from `data-*` attributes on the mount element.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub typing_speed_ms: u32,
    pub submit_delay_ms: u32,
    pub particle_count: usize,
    pub resume_path: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            resume_path: DEFAULT_RESUME_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            typing_speed_ms: parse_u32_with_bounds(
                lookup(TYPING_SPEED_ATTR),
                DEFAULT_TYPING_SPEED_MS,
                TYPING_SPEED_MS_BOUNDS,
            ),
            submit_delay_ms: parse_u32_with_bounds(
                lookup(SUBMIT_DELAY_ATTR),
                DEFAULT_SUBMIT_DELAY_MS,
                SUBMIT_DELAY_MS_BOUNDS,
            ),
            particle_count: parse_usize_with_bounds(
                lookup(PARTICLE_COUNT_ATTR),
                DEFAULT_PARTICLE_COUNT,
                PARTICLE_COUNT_BOUNDS,
            ),
            resume_path: non_empty(lookup(RESUME_PATH_ATTR))
                .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string()),
            log_level: non_empty(lookup(LOG_LEVEL_ATTR))
                .and_then(|value| LogLevel::parse(&value))
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_lookup(|name| element.get_attribute(name))
    }
}

fn parse_u32_with_bounds(value: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds(value: Option<String>, default: usize, bounds: (usize, usize)) -> usize {
    value
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(config_from(&[]), SiteConfig::default());
    }

    #[test]
    fn in_bounds_values_are_applied() {
        let config = config_from(&[
            (TYPING_SPEED_ATTR, " 90 "),
            (SUBMIT_DELAY_ATTR, "0"),
            (PARTICLE_COUNT_ATTR, "12"),
            (RESUME_PATH_ATTR, "/cv.pdf"),
            (LOG_LEVEL_ATTR, "debug"),
        ]);

        assert_eq!(config.typing_speed_ms, 90);
        assert_eq!(config.submit_delay_ms, 0);
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.resume_path, "/cv.pdf");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_or_garbage_falls_back() {
        let config = config_from(&[
            (TYPING_SPEED_ATTR, "5"),
            (SUBMIT_DELAY_ATTR, "-1"),
            (PARTICLE_COUNT_ATTR, "5000"),
            (RESUME_PATH_ATTR, "   "),
            (LOG_LEVEL_ATTR, "verbose"),
        ]);

        assert_eq!(config, SiteConfig::default());
    }
}
