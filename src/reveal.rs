use std::collections::HashSet;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const SECTION_VIEW_THRESHOLD: f64 = 0.5;

/// Observers may report the crossing entry a hair under the configured threshold.
const RATIO_TOLERANCE: f64 = 0.005;

pub const SCROLL_ANIMATED_SELECTOR: &str =
    ".skill-category, .project-card, .certification-card, .education-card";
pub const DEFERRED_ANIMATION_SELECTOR: &str = "[class*=\"fade-in\"], [class*=\"slide-in\"]";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

pub const HERO_CLASSES: [&str; 5] = [
    "hero-title",
    "hero-subtitle",
    "hero-description",
    "hero-buttons",
    "hero-social",
];
const HERO_REVEAL_BASE_MS: u32 = 500;
const HERO_REVEAL_STEP_MS: u32 = 200;

pub const IMAGE_FALLBACK_URL: &str = "https://images.pexels.com/photos/574071/\
pexels-photo-574071.jpeg?auto=compress&cs=tinysrgb&w=500";

pub const HERO_HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: all 0.6s ease-out;";
pub const HERO_SHOWN_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out;";

/// Remembers which elements already crossed the threshold.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True exactly once per key: the first time `ratio` reaches the threshold.
    pub fn on_intersection(&mut self, key: &str, ratio: f64) -> bool {
        if ratio + RATIO_TOLERANCE < self.threshold || self.revealed.contains(key) {
            return false;
        }

        self.revealed.insert(key.to_string());
        true
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

pub fn hero_reveal_delay(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX / HERO_REVEAL_STEP_MS);
    index
        .saturating_mul(HERO_REVEAL_STEP_MS)
        .saturating_add(HERO_REVEAL_BASE_MS)
}

pub fn hero_style(index: usize, revealed: usize) -> &'static str {
    if index < revealed {
        HERO_SHOWN_STYLE
    } else {
        HERO_HIDDEN_STYLE
    }
}

/// Source to swap in after an image fails; `None` once the fallback itself failed.
pub fn fallback_source(current: &str) -> Option<&'static str> {
    (current != IMAGE_FALLBACK_URL).then_some(IMAGE_FALLBACK_URL)
}
