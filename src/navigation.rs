use crate::theme::Theme;

pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const ACTIVE_PROBE_OFFSET: f64 = 100.0;
pub const HEADER_HEIGHT: f64 = 70.0;

const SCROLLED_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub fn to_css(self) -> String {
        format!("background: {}; box-shadow: {};", self.background, self.box_shadow)
    }
}

pub fn navbar_style(scroll_y: f64, theme: Theme) -> NavbarStyle {
    let scrolled = scroll_y > SCROLLED_THRESHOLD;

    let background = match (theme, scrolled) {
        (Theme::Dark, true) => "rgba(15, 23, 42, 0.98)",
        (Theme::Dark, false) => "rgba(15, 23, 42, 0.95)",
        (Theme::Light, true) => "rgba(255, 255, 255, 0.98)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.95)",
    };

    NavbarStyle {
        background,
        box_shadow: if scrolled { SCROLLED_SHADOW } else { "none" },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position <= self.top + self.height
    }
}

/// Section whose span holds `scroll_y + 100`; the last matching span wins.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_PROBE_OFFSET;

    spans
        .iter()
        .filter(|span| span.contains(probe))
        .last()
        .map(|span| span.id.as_str())
}

pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - HEADER_HEIGHT).max(0.0)
}

pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("about", 600.0, 400.0),
            SectionSpan::new("projects", 1_000.0, 800.0),
        ]
    }

    #[test]
    fn navbar_switches_on_strict_threshold() {
        assert_eq!(navbar_style(50.0, Theme::Light).box_shadow, "none");
        assert_eq!(
            navbar_style(50.5, Theme::Light),
            NavbarStyle {
                background: "rgba(255, 255, 255, 0.98)",
                box_shadow: SCROLLED_SHADOW,
            }
        );
        assert_eq!(
            navbar_style(0.0, Theme::Dark).background,
            "rgba(15, 23, 42, 0.95)"
        );
    }

    #[test]
    fn probe_inside_one_section_marks_only_that_section() {
        let spans = page();

        assert_eq!(active_section(&spans, 1_000.0), Some("projects"));
        assert_eq!(active_section(&spans, 200.0), Some("home"));
        assert_eq!(active_section(&spans, 600.0), Some("about"));
    }

    #[test]
    fn shared_boundary_goes_to_the_later_section() {
        assert_eq!(active_section(&page(), 500.0), Some("about"));
    }

    #[test]
    fn probe_outside_every_section_clears_selection() {
        assert_eq!(active_section(&page(), 5_000.0), None);
        assert_eq!(active_section(&[], 0.0), None);
    }

    #[test]
    fn scroll_target_subtracts_header_and_clamps() {
        assert_eq!(scroll_target(600.0), 530.0);
        assert_eq!(scroll_target(20.0), 0.0);
    }

    #[test]
    fn anchor_id_requires_hash_prefix() {
        assert_eq!(anchor_id("#about"), Some("about"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/about"), None);
    }

    #[test]
    fn mobile_menu_toggles_and_closes() {
        let menu = MobileMenu::default();
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert!(!menu.toggled().closed().is_open());
    }
}
