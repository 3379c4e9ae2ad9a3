//! Transient notification banners.
//!
//! A banner slides in from the right shortly after it is created, holds, then
//! slides back out and is removed once the transition has finished.

pub const SHOW_AFTER_MS: u32 = 100;
pub const DISMISS_AFTER_MS: u32 = 3_000;
pub const REMOVE_AFTER_DISMISS_MS: u32 = 300;

const BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; padding: 12px 24px; \
border-radius: 8px; color: white; z-index: 10000; transition: transform 0.3s ease-in-out;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

impl BannerKind {
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPhase {
    Entering,
    Visible,
    Leaving,
}

impl BannerPhase {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(100%)",
        }
    }
}

/// Phase of a banner `elapsed_ms` after creation; `None` once removed.
pub fn phase_at(elapsed_ms: u32) -> Option<BannerPhase> {
    if elapsed_ms < SHOW_AFTER_MS {
        Some(BannerPhase::Entering)
    } else if elapsed_ms < DISMISS_AFTER_MS {
        Some(BannerPhase::Visible)
    } else if elapsed_ms < DISMISS_AFTER_MS + REMOVE_AFTER_DISMISS_MS {
        Some(BannerPhase::Leaving)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerStep {
    Show,
    Dismiss,
    Remove,
}

/// Timed transitions as offsets from creation, in firing order.
pub fn schedule() -> [(u32, BannerStep); 3] {
    [
        (SHOW_AFTER_MS, BannerStep::Show),
        (DISMISS_AFTER_MS, BannerStep::Dismiss),
        (DISMISS_AFTER_MS + REMOVE_AFTER_DISMISS_MS, BannerStep::Remove),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerRequest {
    pub kind: BannerKind,
    pub message: String,
}

impl BannerRequest {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
    pub phase: BannerPhase,
}

impl Banner {
    pub fn style(&self) -> String {
        format!(
            "{BASE_STYLE} background: {}; transform: {};",
            self.kind.color(),
            self.phase.transform()
        )
    }
}

/// Ids are chosen by the caller, which also schedules the steps for that id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerAction {
    Push { id: u64, request: BannerRequest },
    Step(u64, BannerStep),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerQueue {
    banners: Vec<Banner>,
}

impl BannerQueue {
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn apply(&mut self, action: BannerAction) {
        match action {
            BannerAction::Push { id, request } => {
                if self.banners.iter().any(|banner| banner.id == id) {
                    return;
                }
                self.banners.push(Banner {
                    id,
                    kind: request.kind,
                    message: request.message,
                    phase: BannerPhase::Entering,
                });
            }
            BannerAction::Step(id, BannerStep::Remove) => {
                self.banners.retain(|banner| banner.id != id);
            }
            BannerAction::Step(id, step) => {
                if let Some(banner) = self.banners.iter_mut().find(|banner| banner.id == id) {
                    banner.phase = match step {
                        BannerStep::Show => BannerPhase::Visible,
                        _ => BannerPhase::Leaving,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(id: u64, kind: BannerKind, message: &str) -> BannerAction {
        BannerAction::Push {
            id,
            request: BannerRequest::new(kind, message),
        }
    }

    #[test]
    fn banner_is_visible_within_first_hundred_ms() {
        assert_eq!(phase_at(0), Some(BannerPhase::Entering));
        assert_eq!(phase_at(99), Some(BannerPhase::Entering));
        assert_eq!(phase_at(100), Some(BannerPhase::Visible));
    }

    #[test]
    fn banner_is_removed_only_after_dismiss_window() {
        assert_eq!(phase_at(2_999), Some(BannerPhase::Visible));
        assert_eq!(phase_at(3_000), Some(BannerPhase::Leaving));
        assert_eq!(phase_at(3_299), Some(BannerPhase::Leaving));
        assert_eq!(phase_at(3_300), None);
    }

    #[test]
    fn schedule_is_ordered_and_matches_timeline() {
        let steps = schedule();

        assert!(steps.windows(2).all(|pair| pair[0].0 < pair[1].0));
        for (at, step) in steps {
            let expected = match step {
                BannerStep::Show => Some(BannerPhase::Visible),
                BannerStep::Dismiss => Some(BannerPhase::Leaving),
                BannerStep::Remove => None,
            };
            assert_eq!(phase_at(at), expected);
        }
    }

    #[test]
    fn queue_runs_full_lifecycle() {
        let mut queue = BannerQueue::default();
        queue.apply(push(0, BannerKind::Success, "sent"));
        queue.apply(push(1, BannerKind::Error, "oops"));
        let first = 0;

        queue.apply(BannerAction::Step(first, BannerStep::Show));
        assert_eq!(queue.banners()[0].phase, BannerPhase::Visible);
        assert_eq!(queue.banners()[1].phase, BannerPhase::Entering);

        queue.apply(BannerAction::Step(first, BannerStep::Dismiss));
        assert_eq!(queue.banners()[0].phase, BannerPhase::Leaving);

        queue.apply(BannerAction::Step(first, BannerStep::Remove));
        assert_eq!(queue.banners().len(), 1);
        assert_eq!(queue.banners()[0].message, "oops");
    }

    #[test]
    fn unknown_steps_and_duplicate_ids_are_ignored() {
        let mut queue = BannerQueue::default();
        queue.apply(push(7, BannerKind::Info, "hi"));
        let before = queue.clone();

        queue.apply(BannerAction::Step(42, BannerStep::Show));
        queue.apply(BannerAction::Step(42, BannerStep::Remove));
        queue.apply(push(7, BannerKind::Error, "duplicate"));

        assert_eq!(queue, before);
    }

    #[test]
    fn style_carries_kind_color_and_phase_offset() {
        let banner = Banner {
            id: 0,
            kind: BannerKind::Error,
            message: String::new(),
            phase: BannerPhase::Visible,
        };

        let style = banner.style();
        assert!(style.contains("background: #ef4444;"));
        assert!(style.contains("transform: translateX(0);"));
    }
}
