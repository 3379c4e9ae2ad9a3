//! Letter-by-letter typing animation.
//!
//! The machine does not own a timer: each [`TypingAnimation::tick`] returns the
//! text to display and how long the caller should wait before ticking again.

use thiserror::Error;

pub const FULL_PAUSE_MS: u32 = 2_000;
pub const EMPTY_PAUSE_MS: u32 = 500;

pub const DEFAULT_TEXTS: [&str; 5] = [
    "Full Stack Developer",
    "Software Engineer",
    "Problem Solver",
    "Tech Enthusiast",
    "CS Student at KIIT",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypingError {
    #[error("typing animation needs at least one text")]
    NoTexts,
    #[error("typing text at index {index} is empty")]
    EmptyText { index: usize },
    #[error("typing interval must be greater than zero")]
    ZeroInterval,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Growing,
    PausedAtFull,
    Shrinking,
    PausedAtEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame<'a> {
    pub text: &'a str,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingAnimation {
    texts: Vec<String>,
    base_interval_ms: u32,
    text_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl TypingAnimation {
    pub fn new<I, T>(texts: I, base_interval_ms: u32) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();

        if texts.is_empty() {
            return Err(TypingError::NoTexts);
        }
        if let Some(index) = texts.iter().position(|text| text.is_empty()) {
            return Err(TypingError::EmptyText { index });
        }
        if base_interval_ms == 0 {
            return Err(TypingError::ZeroInterval);
        }

        Ok(Self {
            texts,
            base_interval_ms,
            text_index: 0,
            char_index: 0,
            phase: TypingPhase::PausedAtEmpty,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn current_text(&self) -> &str {
        &self.texts[self.text_index]
    }

    pub fn displayed(&self) -> &str {
        char_prefix(self.current_text(), self.char_index)
    }

    pub fn tick(&mut self) -> TypingFrame<'_> {
        let len = self.current_text().chars().count();

        let delay_ms = match self.phase {
            TypingPhase::Growing | TypingPhase::PausedAtEmpty => {
                self.char_index = (self.char_index + 1).min(len);
                if self.char_index == len {
                    self.phase = TypingPhase::PausedAtFull;
                    FULL_PAUSE_MS
                } else {
                    self.phase = TypingPhase::Growing;
                    self.base_interval_ms
                }
            }
            TypingPhase::PausedAtFull | TypingPhase::Shrinking => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = TypingPhase::PausedAtEmpty;
                    EMPTY_PAUSE_MS
                } else {
                    self.phase = TypingPhase::Shrinking;
                    (self.base_interval_ms / 2).max(1)
                }
            }
        };

        // Text shown on the frame that empties the display belongs to the old string.
        let text = if self.phase == TypingPhase::PausedAtEmpty {
            self.text_index = (self.text_index + 1) % self.texts.len();
            ""
        } else {
            self.displayed()
        };

        TypingFrame { text, delay_ms }
    }
}

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(animation: &mut TypingAnimation, count: usize) -> Vec<(String, u32)> {
        (0..count)
            .map(|_| {
                let frame = animation.tick();
                (frame.text.to_string(), frame.delay_ms)
            })
            .collect()
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert_eq!(
            TypingAnimation::new(Vec::<String>::new(), 100).err(),
            Some(TypingError::NoTexts)
        );
        assert_eq!(
            TypingAnimation::new(["ok", ""], 100).err(),
            Some(TypingError::EmptyText { index: 1 })
        );
        assert_eq!(
            TypingAnimation::new(["ok"], 0).err(),
            Some(TypingError::ZeroInterval)
        );
    }

    #[test]
    fn cycles_through_texts_with_pauses() {
        let mut animation = TypingAnimation::new(["AB", "C"], 100).expect("valid texts");

        let observed = frames(&mut animation, 8);

        let expected = vec![
            ("A".to_string(), 100),
            ("AB".to_string(), FULL_PAUSE_MS),
            ("A".to_string(), 50),
            ("".to_string(), EMPTY_PAUSE_MS),
            ("C".to_string(), FULL_PAUSE_MS),
            ("".to_string(), EMPTY_PAUSE_MS),
            ("A".to_string(), 100),
            ("AB".to_string(), FULL_PAUSE_MS),
        ];
        assert_eq!(observed, expected);
    }

    #[test]
    fn phases_follow_the_frames() {
        let mut animation = TypingAnimation::new(["AB"], 100).expect("valid texts");
        assert_eq!(animation.phase(), TypingPhase::PausedAtEmpty);

        let phases: Vec<TypingPhase> = (0..4)
            .map(|_| {
                animation.tick();
                animation.phase()
            })
            .collect();

        assert_eq!(
            phases,
            vec![
                TypingPhase::Growing,
                TypingPhase::PausedAtFull,
                TypingPhase::Shrinking,
                TypingPhase::PausedAtEmpty,
            ]
        );
    }

    #[test]
    fn displayed_text_is_always_a_prefix() {
        let texts = ["Problem Solver", "héllo wörld", "C"];
        let mut animation = TypingAnimation::new(texts, 10).expect("valid texts");

        for _ in 0..200 {
            let frame = animation.tick();
            let text = frame.text.to_string();
            assert!(
                texts.iter().any(|candidate| candidate.starts_with(&text)),
                "{text:?} is not a prefix of any text"
            );
            assert!(animation.current_text().starts_with(animation.displayed()));
        }
    }

    #[test]
    fn deleting_is_twice_as_fast_but_never_zero() {
        let mut animation = TypingAnimation::new(["abc"], 1).expect("valid texts");

        let delays: Vec<u32> = frames(&mut animation, 5)
            .into_iter()
            .map(|(_, delay)| delay)
            .collect();

        assert_eq!(delays, vec![1, 1, FULL_PAUSE_MS, 1, 1]);
    }
}
