pub mod driver;

use std::time::Duration;

use thiserror::Error;

use crate::config::{millis, CyclerTiming, TimingError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CyclerError {
    #[error("word cycler needs at least one word")]
    NoWords,
    #[error("invalid typing timings: {0}")]
    InvalidTiming(#[from] TimingError),
    #[error("initial delay must be a finite, non-negative number (got {0})")]
    InitialDelay(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Word is complete; waiting out the pause before erasing.
    PausedFull,
    Deleting,
    /// Word is erased; waiting before the next one starts.
    PausedEmpty,
}

/// What a tick produced: the text to render and how long to wait before
/// the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub text: &'a str,
    pub deleting: bool,
    pub delay: Duration,
}

/// Types and erases a fixed list of words one character at a time, forever.
///
/// The cycler only computes states. Whoever owns it decides how to wait for
/// [`Frame::delay`] (see [`driver::CyclerDriver`]).
#[derive(Debug, Clone)]
pub struct WordCycler {
    words: Vec<String>,
    word_index: usize,
    text: String,
    phase: Phase,
    interval_ms: f64,
    timing: CyclerTiming,
}

impl WordCycler {
    pub fn new<I, S>(
        words: I,
        timing: CyclerTiming,
        initial_delay_ms: f64,
    ) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect::<Vec<String>>();
        if words.is_empty() {
            return Err(CyclerError::NoWords);
        }
        timing.validate()?;
        if !initial_delay_ms.is_finite() || initial_delay_ms < 0.0 {
            return Err(CyclerError::InitialDelay(initial_delay_ms));
        }
        Ok(Self {
            words,
            word_index: 0,
            text: String::new(),
            phase: Phase::Typing,
            interval_ms: initial_delay_ms,
            timing,
        })
    }

    /// Starts with a typing speed drawn from the timing's delay range.
    pub fn with_random_speed<I, S>(words: I, timing: CyclerTiming) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        timing.validate()?;
        let initial = timing.initial_delay(&mut rand::thread_rng());
        Self::new(words, timing, initial)
    }

    pub fn tick(&mut self) -> Frame<'_> {
        let full = &self.words[self.word_index];
        if self.is_deleting() {
            self.text.pop();
            if self.text.is_empty() {
                self.phase = Phase::PausedEmpty;
                self.word_index = (self.word_index + 1) % self.words.len();
                self.interval_ms = self.timing.empty_pause_ms;
            } else {
                self.phase = Phase::Deleting;
                self.interval_ms = self.timing.accelerate(self.interval_ms);
            }
        } else {
            if let Some(c) = full[self.text.len()..].chars().next() {
                self.text.push(c);
            }
            if self.text.len() == full.len() {
                self.phase = Phase::PausedFull;
                self.interval_ms = self.timing.full_pause_ms;
            } else {
                self.phase = Phase::Typing;
            }
        }
        self.frame()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            text: &self.text,
            deleting: self.is_deleting(),
            delay: self.delay(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::PausedFull | Phase::Deleting)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn delay(&self) -> Duration {
        millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cycler(words: &[&str]) -> WordCycler {
        WordCycler::new(words.iter().copied(), CyclerTiming::default(), 150.0).unwrap()
    }

    fn assert_prefix(c: &WordCycler) {
        assert!(
            c.current_word().starts_with(c.text()),
            "{:?} is not a prefix of {:?}",
            c.text(),
            c.current_word()
        );
    }

    #[test]
    fn test_initial_state() {
        let c = cycler(&["Fullstack Developer", "Pixel & Bug Master"]);
        assert_eq!(c.text(), "");
        assert_eq!(c.word_index(), 0);
        assert!(!c.is_deleting());
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.interval_ms(), 150.0);
    }

    #[test]
    fn test_rejects_empty_word_list() {
        let err = WordCycler::new(Vec::<String>::new(), CyclerTiming::default(), 150.0);
        assert_eq!(err.unwrap_err(), CyclerError::NoWords);
    }

    #[test]
    fn test_rejects_bad_initial_delay() {
        let err = WordCycler::new(["a"], CyclerTiming::default(), f64::INFINITY);
        assert!(matches!(err, Err(CyclerError::InitialDelay(_))));
    }

    #[test]
    fn test_random_speed_starts_in_range() {
        for _ in 0..100 {
            let c = WordCycler::with_random_speed(["a"], CyclerTiming::default()).unwrap();
            assert!((100.0..200.0).contains(&c.interval_ms()));
        }
    }

    #[test]
    fn test_single_word_sequence() {
        let mut c = cycler(&["ab"]);

        let f = c.tick();
        assert_eq!((f.text, f.deleting), ("a", false));
        assert_eq!(c.interval_ms(), 150.0);

        let f = c.tick();
        assert_eq!((f.text, f.deleting), ("ab", true));
        assert_eq!(f.delay, Duration::from_millis(2000));
        assert_eq!(c.phase(), Phase::PausedFull);

        let f = c.tick();
        assert_eq!((f.text, f.deleting), ("a", true));
        assert_eq!(c.interval_ms(), 2000.0 / 1.5);

        let f = c.tick();
        assert_eq!((f.text, f.deleting), ("", false));
        assert_eq!(f.delay, Duration::from_millis(500));
        assert_eq!(c.word_index(), 0);
        assert_eq!(c.phase(), Phase::PausedEmpty);

        // second lap is identical, but typing now runs at the post-pause speed
        let texts = (0..4)
            .map(|_| c.tick().text.to_string())
            .collect::<Vec<_>>();
        assert_eq!(texts, ["a", "ab", "a", ""]);
        assert_eq!(c.word_index(), 0);
    }

    #[test]
    fn test_advances_to_next_word_and_wraps() {
        let mut c = cycler(&["hi", "yo"]);
        let mut full_words = Vec::new();
        for _ in 0..8 {
            let text = c.tick().text.to_string();
            if c.phase() == Phase::PausedFull {
                full_words.push(text);
            }
            if c.phase() == Phase::PausedEmpty {
                full_words.push(format!("-> {}", c.word_index()));
            }
        }
        assert_eq!(full_words, ["hi", "-> 1", "yo", "-> 0"]);
    }

    #[test]
    fn test_deletion_accelerates() {
        let mut c = cycler(&["cosmic"]);
        while c.phase() != Phase::PausedFull {
            c.tick();
        }
        let mut prev = c.interval_ms();
        assert_eq!(prev, 2000.0);
        loop {
            c.tick();
            if c.phase() == Phase::PausedEmpty {
                break;
            }
            let now = c.interval_ms();
            assert_eq!(now, prev / 1.5);
            assert!(now < prev);
            prev = now;
        }
        assert_eq!(c.interval_ms(), 500.0);
    }

    #[test]
    fn test_deletion_floor() {
        let timing = CyclerTiming {
            min_delete_delay_ms: Some(1000.0),
            ..Default::default()
        };
        let mut c = WordCycler::new(["abcd"], timing, 100.0).unwrap();
        for _ in 0..4 {
            c.tick();
        }
        c.tick();
        assert_eq!(c.interval_ms(), 2000.0 / 1.5);
        c.tick();
        assert_eq!(c.interval_ms(), 1000.0);
        c.tick();
        assert_eq!(c.interval_ms(), 1000.0);
    }

    #[test]
    fn test_cycle_is_periodic() {
        let mut c = cycler(&["x"]);
        let start = (c.text().to_string(), c.word_index(), c.is_deleting());
        c.tick(); // "x"
        c.tick(); // ""
        assert_eq!(
            (c.text().to_string(), c.word_index(), c.is_deleting()),
            start
        );
    }

    #[test]
    fn test_multibyte_words() {
        let mut c = cycler(&["ТурГид"]);
        let typed = (0..6)
            .map(|_| c.tick().text.to_string())
            .collect::<Vec<_>>();
        assert_eq!(typed, ["Т", "Ту", "Тур", "ТурГ", "ТурГи", "ТурГид"]);
        assert!(c.is_deleting());
        assert_eq!(c.tick().text, "ТурГи");
    }

    #[test]
    fn test_empty_word_is_skipped_in_two_ticks() {
        let mut c = cycler(&["", "a"]);
        assert_eq!(c.tick().text, "");
        assert_eq!(c.phase(), Phase::PausedFull);
        assert_eq!(c.tick().text, "");
        assert_eq!(c.word_index(), 1);
        assert_eq!(c.tick().text, "a");
    }

    proptest! {
        #[test]
        fn test_text_is_always_a_prefix(
            words in prop::collection::vec("\\PC{0,12}", 1..5),
            ticks in 0usize..300,
        ) {
            let mut c = WordCycler::new(words, CyclerTiming::default(), 120.0).unwrap();
            for _ in 0..ticks {
                c.tick();
                assert_prefix(&c);
                prop_assert!(c.word_index() < c.words().len());
                let len = c.text().chars().count();
                let full = c.current_word().chars().count();
                if c.is_deleting() {
                    prop_assert!(len > 0 || full == 0);
                }
                prop_assert!(len <= full);
            }
        }
    }
}
