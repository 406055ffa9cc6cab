use crate::{
    content::{GreetingEntry, Tone},
    timeline::Steps,
};

pub const TYPE_INTERVAL_MS: u32 = 100;
pub const HOLD_MS: u32 = 2_000;
pub const DELETE_INTERVAL_MS: u32 = 50;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Types each greeting out, holds it, deletes it and moves on, forever.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Typewriter {
    greetings: &'static [GreetingEntry],
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(greetings: &'static [GreetingEntry]) -> Self {
        Self {
            greetings,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tone(&self) -> Option<Tone> {
        self.current().map(|greeting| greeting.tone)
    }

    /// The typed-so-far prefix of the current greeting.
    pub fn text(&self) -> &'static str {
        let Some(greeting) = self.current() else {
            return "";
        };
        let end = greeting
            .text
            .char_indices()
            .nth(self.shown)
            .map(|(offset, _)| offset)
            .unwrap_or(greeting.text.len());
        &greeting.text[..end]
    }

    fn current(&self) -> Option<&'static GreetingEntry> {
        self.greetings.get(self.index)
    }

    fn full_len(&self) -> usize {
        self.current()
            .map(|greeting| greeting.text.chars().count())
            .unwrap_or(0)
    }
}

impl Steps for Typewriter {
    fn next(&self) -> Option<(u32, Self)> {
        if self.greetings.is_empty() {
            return None;
        }

        let step = match self.phase {
            Phase::Typing if self.shown < self.full_len() => (
                TYPE_INTERVAL_MS,
                Self {
                    shown: self.shown + 1,
                    ..*self
                },
            ),
            Phase::Typing => (
                HOLD_MS,
                Self {
                    phase: Phase::Deleting,
                    ..*self
                },
            ),
            Phase::Deleting if self.shown > 0 => (
                DELETE_INTERVAL_MS,
                Self {
                    shown: self.shown - 1,
                    ..*self
                },
            ),
            Phase::Deleting => (
                0,
                Self {
                    index: (self.index + 1) % self.greetings.len(),
                    phase: Phase::Typing,
                    ..*self
                },
            ),
        };
        Some(step)
    }
}
