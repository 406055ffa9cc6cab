use crate::timeline::Steps;

/// Moves a focus highlight across the words of a sentence, one word per
/// dwell period, wrapping around at the end.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FocusCycle {
    words: usize,
    index: usize,
    dwell_ms: u32,
}

impl FocusCycle {
    pub fn new(words: usize, animation_ms: u32, pause_ms: u32) -> Self {
        Self {
            words,
            index: 0,
            dwell_ms: animation_ms.saturating_add(pause_ms),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_focused(&self, word: usize) -> bool {
        self.words > 0 && word == self.index
    }
}

impl Steps for FocusCycle {
    fn next(&self) -> Option<(u32, Self)> {
        if self.words < 2 {
            return None;
        }
        Some((
            self.dwell_ms,
            Self {
                index: (self.index + 1) % self.words,
                ..*self
            },
        ))
    }
}
