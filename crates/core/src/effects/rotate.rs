//! Rotating phrase.
//!
//! Each phrase goes through three phases measured from the last advance:
//! `Entering` for [`ENTRY_DELAY`], `Shown` until the hold duration, then
//! `Exiting` for [`EXIT_TRANSITION`]. The index advances once per
//! `hold + EXIT_TRANSITION` and wraps after the last phrase.

use std::time::Duration;

use serde::Serialize;

/// Delay before the entry transition starts.
pub const ENTRY_DELAY: Duration = Duration::from_millis(100);

/// Length of the exit transition.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPhase {
    Entering,
    Shown,
    Exiting,
}

impl RotationPhase {
    /// CSS classes applied to the phrase element in this phase.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Entering => "opacity-0 translate-y-4 blur-sm",
            Self::Shown => "opacity-100 translate-y-0 blur-0",
            Self::Exiting => "opacity-0 -translate-y-4 blur-sm",
        }
    }
}

/// What the rotation widget displays at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationFrame {
    pub index: usize,
    pub phrase: String,
    pub phase: RotationPhase,
    pub class: &'static str,
}

#[derive(Debug, Clone)]
pub struct PhraseRotator {
    phrases: Vec<String>,
    hold: Duration,
    index: usize,
    elapsed: Duration,
}

impl PhraseRotator {
    pub fn new(phrases: Vec<String>, hold: Duration) -> Self {
        Self {
            phrases,
            hold,
            index: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Time between two index advances.
    pub fn cycle(&self) -> Duration {
        self.hold + EXIT_TRANSITION
    }

    pub fn phase(&self) -> RotationPhase {
        if self.elapsed < ENTRY_DELAY.min(self.hold) {
            RotationPhase::Entering
        } else if self.elapsed < self.hold {
            RotationPhase::Shown
        } else {
            RotationPhase::Exiting
        }
    }

    /// Current frame, or `None` when there are no phrases.
    pub fn frame(&self) -> Option<RotationFrame> {
        let phrase = self.phrases.get(self.index)?;
        let phase = self.phase();
        Some(RotationFrame {
            index: self.index,
            phrase: phrase.clone(),
            phase,
            class: phase.css_class(),
        })
    }

    /// Move time forward by `dt`, returning how many times the index advanced.
    pub fn advance(&mut self, dt: Duration) -> usize {
        if self.phrases.is_empty() {
            return 0;
        }
        let cycle = self.cycle();
        self.elapsed += dt;
        let mut advanced = 0;
        while self.elapsed >= cycle {
            self.elapsed -= cycle;
            self.index = (self.index + 1) % self.phrases.len();
            advanced += 1;
        }
        advanced
    }

    /// Time until the displayed frame next changes.
    pub fn until_next_change(&self) -> Duration {
        let boundaries = [ENTRY_DELAY.min(self.hold), self.hold, self.cycle()];
        boundaries
            .into_iter()
            .find(|b| *b > self.elapsed)
            .map(|b| b - self.elapsed)
            .unwrap_or(self.cycle())
    }
}
