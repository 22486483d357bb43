//! Hover-triggered decode for skill tags.
//!
//! Pointer-enter starts a scramble pass; pointer-leave cancels it and the
//! tag shows its final text at once.

use rand::Rng;

use super::scramble::Scramble;

#[derive(Debug, Clone)]
pub struct HoverDecode {
    scramble: Scramble,
    active: bool,
}

impl HoverDecode {
    pub fn new(target: &str) -> Self {
        Self {
            scramble: Scramble::new(target),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start (or restart) a reveal pass.
    pub fn pointer_enter(&mut self) {
        self.scramble.restart();
        self.active = !self.scramble.is_revealed();
    }

    /// Cancel any in-flight reveal and return the final text.
    pub fn pointer_leave(&mut self) -> String {
        self.active = false;
        self.scramble.target()
    }

    /// Next frame of an active reveal. `None` while idle.
    pub fn next_frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if !self.active {
            return None;
        }
        let frame = self.scramble.next_frame(rng);
        if self.scramble.is_revealed() {
            self.active = false;
        }
        frame
    }

    /// Text shown when no reveal is running.
    pub fn resting_text(&self) -> String {
        self.scramble.target()
    }
}
