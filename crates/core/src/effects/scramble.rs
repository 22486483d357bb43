//! Scramble reveal.
//!
//! A pass lasts `len * cycles_per_letter` ticks. On tick `t` (counted from 1)
//! the character at index `i` is final iff `i * cycles_per_letter < t`; every
//! other position shows a random character from the alphabet.

use rand::Rng;

use super::{BINARY_ALPHABET, CYCLES_PER_LETTER};

#[derive(Debug, Clone)]
pub struct Scramble {
    target: Vec<char>,
    alphabet: Vec<char>,
    cycles_per_letter: u32,
    tick: u32,
}

impl Scramble {
    /// Binary alphabet, two ticks per letter.
    pub fn new(target: &str) -> Self {
        Self::with_settings(target, BINARY_ALPHABET, CYCLES_PER_LETTER)
    }

    /// An empty alphabet falls back to [`BINARY_ALPHABET`]; `cycles_per_letter`
    /// is at least 1.
    pub fn with_settings(target: &str, alphabet: &str, cycles_per_letter: u32) -> Self {
        let alphabet: Vec<char> = if alphabet.is_empty() {
            BINARY_ALPHABET.chars().collect()
        } else {
            alphabet.chars().collect()
        };
        Self {
            target: target.chars().collect(),
            alphabet,
            cycles_per_letter: cycles_per_letter.max(1),
            tick: 0,
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Ticks taken so far in the current pass.
    pub fn ticks(&self) -> u32 {
        self.tick
    }

    /// Length of a full pass in ticks.
    pub fn total_ticks(&self) -> u32 {
        self.target.len() as u32 * self.cycles_per_letter
    }

    pub fn is_revealed(&self) -> bool {
        self.tick >= self.total_ticks()
    }

    /// Whether index `i` is final once `tick` ticks have elapsed.
    pub fn is_final_at(&self, index: usize, tick: u32) -> bool {
        (index as u64) * u64::from(self.cycles_per_letter) < u64::from(tick)
    }

    /// Advance one tick and render the frame. `None` once the pass is over.
    pub fn next_frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.is_revealed() {
            return None;
        }
        self.tick += 1;
        Some(self.render(rng))
    }

    /// Start a new pass.
    pub fn restart(&mut self) {
        self.tick = 0;
    }

    fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if self.is_final_at(i, self.tick) {
                    c
                } else {
                    self.alphabet[rng.random_range(0..self.alphabet.len())]
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn full_pass_reveals_target() {
        let mut rng = rng();
        let mut s = Scramble::new("HELLO WORLD");
        assert_eq!(s.total_ticks(), 22);

        let mut last = String::new();
        for _ in 0..s.total_ticks() {
            last = s.next_frame(&mut rng).unwrap();
        }
        assert_eq!(last, "HELLO WORLD");
        assert!(s.is_revealed());
        assert_eq!(s.next_frame(&mut rng), None);
    }

    #[test]
    fn prefix_is_final_at_every_tick() {
        let mut rng = rng();
        let target = "RUSTACEAN";
        let mut s = Scramble::with_settings(target, "01", 3);
        let chars: Vec<char> = target.chars().collect();

        for t in 1..=s.total_ticks() {
            let frame: Vec<char> = s.next_frame(&mut rng).unwrap().chars().collect();
            assert_eq!(frame.len(), chars.len());
            for (i, (&shown, &want)) in frame.iter().zip(&chars).enumerate() {
                if (i as u32) * 3 < t {
                    assert_eq!(shown, want, "index {i} should be final at tick {t}");
                } else {
                    assert!(shown == '0' || shown == '1', "index {i} should be noise");
                }
            }
        }
    }

    #[test]
    fn single_cycle_per_letter_still_reveals_fully() {
        let mut rng = rng();
        let mut s = Scramble::with_settings("ABC", "xyz", 1);
        let frames: Vec<String> = std::iter::from_fn(|| s.next_frame(&mut rng)).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.last().unwrap(), "ABC");
    }

    #[test]
    fn restart_begins_a_new_pass() {
        let mut rng = rng();
        let mut s = Scramble::new("AB");
        while s.next_frame(&mut rng).is_some() {}
        s.restart();
        assert_eq!(s.ticks(), 0);
        assert!(!s.is_revealed());
        assert!(s.next_frame(&mut rng).is_some());
    }

    #[test]
    fn empty_target_is_immediately_revealed() {
        let mut s = Scramble::new("");
        assert!(s.is_revealed());
        assert_eq!(s.next_frame(&mut rng()), None);
    }

    #[test]
    fn empty_alphabet_falls_back_to_binary() {
        let mut rng = rng();
        let mut s = Scramble::with_settings("ZZZZ", "", 0);
        let frame = s.next_frame(&mut rng).unwrap();
        assert!(frame[1..].chars().all(|c| c == '0' || c == '1'));
    }
}
