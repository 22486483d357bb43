//! Timer-driven text effects for the public page.
//!
//! Each effect is a pure state machine advanced by explicit ticks or elapsed
//! time, so its behaviour is testable without a clock:
//!
//! - [`scramble::Scramble`] -- left-to-right reveal through random noise.
//! - [`rotate::PhraseRotator`] -- cycles phrases with enter/hold/exit phases.
//! - [`decode::HoverDecode`] -- pointer-triggered reveal, reset on leave.
//!
//! [`stream`] drives them on a [`ticker::Ticker`] and yields frames until the
//! consumer drops the stream or the shared cancellation token fires.

use std::time::Duration;

pub mod decode;
pub mod rotate;
pub mod scramble;
pub mod stream;
pub mod ticker;

/// Characters substituted for not-yet-revealed positions.
pub const BINARY_ALPHABET: &str = "01";

/// Ticks spent on each character before it becomes final.
pub const CYCLES_PER_LETTER: u32 = 2;

/// Period between scramble frames.
pub const SHUFFLE_TICK: Duration = Duration::from_millis(60);
