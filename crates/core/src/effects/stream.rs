//! Async frame streams for the text effects.
//!
//! Every stream owns its timers: dropping it (the subscriber went away)
//! stops the effect, and cancelling the token ends it at the next await.

use std::time::Duration;

use futures::stream::{self, Stream};
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::decode::HoverDecode;
use super::rotate::{PhraseRotator, RotationFrame};
use super::scramble::Scramble;
use super::ticker::{sleep_until_or_cancel, Ticker};

/// One rendered frame of a scramble or decode pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrambleFrame {
    pub text: String,
    /// `true` on the last frame of a pass.
    pub revealed: bool,
}

struct ScrambleLoop {
    scramble: Scramble,
    rng: StdRng,
    ticker: Ticker,
    pass_started: Instant,
    repeat_every: Duration,
    cancel: CancellationToken,
}

/// Repeating scramble: one frame per `tick`, and a new pass every
/// `repeat_every` measured from the start of the previous pass. A pass that
/// outlasts `repeat_every` is followed immediately by the next.
///
/// Ends only on cancellation, or at once for an empty target.
pub fn scramble_stream(
    scramble: Scramble,
    tick: Duration,
    repeat_every: Duration,
    rng: StdRng,
    cancel: CancellationToken,
) -> impl Stream<Item = ScrambleFrame> + Send {
    let state = ScrambleLoop {
        scramble,
        rng,
        ticker: Ticker::new(tick, cancel.clone()),
        pass_started: Instant::now(),
        repeat_every,
        cancel,
    };

    stream::unfold(state, |mut s| async move {
        if s.scramble.total_ticks() == 0 {
            return None;
        }
        if s.scramble.is_revealed() {
            let next_pass = s.pass_started + s.repeat_every;
            if !sleep_until_or_cancel(next_pass, &s.cancel).await {
                return None;
            }
            s.scramble.restart();
            s.ticker.restart();
        }

        let at = s.ticker.tick().await?;
        if s.scramble.ticks() == 0 {
            s.pass_started = at;
        }
        let text = s.scramble.next_frame(&mut s.rng)?;
        let frame = ScrambleFrame {
            text,
            revealed: s.scramble.is_revealed(),
        };
        Some((frame, s))
    })
}

/// Rotating phrases: emits the current frame, then a new frame at every
/// phase boundary. Ends on cancellation or when there are no phrases.
pub fn rotation_stream(
    rotator: PhraseRotator,
    cancel: CancellationToken,
) -> impl Stream<Item = RotationFrame> + Send {
    stream::unfold((rotator, cancel, true), |(mut r, cancel, first)| async move {
        if !first {
            let wait = r.until_next_change();
            if !sleep_until_or_cancel(Instant::now() + wait, &cancel).await {
                return None;
            }
            r.advance(wait);
        }
        let frame = r.frame()?;
        Some((frame, (r, cancel, false)))
    })
}

/// A single hover-decode pass. Opening the stream is the pointer-enter;
/// dropping it is the pointer-leave.
pub fn decode_stream(
    text: &str,
    tick: Duration,
    rng: StdRng,
    cancel: CancellationToken,
) -> impl Stream<Item = ScrambleFrame> + Send {
    let mut decode = HoverDecode::new(text);
    decode.pointer_enter();
    let ticker = Ticker::new(tick, cancel);

    stream::unfold((decode, ticker, rng), |(mut d, mut ticker, mut rng)| async move {
        if !d.is_active() {
            return None;
        }
        ticker.tick().await?;
        let text = d.next_frame(&mut rng)?;
        let frame = ScrambleFrame {
            revealed: !d.is_active(),
            text,
        };
        Some((frame, (d, ticker, rng)))
    })
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use rand::SeedableRng;

    use super::super::rotate::{RotationPhase, EXIT_TRANSITION};
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    #[tokio::test(start_paused = true)]
    async fn scramble_stream_reveals_then_repeats() {
        let start = Instant::now();
        let stream = scramble_stream(
            Scramble::new("AB"),
            Duration::from_millis(60),
            Duration::from_millis(1000),
            rng(),
            CancellationToken::new(),
        );
        futures::pin_mut!(stream);

        let mut first_pass = Vec::new();
        for _ in 0..4 {
            first_pass.push(stream.next().await.unwrap());
        }
        assert_eq!(start.elapsed(), Duration::from_millis(180));
        assert_eq!(first_pass.last().unwrap().text, "AB");
        assert!(first_pass.last().unwrap().revealed);
        assert!(first_pass[..3].iter().all(|f| !f.revealed));

        let second = stream.next().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
        assert!(!second.revealed);
    }

    #[tokio::test(start_paused = true)]
    async fn scramble_stream_stops_on_cancel() {
        let cancel = CancellationToken::new();
        let stream = scramble_stream(
            Scramble::new("ABC"),
            Duration::from_millis(60),
            Duration::from_millis(500),
            rng(),
            cancel.clone(),
        );
        futures::pin_mut!(stream);

        assert!(stream.next().await.is_some());
        cancel.cancel();
        assert!(stream.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn scramble_stream_with_empty_target_ends_immediately() {
        let start = Instant::now();
        let frames: Vec<ScrambleFrame> = scramble_stream(
            Scramble::new(""),
            Duration::from_millis(60),
            Duration::from_secs(8),
            rng(),
            CancellationToken::new(),
        )
        .collect()
        .await;

        assert!(frames.is_empty());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn rotation_stream_advances_once_per_cycle() {
        let start = Instant::now();
        let hold = Duration::from_millis(4000);
        let phrases = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let stream = rotation_stream(PhraseRotator::new(phrases, hold), CancellationToken::new());
        futures::pin_mut!(stream);

        let mut advances = Vec::new();
        let mut last_index = 0;
        let mut order = vec!["A".to_string()];
        while advances.len() < 3 {
            let frame = stream.next().await.unwrap();
            if frame.index != last_index {
                advances.push(start.elapsed());
                order.push(frame.phrase.clone());
                assert_eq!(frame.phase, RotationPhase::Entering);
                last_index = frame.index;
            }
        }

        let cycle = hold + EXIT_TRANSITION;
        assert_eq!(advances, vec![cycle, cycle * 2, cycle * 3]);
        assert_eq!(order, vec!["A", "B", "C", "A"]);
    }

    #[tokio::test(start_paused = true)]
    async fn rotation_stream_without_phrases_ends() {
        let stream = rotation_stream(
            PhraseRotator::new(Vec::new(), Duration::from_secs(1)),
            CancellationToken::new(),
        );
        futures::pin_mut!(stream);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn decode_stream_runs_one_pass() {
        let frames: Vec<ScrambleFrame> = decode_stream(
            "Rust",
            Duration::from_millis(30),
            rng(),
            CancellationToken::new(),
        )
        .collect()
        .await;

        assert_eq!(frames.len(), 8);
        assert_eq!(frames.last().unwrap().text, "Rust");
        assert!(frames.last().unwrap().revealed);
    }
}
