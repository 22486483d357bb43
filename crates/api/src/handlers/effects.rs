//! Server-Sent Event streams driving the animated text on the public page.
//!
//! Each subscription owns its timers. A closed connection drops the stream
//! and with it the timers; server shutdown cancels every stream through
//! [`AppState::effects_cancel`].

use std::convert::Infallible;
use std::pin::Pin;

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, KeepAliveStream, Sse};
use folio_core::effects::rotate::PhraseRotator;
use folio_core::effects::scramble::Scramble;
use folio_core::effects::stream::{decode_stream, rotation_stream, scramble_stream};
use folio_core::effects::SHUFFLE_TICK;
use futures::stream::{Stream, StreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::profile::load_display_profile;
use crate::state::AppState;

/// Longest text accepted by the decode stream.
pub const MAX_DECODE_CHARS: usize = 200;

/// Serialize a frame as an unnamed SSE event (delivered to `onmessage`).
fn to_event<T: Serialize>(frame: T) -> Result<Event, Infallible> {
    let event = Event::default().json_data(&frame).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to encode effect frame");
        Event::default().comment("encode error")
    });
    Ok(event)
}

type FrameStream = Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>;

type EventStream = Sse<KeepAliveStream<FrameStream>>;

fn sse<S, T>(frames: S) -> EventStream
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + 'static,
{
    Sse::new(frames.map(to_event).boxed()).keep_alive(KeepAlive::default())
}

/// GET /api/v1/effects/name
///
/// Scramble reveal of the profile name, restarted every `name_speed` ms.
pub async fn name_stream(State(state): State<AppState>) -> EventStream {
    let profile = load_display_profile(state.profiles.as_ref()).await;
    tracing::debug!(interval_ms = profile.name_speed, "Name stream opened");
    sse(scramble_stream(
        Scramble::new(&profile.full_name),
        SHUFFLE_TICK,
        profile.name_interval(),
        StdRng::from_os_rng(),
        state.effects_cancel.child_token(),
    ))
}

/// GET /api/v1/effects/roles
///
/// Rotating role phrases, each held for `role_speed` ms.
pub async fn roles_stream(State(state): State<AppState>) -> EventStream {
    let profile = load_display_profile(state.profiles.as_ref()).await;
    let hold = profile.role_hold();
    sse(rotation_stream(
        PhraseRotator::new(profile.roles, hold),
        state.effects_cancel.child_token(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct DecodeQuery {
    pub text: String,
}

/// GET /api/v1/effects/decode?text=...
///
/// One reveal pass of `text`. Opening the stream is the pointer-enter;
/// closing it is the pointer-leave.
pub async fn decode(
    State(state): State<AppState>,
    Query(query): Query<DecodeQuery>,
) -> AppResult<EventStream> {
    if query.text.chars().count() > MAX_DECODE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Text longer than {MAX_DECODE_CHARS} characters"
        )));
    }
    Ok(sse(decode_stream(
        &query.text,
        SHUFFLE_TICK,
        StdRng::from_os_rng(),
        state.effects_cancel.child_token(),
    )))
}
