use crossterm::event::EventStream;
use futures::stream::{Stream, StreamExt};
use tracing::warn;

use super::InputEvent;

/// Terminal events as an async stream.
///
/// Errors from the underlying `EventStream` are logged and skipped so a
/// transient read failure does not end the UI. The stream ends only when
/// crossterm's does.
pub fn input_stream() -> impl Stream<Item = InputEvent> + Unpin {
    EventStream::new().filter_map(|result| async move {
        match result {
            Ok(event) => Some(InputEvent::from(event)),
            Err(e) => {
                warn!("input event stream error (continuing): {}", e);
                None
            }
        }
    }).boxed_local()
}
