//! Event-style delivery on top of [`LookupClient`].
//!
//! The client itself returns one `Result` per call. Callers that prefer to be
//! notified instead of awaiting can spawn the lookup here: input is still
//! validated synchronously, then exactly one [`LookupEvent`] is delivered.

use log::debug;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error_handling::LookupError;
use crate::lookup::{LookupClient, LookupResult, LookupTarget};

/// Completion of a spawned lookup.
#[derive(Debug)]
pub enum LookupEvent {
    /// The lookup produced a result
    Success(LookupResult),
    /// The lookup failed after dispatch
    Error(LookupError),
}

impl LookupEvent {
    /// Converts the event back into a `Result`.
    pub fn into_result(self) -> Result<LookupResult, LookupError> {
        match self {
            LookupEvent::Success(result) => Ok(result),
            LookupEvent::Error(err) => Err(err),
        }
    }
}

impl From<Result<LookupResult, LookupError>> for LookupEvent {
    fn from(outcome: Result<LookupResult, LookupError>) -> Self {
        match outcome {
            Ok(result) => LookupEvent::Success(result),
            Err(err) => LookupEvent::Error(err),
        }
    }
}

/// Spawns a lookup on the Tokio runtime and returns the channel its single
/// event arrives on.
///
/// # Errors
///
/// Validation errors (`InvalidUrl`, `TooManyUrls`, `NoValidUrl`) are returned
/// here, before anything is spawned.
///
/// # Panics
///
/// Must be called from within a Tokio runtime.
pub fn spawn_lookup(
    client: &LookupClient,
    target: impl Into<LookupTarget>,
) -> Result<oneshot::Receiver<LookupEvent>, LookupError> {
    let (tx, rx) = oneshot::channel();
    let _handle = spawn_lookup_with(client, target, move |event| {
        if tx.send(event).is_err() {
            debug!("Lookup event receiver dropped before completion");
        }
    })?;
    Ok(rx)
}

/// Spawns a lookup and invokes `on_complete` exactly once with its outcome.
///
/// # Errors
///
/// Same as [`spawn_lookup`]; `on_complete` is not called in that case.
pub fn spawn_lookup_with<F>(
    client: &LookupClient,
    target: impl Into<LookupTarget>,
    on_complete: F,
) -> Result<JoinHandle<()>, LookupError>
where
    F: FnOnce(LookupEvent) + Send + 'static,
{
    let request = client.prepare(target)?;
    let client = client.clone();
    Ok(tokio::spawn(async move {
        let outcome = client.execute(request).await;
        on_complete(LookupEvent::from(outcome));
    }))
}
