use thiserror::Error;

pub type PresenceResult<T> = Result<T, PresenceError>;

/// Failure surfaced by a host adapter while answering a lookup.
///
/// Absence of an entity is not an error; lookups express that with
/// `Ok(None)` or an empty list. An `Err` means the adapter itself fell over.
#[derive(Error, Debug)]
pub enum PresenceError {
    #[error("host lookup failed: {0}")]
    Host(#[from] anyhow::Error),
}
