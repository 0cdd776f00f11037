//! Error types for the sub-breed fetcher.
//!
//! # Design
//! Callers see exactly one error: `BreedNotFoundError`, carrying the breed
//! they asked for. Whether the breed is truly unknown upstream or the request
//! never completed is not part of the contract. The underlying cause is kept
//! as a `FailureReason` behind `source()` so it can still be logged.

use thiserror::Error;

/// Why a lookup failed. Diagnostic only; callers should not branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// The request could not be sent or the body could not be read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body was not a JSON object with a string `status` field.
    #[error("response body is not a valid envelope: {0}")]
    Decode(String),

    /// The envelope's `status` was something other than `"success"`.
    #[error("upstream reported status {status:?}")]
    Unsuccessful { status: String },

    /// `status` was `"success"` but `message` was not an array of strings.
    #[error("malformed sub-breed list: {0}")]
    MalformedMessage(String),
}

/// The single error returned by `BreedFetcher::get_sub_breeds`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("breed not found: {breed}")]
pub struct BreedNotFoundError {
    breed: String,
    #[source]
    reason: FailureReason,
}

impl BreedNotFoundError {
    pub fn new(breed: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            breed: breed.into(),
            reason,
        }
    }

    /// The breed exactly as the caller supplied it.
    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn reason(&self) -> &FailureReason {
        &self.reason
    }
}
