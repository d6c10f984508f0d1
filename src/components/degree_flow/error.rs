//! Errors raised at the data-loading boundary.
//!
//! Aggregation and the sync store are infallible; only parsing external input
//! can fail.

/// Failure to load rows or configuration.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("malformed JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("expected a JSON array of rows, found {0}")]
	NotAnArray(&'static str),
}
