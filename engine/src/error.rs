//! Error handling for the expiry engine
//!
//! Only caller mistakes are errors. Bad historical data never is: the
//! engine's contract is best-effort reporting over imperfect records.

use thiserror::Error;

/// Engine error types
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid alert threshold {days}: {reason}")]
    InvalidThreshold { days: i64, reason: &'static str },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
