// Error taxonomy shared by every layer
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Transport failure, non-2xx status or unreadable upstream payload
    #[error("upstream request failed: {0}")]
    Network(String),

    /// Bad user input: non-positive amount, missing field, malformed date
    #[error("invalid input: {0}")]
    Validation(String),

    /// The upstream answered, but with nothing usable
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
