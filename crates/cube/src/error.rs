use thiserror::Error;

/// Rejected rotation requests. Both variants are produced while parsing,
/// before any facelet has moved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("invalid rotation target: {0:?}")]
    InvalidTarget(String),
    #[error("invalid rotation direction: {0:?}")]
    InvalidDirection(String),
}
