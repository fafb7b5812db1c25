// File: crates/chart-layout/src/error.rs
// Summary: Error type shared by every layout operation.

use thiserror::Error;

/// The only failure kind of the layout core: the caller handed in data that has
/// no well-defined geometry (empty required input, non-positive counts,
/// zero-sum weights, degenerate regression input).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LayoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LayoutError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
