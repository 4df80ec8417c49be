use thiserror::Error;

/// Request-time failures. Deterministic input errors; never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl RecommendError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Artifact shape and index violations detected while building a model context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{name}: expected {expected} values for a {rows}x{cols} matrix, got {actual}")]
    DataLength {
        name: &'static str,
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{name}: row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        name: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{name}: index {missing} is missing (indices must cover 0..{len})")]
    IndexGap {
        name: &'static str,
        missing: usize,
        len: usize,
    },

    #[error("dimension mismatch: {what} ({left} != {right})")]
    Dimension {
        what: &'static str,
        left: usize,
        right: usize,
    },
}
