use thiserror::Error;

/// The two failure kinds every operation reports, plus internal faults that
/// are not the caller's doing.
#[derive(Debug, Error)]
pub enum StreamsError {
    /// Malformed or unknown identifiers, out-of-range parameters.
    #[error("{0}")]
    Input(String),

    /// The target exists but the requester may not act on it.
    #[error("{0}")]
    Access(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl StreamsError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn access(msg: impl Into<String>) -> Self {
        Self::Access(msg.into())
    }
}

pub type StreamsResult<T> = Result<T, StreamsError>;
