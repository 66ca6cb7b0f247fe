use thiserror::Error;

/// Errors raised while building or driving a pipeline.
///
/// Building a pipeline validates its arguments up front, so a rejected
/// request never produces partial output.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid argument '{name}' = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: String,
    },

    #[error("subscriber already used (state: {0})")]
    AlreadySubscribed(&'static str),

    #[error("failed to parse pipeline config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn invalid_argument(name: &'static str, value: i64, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            value,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
