use thiserror::Error;

/// Failures at the rendering edges. Recorders and aggregation never fail.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
