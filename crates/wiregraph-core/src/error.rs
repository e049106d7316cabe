use thiserror::Error;

/// Top-level error type for wiregraph configuration and startup.
#[derive(Error, Debug)]
pub enum WiregraphError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, WiregraphError>;
