use btcwatch_core::{ApiError, ApiErrorKind, ConfigError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },

    #[error("cannot read config file '{path}': {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Api(error) => match error.kind() {
                ApiErrorKind::InvalidLength | ApiErrorKind::UnknownCurrency => 2,
                ApiErrorKind::TransportInit | ApiErrorKind::Transport => 3,
                ApiErrorKind::MalformedJson | ApiErrorKind::MissingField => 4,
            },
            Self::Config(_) | Self::InvalidEnv { .. } | Self::ConfigParse { .. } => 2,
            Self::Serialization(_) => 4,
            Self::ConfigFile { .. } | Self::Io(_) => 10,
        }
    }
}
