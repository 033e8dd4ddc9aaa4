use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] statline_core::ValidationError),

    #[error(transparent)]
    Config(#[from] statline_core::ConfigError),

    #[error(transparent)]
    Api(#[from] statline_core::ApiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Config(_) => 3,
            Self::Api(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
