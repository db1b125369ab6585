use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] agrimarket_core::ValidationError),

    #[error(transparent)]
    Prediction(#[from] agrimarket_core::PredictionError),

    #[error(transparent)]
    Report(#[from] agrimarket_core::ReportError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Prediction(_) => 3,
            Self::Serialization(_) => 4,
            Self::Report(_) => 6,
            Self::Io(_) => 10,
        }
    }
}

impl From<agrimarket_core::CoreError> for CliError {
    fn from(error: agrimarket_core::CoreError) -> Self {
        match error {
            agrimarket_core::CoreError::Validation(e) => Self::Validation(e),
            agrimarket_core::CoreError::Prediction(e) => Self::Prediction(e),
            agrimarket_core::CoreError::Serialization(e) => Self::Serialization(e),
        }
    }
}
