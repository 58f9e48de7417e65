use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickerdesk_core::ValidationError),

    #[error(transparent)]
    Upstream(#[from] tickerdesk_core::UpstreamError),

    #[error(transparent)]
    Store(#[from] tickerdesk_core::StoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<tickerdesk_core::LookupError> for CliError {
    fn from(error: tickerdesk_core::LookupError) -> Self {
        match error {
            tickerdesk_core::LookupError::Validation(e) => Self::Validation(e),
            tickerdesk_core::LookupError::Upstream(e) => Self::Upstream(e),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Upstream(_) => 3,
            Self::Store(_) => 4,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
