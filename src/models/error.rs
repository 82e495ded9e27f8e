#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request aborted")]
    Aborted,
}

impl From<futures::future::Aborted> for AppError {
    fn from(_: futures::future::Aborted) -> Self {
        Self::Aborted
    }
}
