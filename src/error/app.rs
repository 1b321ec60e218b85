use thiserror::Error;

use super::{
    ConfigError, DatasetError, RetryConfigError, SessionError, SupportError, ValidationError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Retry error: {0}")]
    Retry(#[from] RetryConfigError),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("Support error: {0}")]
    Support(#[from] SupportError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn dataset<E>(error: E) -> Self
    where
        E: Into<DatasetError>,
    {
        error.into().into()
    }

    pub fn retry<E>(error: E) -> Self
    where
        E: Into<RetryConfigError>,
    {
        error.into().into()
    }

    pub fn session<E>(error: E) -> Self
    where
        E: Into<SessionError>,
    {
        error.into().into()
    }

    pub fn support<E>(error: E) -> Self
    where
        E: Into<SupportError>,
    {
        error.into().into()
    }
}
