use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
