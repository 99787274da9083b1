use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Upload rejected by media host: {message}")]
    UploadFailed { message: String },

    #[error("Deletion failed at media host: {message}")]
    DeletionFailed { message: String },
}

pub type Result<T> = std::result::Result<T, HubError>;
