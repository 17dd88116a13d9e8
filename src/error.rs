use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid ngram size: {0}")]
    InvalidNgramSize(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn ngram_size<S: Into<String>>(msg: S) -> Self {
        Error::InvalidNgramSize(msg.into())
    }
}
