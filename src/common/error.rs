use rust_tokenizers::error::TokenizerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RustPartitionsError {
    #[error("Endpoint not available error: {0}")]
    FileDownloadError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Invalid rule pattern error: {0}")]
    InvalidRulePattern(String),

    #[error("Incomplete partition spec error: {0}")]
    IncompletePartitionSpec(String),

    #[error("Invalid parameter tree error: {0}")]
    InvalidParameterTree(String),

    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),
}

impl From<std::io::Error> for RustPartitionsError {
    fn from(error: std::io::Error) -> Self {
        RustPartitionsError::IOError(error.to_string())
    }
}

impl From<regex::Error> for RustPartitionsError {
    fn from(error: regex::Error) -> Self {
        RustPartitionsError::InvalidRulePattern(error.to_string())
    }
}

impl From<TokenizerError> for RustPartitionsError {
    fn from(error: TokenizerError) -> Self {
        RustPartitionsError::TokenizerError(error.to_string())
    }
}

#[cfg(feature = "remote")]
impl From<cached_path::Error> for RustPartitionsError {
    fn from(error: cached_path::Error) -> Self {
        RustPartitionsError::FileDownloadError(error.to_string())
    }
}
