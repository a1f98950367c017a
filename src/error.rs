use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for the emoji picker engine
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("failed to parse emoji dictionary: {0}")]
    DictionaryParse(#[from] serde_json::Error),

    #[error("emoji dictionary is empty")]
    DictionaryEmpty,

    #[error("duplicate emoji name in dictionary: '{0}'")]
    DuplicateName(String),

    #[error("failed to read dictionary file '{path}': {source}")]
    DictionaryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PickerError>;

/// Extension trait for ergonomic error logging
#[allow(dead_code)]
pub trait LogResultExt<T> {
    fn log_err(self) -> Option<T>;
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> LogResultExt<T> for std::result::Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                error!(error = ?e, "Operation failed");
                None
            }
        }
    }

    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = ?e, "Operation warning");
                None
            }
        }
    }
}
