use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("book not found: {0}")]
    BookNotFound(String),
    #[error("invalid navigation state: {0:?}")]
    InvalidNavigationState(String),
    #[error("unknown script category: {0:?}")]
    UnknownScriptCategory(String),
    #[error("unknown book status: {0:?}")]
    UnknownBookStatus(String),
    #[error("unknown form: {0:?}")]
    UnknownForm(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
