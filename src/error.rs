//! Error types for webservice

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Character not found")]
    CharacterNotFound(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::CharacterNotFound(id.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }

    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Error::StorageUnavailable(msg.into())
    }
}
