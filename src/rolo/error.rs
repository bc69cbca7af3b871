use crate::model::ContactId;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Remote error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
