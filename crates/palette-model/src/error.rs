use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown experience tier: {0:?}")]
    TierParse(String),
    #[error("unknown execution mode: {0:?}")]
    ModeParse(String),
    #[error("invalid category {id:?}: {reason}")]
    InvalidCategory { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
