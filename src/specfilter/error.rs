use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Compound specification needs at least one child")]
    EmptyCompound,

    #[error("Invalid filter term '{0}', expected attr=value")]
    InvalidTerm(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid value '{value}' for attribute {attribute}")]
    InvalidValue { attribute: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;
