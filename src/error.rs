use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse as number: {0:?}")]
    NotANumber(String),

    #[error("Text is not accepted as a number: {0:?}")]
    Text(String),

    #[error("Boolean is not accepted as a number")]
    Boolean,

    #[error("Value is absent")]
    Absent,

    #[error("Expected a scalar, got {0}")]
    NotScalar(&'static str),

    #[error("Invalid numeric policy: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
