use crate::registry::MAX_LABEL_LEN;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OhmlineError {
    #[error("A resistor with {0} label already exists.")]
    DuplicateLabel(String),

    #[error("The resistor with {0} label does not exist.")]
    NotFound(String),

    #[error("Resistor labels must be 1 to {} characters, got {0:?}.", MAX_LABEL_LEN)]
    InvalidLabel(String),

    #[error("The circuit has no total resistance, so the current is undefined.")]
    ZeroResistance,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OhmlineError>;
