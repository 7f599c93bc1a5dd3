use thiserror::Error;

/// Failures when turning collaborator input (select values, slider names) into core types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unknown motion model `{0}`")]
    UnknownModel(String),
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
    #[error("invalid value `{value}` for {parameter}")]
    InvalidValue { parameter: String, value: String },
}
