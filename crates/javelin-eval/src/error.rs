use javelin_primitives::PrimitiveValue;
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unknown primitive: {0}")]
    UnknownPrimitive(String),
}

impl EvalError {
    /// Error for an operand the dispatch tables have no entry for.
    pub fn unknown_primitive(value: &PrimitiveValue) -> Self {
        EvalError::UnknownPrimitive(value.describe())
    }
}
