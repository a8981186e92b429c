use thiserror::Error;

/// Error variants produced while assembling Java source fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    #[error("invalid class name: {name:?}")]
    InvalidClassName { name: String },

    #[error("unbalanced generic type arguments in {name:?}")]
    UnbalancedGenerics { name: String },
}
