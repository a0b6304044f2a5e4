use thiserror::Error;

/// Why a capability model could not produce a property or state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property has no value at the state, like `cp` inside the dome.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// A numerical failure, such as a solve that did not converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
