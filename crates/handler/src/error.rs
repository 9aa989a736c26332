use model::response::{STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR};
use store::StoreError;
use thiserror::Error;

/// Why an invocation didn't produce a result.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// `base` or `exponent` was absent or null
    #[error("Missing base or exponent in the input event.")]
    MissingInput,

    /// An input couldn't be coerced to an integer
    #[error("invalid integer for {field}: {reason}")]
    InvalidInteger { field: &'static str, reason: String },

    #[error("math domain error: {base} ^ {exponent} is undefined")]
    Domain { base: f64, exponent: f64 },

    #[error("math range error: {base} ^ {exponent} is too large")]
    Range { base: f64, exponent: f64 },

    /// The result was computed but couldn't be stored
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingInput => STATUS_BAD_REQUEST,
            HandlerError::InvalidInteger { .. }
            | HandlerError::Domain { .. }
            | HandlerError::Range { .. }
            | HandlerError::Storage(_) => STATUS_INTERNAL_ERROR,
        }
    }

    /// Text returned to the caller, JSON encoded into the response body.
    pub fn body(&self) -> String {
        format!("Error: {self}")
    }
}
