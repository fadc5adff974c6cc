//! Error taxonomy for body construction and record ingestion.

/// Errors raised while constructing a body or reading an orbital-data record.
///
/// Every variant is fatal for the object being built: no partially
/// constructed body is ever returned alongside an error.
#[derive(thiserror::Error, Debug)]
pub enum BodyError {
    /// A required key is absent. Holds the dotted path of the key.
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` has the wrong type (expected {expected})")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// Diameter or mass not strictly positive.
    #[error("{quantity} must be positive (got {value})")]
    InvalidArgument { quantity: &'static str, value: f64 },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BodyError {
    /// Returns true if this error reports an absent field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, BodyError::MissingField(_))
    }

    /// Returns true if this error reports a non-positive diameter or mass.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BodyError::InvalidArgument { .. })
    }
}
