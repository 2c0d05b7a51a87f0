use thiserror::Error;

/// Why a brand-scoped lookup produced nothing.
///
/// The HTTP boundary collapses every reason into a single 404; the reason is
/// kept so a caller can still tell a malformed id from an unknown one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundReason {
    #[error("brand id '{0}' is not an integer")]
    MalformedBrandId(String),

    #[error("no brand with id {0}")]
    UnknownBrand(String),

    #[error("brand {0} has no products")]
    NoProducts(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Invalid parameter '{name}': '{value}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(NotFoundReason),
}

impl ServiceError {
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        ServiceError::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
