mod catalog;
mod error;
mod http;
mod service;

pub use self::catalog::CatalogError;
pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::service::{NotFoundReason, ServiceError};
