//! Routing fallbacks.

use crate::error::AppError;

/// Unmatched path.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
