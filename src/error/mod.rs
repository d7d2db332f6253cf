mod app_error;

pub use app_error::AppError;

/// Result alias shared by handlers, stores and startup code.
pub type Result<T> = std::result::Result<T, AppError>;
