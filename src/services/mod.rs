use thiserror::Error;

use crate::api::ApiError;
use crate::forms::FormError;
use crate::query::QueryError;

pub mod categories;
pub mod export;
pub mod main;
pub mod search;
pub mod upload;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The remote search service failed and no fallback was left.
    #[error("Upstream error: {0}")]
    Upstream(#[from] ApiError),

    /// User input was rejected; the message is shown as is.
    #[error("{0}")]
    Form(String),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        let message = match err {
            FormError::MissingFile => "Select a file first".to_string(),
            FormError::UnsupportedFormat(_) => {
                "Unsupported file format. Use CSV or Excel.".to_string()
            }
            FormError::UnknownColumns => {
                "The file has no recognised profile columns.".to_string()
            }
            FormError::Csv(err) => format!("The file could not be read as CSV: {err}"),
            FormError::Validation(_) => "Invalid search parameters.".to_string(),
        };
        ServiceError::Form(message)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
