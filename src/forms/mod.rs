//! Form definitions backing the search routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod main;
pub mod upload;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("no file selected")]
    MissingFile,

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("no recognised profile columns in header")]
    UnknownColumns,

    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),
}
