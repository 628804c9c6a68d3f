//! Error types for macro conversion

use thiserror::Error;

/// Errors during macro building and pagination
#[derive(Debug, Error)]
pub enum MacroError {
    #[error("no input lines to convert")]
    EmptyInput,

    #[error("page size must be at least 2, got {got}")]
    InvalidPageSize { got: usize },
}
