use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductCardsError {
    #[error("{0}")]
    Pipeline(#[from] product_cards_common::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Please provide a valid Excel file (.xlsx or .xls): {0}")]
    InvalidExtension(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template generation error: {0}")]
    Template(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, ProductCardsError>;
