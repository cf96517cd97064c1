use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
