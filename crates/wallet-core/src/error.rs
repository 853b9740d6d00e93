use thiserror::Error;
use wallet_domain::{DraftField, ParseValueError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<DraftField>),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    UnknownValue(#[from] ParseValueError),
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}
