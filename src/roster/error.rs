use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("No employees to export")]
    EmptyExport,

    #[error("Malformed employee id: {0:?} (expected EMP followed by digits)")]
    MalformedEmployeeId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
