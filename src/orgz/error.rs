use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgzError {
    #[error("Invalid date: {0} (expected DD-MM-YYYY)")]
    InvalidDate(String),

    #[error("Invalid priority: {0} (expected High, Medium or Low)")]
    InvalidPriority(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OrgzError>;
