use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpendAuraError {
    #[error("No transactions found. Please ensure it's a standard text PDF bank statement.")]
    NoTransactions,

    #[error("Page index {0} is out of range")]
    PageOutOfRange(usize),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpendAuraError>;
