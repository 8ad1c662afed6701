use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Error type shared by the record model, the codec and the document store.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("[SmartBudget] Validation error: {0}")]
    Validation(String),
    #[error("[SmartBudget] Serialization error: {0}")]
    Serialization(String),
    #[error("[SmartBudget] Storage error: {0}")]
    Storage(String),
    #[error("[SmartBudget] I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`BudgetError`] used by callers that report failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Serialization,
    Storage,
}

impl BudgetError {
    pub fn validation(message: impl Into<String>) -> Self {
        BudgetError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BudgetError::Validation(_) => ErrorKind::Validation,
            BudgetError::Serialization(_) => ErrorKind::Serialization,
            BudgetError::Storage(_) | BudgetError::Io(_) => ErrorKind::Storage,
        }
    }

    /// Prefixes the message with `context`, keeping the error kind.
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        match self {
            BudgetError::Validation(message) => {
                BudgetError::Validation(format!("{context}: {message}"))
            }
            BudgetError::Serialization(message) => {
                BudgetError::Serialization(format!("{context}: {message}"))
            }
            BudgetError::Storage(message) => BudgetError::Storage(format!("{context}: {message}")),
            BudgetError::Io(err) => BudgetError::Storage(format!("{context}: {err}")),
        }
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Serialization(err.to_string())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Storage => "storage",
        };
        f.write_str(label)
    }
}
