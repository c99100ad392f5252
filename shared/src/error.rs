use std::fmt;
use thiserror::Error;

/// The remote call an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Delete,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Fetch => "Fetch tasks error",
            Operation::Create => "Create task error",
            Operation::Delete => "Delete task error",
            Operation::Update => "Update tasks error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{operation}: {detail}")]
    Transport { operation: Operation, detail: String },
    #[error("{operation}: unexpected status {status}")]
    Status { operation: Operation, status: u16 },
    #[error("{operation}: invalid request body: {detail}")]
    Encode { operation: Operation, detail: String },
    #[error("{operation}: invalid response body: {detail}")]
    Decode { operation: Operation, detail: String },
}

impl ApiError {
    pub fn transport(operation: Operation, detail: impl Into<String>) -> Self {
        ApiError::Transport {
            operation,
            detail: detail.into(),
        }
    }
}
