use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Rejected {
        message: String,
        retryable: bool,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn validation(message: &str) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code: None }
    }

    pub fn retryable(&self) -> bool {
        matches!(self, CommandError::Rejected { retryable: true, .. })
    }
}

// Command is a single shell action over the catalog.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

// fails with a validation error when a required field is blank
pub(crate) fn require(field: &str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        Err(CommandError::validation(format!("{} cannot be empty", field).as_str()))
    } else {
        Ok(())
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let retryable = other.retryable();
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            err @ LibraryError::HasOpenLoans { .. } => {
                CommandError::Rejected { message: err.to_string(), retryable }
            }
            LibraryError::Unavailable { message, .. } => {
                CommandError::Rejected { message, retryable }
            }
            LibraryError::NotBorrowed { message } => {
                CommandError::Rejected { message, retryable }
            }
            LibraryError::InvalidValue { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message } => write!(f, "{}", message),
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::Rejected { message, .. } => write!(f, "{}", message),
            CommandError::Runtime { message, reason_code } => write!(f, "{} {:?}", message, reason_code),
            CommandError::Serialization { message } => write!(f, "{}", message),
            CommandError::Validation { message, .. } => write!(f, "{}", message),
        }
    }
}
