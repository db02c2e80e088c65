use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Member removal is a hard rejection while loans are outstanding.
    HasOpenLoans {
        message: String,
        open_loans: usize,
    },
    // All copies are out. Retrying after another member returns a copy can succeed.
    Unavailable {
        message: String,
        retryable: bool,
    },
    NotBorrowed {
        message: String,
    },
    InvalidValue {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn has_open_loans(message: &str, open_loans: usize) -> LibraryError {
        LibraryError::HasOpenLoans { message: message.to_string(), open_loans }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::Unavailable { message: message.to_string(), retryable: true }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn invalid_value(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidValue { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::HasOpenLoans { .. } => { false }
            LibraryError::Unavailable { retryable, .. } => { *retryable }
            LibraryError::NotBorrowed { .. } => { false }
            LibraryError::InvalidValue { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::HasOpenLoans { message, open_loans } => {
                write!(f, "{} ({} open loan(s))", message, open_loans)
            }
            LibraryError::Unavailable { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidValue { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Availability of a title, derived from its remaining copies.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Unavailable,
}

impl BookStatus {
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity > 0 {
            BookStatus::Available
        } else {
            BookStatus::Unavailable
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Unavailable => write!(f, "Not Available"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    OnTime,
    Overdue,
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::OnTime => write!(f, "OnTime"),
            LoanStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError, LoanStatus};

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_has_open_loans_error() {
        let err = LibraryError::has_open_loans("member M1 has unreturned books", 2);
        assert!(matches!(err, LibraryError::HasOpenLoans{ open_loans: 2, .. }));
        assert_eq!("member M1 has unreturned books (2 open loan(s))", err.to_string());
    }

    #[test]
    fn test_should_create_unavailable_error() {
        assert!(matches!(LibraryError::unavailable("test"), LibraryError::Unavailable{ message: _, retryable: true }));
    }

    #[test]
    fn test_should_create_not_borrowed_error() {
        assert!(matches!(LibraryError::not_borrowed("test"), LibraryError::NotBorrowed{ message: _ }));
    }

    #[test]
    fn test_should_create_invalid_value_error() {
        assert!(matches!(LibraryError::invalid_value("test", None), LibraryError::InvalidValue{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error_from_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::duplicate_key("test").retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::has_open_loans("test", 1).retryable());
        assert_eq!(true, LibraryError::unavailable("test").retryable());
        assert_eq!(false, LibraryError::not_borrowed("test").retryable());
        assert_eq!(false, LibraryError::invalid_value("test", None).retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[test]
    fn test_should_derive_book_status_from_quantity() {
        assert_eq!(BookStatus::Available, BookStatus::from_quantity(3));
        assert_eq!(BookStatus::Unavailable, BookStatus::from_quantity(0));
    }

    #[test]
    fn test_should_format_statuses() {
        assert_eq!("Available", BookStatus::Available.to_string());
        assert_eq!("Not Available", BookStatus::Unavailable.to_string());
        assert_eq!("OnTime", LoanStatus::OnTime.to_string());
        assert_eq!("Overdue", LoanStatus::Overdue.to_string());
    }
}
