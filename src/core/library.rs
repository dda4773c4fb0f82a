use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Storage {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
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
    pub fn storage(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
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
            LibraryError::Storage { retryable, .. } => { *retryable }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        // interrupted and would-block writes can be attempted again
        let retryable = matches!(err.kind(),
            std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock);
        LibraryError::storage(
            format!("store io {:?}", err).as_str(), Some(format!("{:?}", err.kind())), retryable)
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
            LibraryError::Storage { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
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

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its stores.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ItemKind discriminates the two kinds of holdings; the lowercase names are the persisted values.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Physical,
    // records written by the browser app tag e-books as "ebook"
    #[serde(alias = "ebook")]
    Digital,
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemKind, LibraryError};

    #[tokio::test]
    async fn test_should_create_storage_error() {
        assert!(matches!(LibraryError::storage("test", None, false), LibraryError::Storage{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        let err = serde_json::from_str::<Vec<String>>("{").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_map_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        assert!(LibraryError::from(err).retryable());
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let lib_err = LibraryError::from(err);
        assert!(!lib_err.retryable());
        assert!(matches!(lib_err, LibraryError::Storage{ message: _, reason_code: Some(_), retryable: false }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::storage("test", None, false).retryable());
        assert_eq!(true, LibraryError::storage("test", None, true).retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_deserialize_legacy_kind() {
        let kind: ItemKind = serde_json::from_str("\"ebook\"").expect("should parse");
        assert_eq!(ItemKind::Digital, kind);
        assert_eq!("\"digital\"", serde_json::to_string(&kind).expect("should serialize"));
    }
}
