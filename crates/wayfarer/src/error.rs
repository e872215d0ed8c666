use thiserror::Error;

/// Store-wide error type for the mock document store.
///
/// Steady-state reads and writes against missing data never produce an error:
/// not-found is reported as `None` or a zero count. The variants below cover
/// malformed input at the caller boundary and failures of the in-memory table
/// itself.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading a file failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A document passed to a write was not a JSON object
    #[error("Invalid document for collection '{collection}': {reason}")]
    InvalidDocument {
        collection: String,
        reason:     String,
    },

    /// A raw filter value could not be turned into a `Filter`
    #[error("Invalid filter: {reason}")]
    InvalidFilter {
        reason: String,
    },

    /// A raw update value could not be turned into an `Update`
    #[error("Invalid update: {reason}")]
    InvalidUpdate {
        reason: String,
    },

    /// The document table lock was poisoned by a panicking writer
    #[error("Lock acquisition failed: {reason}")]
    LockFailed {
        reason: String,
    },

    /// Seeding a collection failed
    #[error("Seeding collection '{collection}' failed: {reason}")]
    Seed {
        collection: String,
        reason:     String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_document_display() {
        let err = StoreError::InvalidDocument {
            collection: "posts".to_string(),
            reason:     "expected a JSON object, got array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid document for collection 'posts': expected a JSON object, got array"
        );
    }

    #[test]
    fn test_json_error_from() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: StoreError = source.into();
        assert!(matches!(err, StoreError::Json { .. }));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_io_error_from() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StoreError = source.into();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
