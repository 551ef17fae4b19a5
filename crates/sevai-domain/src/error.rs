//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by service and infrastructure variants
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Sevai
#[derive(Error, Debug)]
pub enum Error {
    /// A source record is missing required fields or has an unknown shape
    #[error("Malformed record #{position} in {source_name}: {reason}")]
    MalformedRecord {
        /// Source the record came from (file name or logical label)
        source_name: String,
        /// Zero-based position of the record inside its source
        position: usize,
        /// What is wrong with the record
        reason: String,
    },

    /// The embedding backend could not be reached or refused service temporarily
    #[error("Embedding service unavailable: {message}")]
    EmbeddingServiceUnavailable {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The completion backend could not be reached or refused service temporarily
    #[error("Completion service unavailable: {message}")]
    CompletionServiceUnavailable {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The completion backend rejected the prompt (content policy)
    #[error("Completion rejected: {message}")]
    CompletionRejected {
        /// Description of the rejection
        message: String,
    },

    /// Raw query exceeds the accepted size bound
    #[error("Query too long: {length} characters (maximum {max})")]
    QueryTooLong {
        /// Length of the rejected query in characters
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Credentials were rejected by an external service
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication error
        message: String,
    },

    /// Vector index operation error
    #[error("Vector database error: {message}")]
    VectorDb {
        /// Description of the vector database error
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Ingestion error creation methods
impl Error {
    /// Create a malformed record error
    pub fn malformed_record<S: Into<String>, R: Into<String>>(
        source_name: S,
        position: usize,
        reason: R,
    ) -> Self {
        Self::MalformedRecord {
            source_name: source_name.into(),
            position,
            reason: reason.into(),
        }
    }
}

// External service error creation methods
impl Error {
    /// Create an embedding service unavailable error
    pub fn embedding_unavailable<S: Into<String>>(message: S) -> Self {
        Self::EmbeddingServiceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create an embedding service unavailable error with source
    pub fn embedding_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::EmbeddingServiceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a completion service unavailable error
    pub fn completion_unavailable<S: Into<String>>(message: S) -> Self {
        Self::CompletionServiceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a completion service unavailable error with source
    pub fn completion_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::CompletionServiceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a completion rejected error
    pub fn completion_rejected<S: Into<String>>(message: S) -> Self {
        Self::CompletionRejected {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a vector database error
    pub fn vector_db<S: Into<String>>(message: S) -> Self {
        Self::VectorDb {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the failure is worth exactly one more attempt
    ///
    /// Only unreachable / rate-limited / timed-out external services qualify.
    /// Authentication failures, malformed input and policy rejections are final.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::EmbeddingServiceUnavailable { .. } | Self::CompletionServiceUnavailable { .. }
        )
    }
}
