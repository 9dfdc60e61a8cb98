use dequal_core_types::ValueKind;
use thiserror::Error;

/// Result type alias using DequalError
pub type Result<T> = std::result::Result<T, DequalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Coercion
    NotIterable,

    // Configuration
    InvalidConfig,

    // Host document
    NotFound,
    InvalidInput,

    // Integration/IO
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotIterable => "ERR_NOT_ITERABLE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and
/// context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    value_kind: Option<ValueKind>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            value_kind: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the kind of the offending value
    pub fn with_value_kind(mut self, kind: ValueKind) -> Self {
        self.value_kind = Some(kind);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn value_kind(&self) -> Option<ValueKind> {
        self.value_kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(kind) = self.value_kind {
            write!(f, " (value_kind: {})", kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for dequal operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DequalError {
    /// Value cannot be viewed as a sequence
    #[error("{rendered} is not iterable")]
    NotIterable { rendered: String, kind: ValueKind },

    /// Configuration could not be parsed or applied
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Value could not be converted to or from an external format
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Host document rejected an operation
    #[error("Document error: {message}")]
    Dom { message: String },

    /// Node handle does not refer to a live element
    #[error("Node not found: {node}")]
    NodeNotFound { node: String },
}

impl From<DequalError> for ExError {
    fn from(err: DequalError) -> Self {
        match err {
            DequalError::NotIterable { rendered, kind } => ExError::new(ExErrorKind::NotIterable)
                .with_value_kind(kind)
                .with_message(format!("{} is not iterable", rendered)),

            DequalError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_message(format!("Invalid configuration: {}", reason)),

            DequalError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            DequalError::Dom { message } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            DequalError::NodeNotFound { node } => ExError::new(ExErrorKind::NotFound)
                .with_message(format!("Node not found: {}", node)),
        }
    }
}

/// Conversion from serde_json::Error to DequalError
impl From<serde_json::Error> for DequalError {
    fn from(err: serde_json::Error) -> Self {
        DequalError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DequalError {
    fn from(err: toml::de::Error) -> Self {
        DequalError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
