use messfix_core_types::EntityId;
use thiserror::Error;

/// Result type alias using MessFixError
pub type Result<T> = std::result::Result<T, MessFixError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Snapshot input
    InvalidRecordType,
    InvalidRecordId,
    EmptyRecord,

    // Structural
    InvariantViolation,

    // Runtime
    Concurrency,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidRecordType => "ERR_INVALID_RECORD_TYPE",
            ExErrorKind::InvalidRecordId => "ERR_INVALID_RECORD_ID",
            ExErrorKind::EmptyRecord => "ERR_EMPTY_RECORD",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the error was caused by the snapshot content rather than by
    /// the engine itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidRecordType | ExErrorKind::InvalidRecordId | ExErrorKind::EmptyRecord
        )
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    day: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            day: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (rendered with its kind marker, e.g. `F3`)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add day context
    pub fn with_day(mut self, day: usize) -> Self {
        self.day = Some(day);
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

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn day(&self) -> Option<usize> {
        self.day
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
        if let Some(day) = self.day {
            write!(f, " on day {}", day)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for reconciliation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MessFixError {
    // ===== Snapshot Input Errors =====
    /// A raw record was the empty string
    #[error("Empty record")]
    EmptyRecord,

    /// A raw record started with an unknown type tag
    #[error("Unknown record type '{tag}' in record '{record}'")]
    InvalidRecordType { tag: char, record: String },

    /// A raw record's id part is not a non-negative integer
    #[error("Invalid record id in record '{record}'")]
    InvalidRecordId { record: String },

    // ===== Structural Errors =====
    /// Folder expected in the hierarchy was missing
    #[error("Folder not found: F{folder_id}")]
    FolderNotFound { folder_id: EntityId },

    /// Box expected in the hierarchy was missing
    #[error("Box not found: B{box_id}")]
    BoxNotFound { box_id: EntityId },

    /// Paper expected in the hierarchy was missing
    #[error("Paper not found: P{paper_id}")]
    PaperNotFound { paper_id: EntityId },

    /// Hierarchy failed post-merge validation
    #[error("Invariant violation: {reason}")]
    InvariantViolation { reason: String },

    // ===== Runtime Errors =====
    /// A previous call panicked while holding the reconciler lock
    #[error("Reconciler lock poisoned")]
    LockPoisoned,

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from MessFixError to the structured ExError
impl From<MessFixError> for ExError {
    fn from(err: MessFixError) -> Self {
        match err {
            MessFixError::EmptyRecord => ExError::new(ExErrorKind::EmptyRecord)
                .with_op(messfix_core_types::schema::OP_PARSE_SNAPSHOT)
                .with_message("Empty record"),

            MessFixError::InvalidRecordType { tag, record } => {
                ExError::new(ExErrorKind::InvalidRecordType)
                    .with_op(messfix_core_types::schema::OP_PARSE_SNAPSHOT)
                    .with_entity_id(record)
                    .with_message(format!("Unknown record type '{}'", tag))
            }

            MessFixError::InvalidRecordId { record } => ExError::new(ExErrorKind::InvalidRecordId)
                .with_op(messfix_core_types::schema::OP_PARSE_SNAPSHOT)
                .with_entity_id(record)
                .with_message("Record id is not a non-negative integer"),

            // Lookups on ids that exist by construction are logic defects
            MessFixError::FolderNotFound { folder_id } => ExError::new(ExErrorKind::Internal)
                .with_entity_id(format!("F{}", folder_id))
                .with_message("Folder missing from hierarchy"),

            MessFixError::BoxNotFound { box_id } => ExError::new(ExErrorKind::Internal)
                .with_entity_id(format!("B{}", box_id))
                .with_message("Box missing from hierarchy"),

            MessFixError::PaperNotFound { paper_id } => ExError::new(ExErrorKind::Internal)
                .with_entity_id(format!("P{}", paper_id))
                .with_message("Paper missing from hierarchy"),

            MessFixError::InvariantViolation { reason } => {
                ExError::new(ExErrorKind::InvariantViolation).with_message(reason)
            }

            MessFixError::LockPoisoned => ExError::new(ExErrorKind::Concurrency)
                .with_op(messfix_core_types::schema::OP_APPLY_SNAPSHOT)
                .with_message("Reconciler lock poisoned"),

            MessFixError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to MessFixError
impl From<serde_json::Error> for MessFixError {
    fn from(err: serde_json::Error) -> Self {
        MessFixError::Serialization {
            message: err.to_string(),
        }
    }
}
