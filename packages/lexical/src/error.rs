//! Error types for decoding and validating Lexical documents.
//!
//! Every failure aborts the enclosing operation: decode never returns a
//! partial tree and validation stops at the first violated invariant.

use thiserror::Error;

/// Main error type for the lexical library.
#[derive(Debug, Error)]
pub enum LexicalError {
    /// A node kind with the same tag is already registered.
    #[error("Node type already registered: '{0}'")]
    DuplicateTag(String),

    /// A node object has no string `type` field.
    #[error("Missing or invalid node type at {path}")]
    MissingDiscriminator { path: String },

    /// The `type` field names a kind the registry does not know.
    #[error("Unsupported node type '{tag}' at {path}")]
    UnregisteredType { tag: String, path: String },

    /// A kind could not transfer its fields from the node object.
    #[error("Malformed fields for {tag} node at {path}: {source}")]
    MalformedFields {
        tag: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A decoded node breaks a structural invariant.
    #[error("Invalid {tag} node at {path}: {violation}")]
    ValidationViolation {
        tag: String,
        path: String,
        violation: Violation,
    },

    /// The document nests deeper than the configured limit.
    #[error("Document nesting exceeds maximum depth of {max_depth} at {path}")]
    DepthExceeded { max_depth: usize, path: String },

    /// The document text is not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LexicalError {
    pub(crate) fn violation(tag: &str, path: &str, violation: Violation) -> Self {
        Self::ValidationViolation {
            tag: tag.to_string(),
            path: pointer(path),
            violation,
        }
    }
}

/// A structural invariant broken by a decoded node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("invalid direction '{0}'")]
    InvalidDirection(String),

    #[error("invalid format '{0}'")]
    InvalidFormat(String),

    /// Links hold exactly one child.
    #[error("expected exactly 1 child, found {0}")]
    LinkChildCount(usize),

    /// The single link child must be a text node.
    #[error("expected a text child, found '{0}'")]
    LinkChildKind(String),
}

/// Result type alias for lexical operations.
pub type Result<T> = std::result::Result<T, LexicalError>;

/// Render a node path for error messages; the document itself is `/`.
pub(crate) fn pointer(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
