//! Error types for the uripath library.
//!
//! This module provides the error taxonomy for path construction and
//! classification, using `thiserror` for ergonomic error handling. No error
//! here is retried internally; every condition reflects a programming or
//! input error and is propagated to the caller as a typed failure.

use thiserror::Error;

use crate::segment::SegmentKind;

/// Result type alias for operations that may fail with a uripath error.
///
/// # Examples
///
/// ```
/// use uripath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the uripath library.
///
/// This enum encompasses all possible error conditions that can occur while
/// constructing segments, assembling paths, and classifying them.
#[derive(Debug, Error)]
pub enum Error {
    /// A required model reference was absent at segment construction time.
    #[error("invalid {segment} segment construction: {reason}")]
    InvalidConstruction {
        /// The kind of segment being constructed.
        segment: SegmentKind,
        /// The reason construction failed.
        reason: String,
    },

    /// A referenced model element is structurally incomplete.
    ///
    /// Discovered lazily when a literal is requested, for example an entity
    /// type that declares no key properties.
    #[error("schema inconsistency in '{type_name}': {details}")]
    SchemaInconsistency {
        /// The full name of the offending model element.
        type_name: String,
        /// Details about the inconsistency.
        details: String,
    },

    /// The assembled segment sequence does not match any grammar rule.
    #[error("unrecognized path shape with {len} segment(s): {}", format_kinds(kinds))]
    UnrecognizedShape {
        /// The number of segments in the offending sequence.
        len: usize,
        /// The kind of each segment, in path order.
        kinds: Vec<SegmentKind>,
    },

    /// A path was constructed from zero segments.
    #[error("path must contain at least one segment")]
    EmptyPath,

    /// A textual key literal could not be decoded.
    #[error("invalid key literal '{literal}': {reason}")]
    InvalidKeyLiteral {
        /// The offending literal text.
        literal: String,
        /// The reason the literal is invalid.
        reason: String,
    },

    /// Permission data could not be read.
    #[error("permission data error: {0}")]
    PermissionData(#[from] serde_json::Error),
}

fn format_kinds(kinds: &[SegmentKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

impl Error {
    /// Check if the error indicates an unrecognized path shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Error;
    ///
    /// let err = Error::UnrecognizedShape { len: 0, kinds: vec![] };
    /// assert!(err.is_unrecognized_shape());
    /// ```
    #[must_use]
    pub fn is_unrecognized_shape(&self) -> bool {
        matches!(self, Self::UnrecognizedShape { .. })
    }

    /// Check if the error indicates an incomplete model element.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Error;
    ///
    /// let err = Error::SchemaInconsistency {
    ///     type_name: "NS.User".to_string(),
    ///     details: "no declared key properties".to_string(),
    /// };
    /// assert!(err.is_schema_inconsistency());
    /// ```
    #[must_use]
    pub fn is_schema_inconsistency(&self) -> bool {
        matches!(self, Self::SchemaInconsistency { .. })
    }

    /// Check if the error indicates an invalid segment construction.
    #[must_use]
    pub fn is_invalid_construction(&self) -> bool {
        matches!(self, Self::InvalidConstruction { .. })
    }
}
