//! Identifier validation utilities.
//!
//! CSDL names come in two shapes: simple identifiers (entity, property and
//! alias names) and namespaces, which are dot-separated simple identifiers.
//! These helpers are used by qualified-name resolution and by the document
//! validator.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length for a simple identifier
pub const MAX_SIMPLE_IDENTIFIER_LENGTH: usize = 128;

/// Maximum length for a namespace
pub const MAX_NAMESPACE_LENGTH: usize = 511;

static SIMPLE_IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]{0,127}$").unwrap());

/// Errors that can occur during identifier validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Input exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input has invalid format
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Whether `name` is a CSDL simple identifier.
///
/// # Examples
///
/// ```
/// use csdl_metadata_sdk::validation::input::is_simple_identifier;
///
/// assert!(is_simple_identifier("App"));
/// assert!(is_simple_identifier("_internal1"));
/// assert!(!is_simple_identifier("Corvus.Data"));
/// assert!(!is_simple_identifier("1st"));
/// ```
pub fn is_simple_identifier(name: &str) -> bool {
    SIMPLE_IDENTIFIER_REGEX.is_match(name)
}

/// Validate a simple identifier (alias, entity type or property name).
///
/// # Rules
///
/// - Must not be empty
/// - Must not exceed 128 characters
/// - Must start with an ASCII letter or underscore
/// - May contain ASCII letters, digits and underscores
pub fn validate_simple_identifier(field: &'static str, name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    if name.len() > MAX_SIMPLE_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_SIMPLE_IDENTIFIER_LENGTH,
            actual: name.len(),
        });
    }

    if !is_simple_identifier(name) {
        return Err(ValidationError::InvalidFormat(
            field,
            format!(
                "'{}' must start with a letter or underscore and contain only letters, digits and underscores",
                name
            ),
        ));
    }

    Ok(())
}

/// Validate a schema namespace.
///
/// # Examples
///
/// ```
/// use csdl_metadata_sdk::validation::input::validate_namespace;
///
/// assert!(validate_namespace("Corvus.Data.App").is_ok());
/// assert!(validate_namespace("App").is_ok());
/// assert!(validate_namespace("Corvus..App").is_err());
/// assert!(validate_namespace("").is_err());
/// ```
pub fn validate_namespace(namespace: &str) -> ValidationResult<()> {
    if namespace.is_empty() {
        return Err(ValidationError::Empty("namespace"));
    }

    if namespace.len() > MAX_NAMESPACE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "namespace",
            max: MAX_NAMESPACE_LENGTH,
            actual: namespace.len(),
        });
    }

    for segment in namespace.split('.') {
        if !is_simple_identifier(segment) {
            return Err(ValidationError::InvalidFormat(
                "namespace",
                format!("invalid segment '{}' in '{}'", segment, namespace),
            ));
        }
    }

    Ok(())
}
