//! Validation functionality
//!
//! Provides validation logic for:
//! - Identifier rules (simple identifiers, namespaces)
//! - Document naming checks (duplicates, dangling key references)

pub mod document;
pub mod input;

pub use document::{DocumentValidationResult, DocumentValidator, ValidationIssue};
pub use input::{ValidationError, ValidationResult};
