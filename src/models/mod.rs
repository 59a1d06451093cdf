//! Models module for the SDK
//!
//! Plain data descriptions of what a caller wants to add to a metadata
//! document. They carry no tree state; `MetadataDocument` turns them into
//! CSDL elements.

pub mod entity_type;
pub mod enums;
pub mod navigation;
pub mod schema;

pub use entity_type::{EntityTypeSpec, PropertySpec};
pub use enums::*;
pub use navigation::{BiDirectionalNavigation, NavigationSpec};
pub use schema::{IncludeSpec, ReferenceSpec, SchemaSpec};
