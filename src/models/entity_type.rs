//! Entity type and property models

use super::enums::PrimitiveType;
use serde::{Deserialize, Serialize};

/// Structural property of an entity type
///
/// Facets left as `None` are omitted from the output, so the CSDL defaults
/// apply (for instance a missing `nullable` means the property is nullable).
///
/// # Example
///
/// ```rust
/// use csdl_metadata_sdk::models::{PrimitiveType, PropertySpec};
///
/// let id = PropertySpec::new("ProductId", PrimitiveType::Int32).key().nullable(false);
/// assert!(id.is_key);
/// assert_eq!(id.type_name(), "Edm.Int32");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PrimitiveType,
    /// Declared as `Collection(<type>)`
    #[serde(default)]
    pub collection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<bool>,
    /// Spatial reference id, either a number or `variable`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Member of the entity key
    #[serde(default)]
    pub is_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    /// Overrides the name written to the key's `PropertyRef`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, property_type: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            property_type,
            collection: false,
            nullable: None,
            max_length: None,
            precision: None,
            scale: None,
            unicode: None,
            srid: None,
            default_value: None,
            is_key: false,
            key_alias: None,
            key_name: None,
        }
    }

    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }

    pub fn key_alias(mut self, alias: impl Into<String>) -> Self {
        self.key_alias = Some(alias.into());
        self
    }

    pub fn key_name(mut self, name: impl Into<String>) -> Self {
        self.key_name = Some(name.into());
        self
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn unicode(mut self, unicode: bool) -> Self {
        self.unicode = Some(unicode);
        self
    }

    pub fn srid(mut self, srid: impl Into<String>) -> Self {
        self.srid = Some(srid.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Value of the `Type` attribute
    pub fn type_name(&self) -> String {
        if self.collection {
            format!("Collection({})", self.property_type)
        } else {
            self.property_type.to_string()
        }
    }

    /// Name referenced by the key's `PropertyRef`
    pub fn key_ref_name(&self) -> &str {
        self.key_name.as_deref().unwrap_or(&self.name)
    }
}

/// Entity type to append to a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_stream: Option<bool>,
    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
}

impl EntityTypeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            is_abstract: None,
            open: None,
            has_stream: None,
            properties: Vec::new(),
        }
    }

    pub fn base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn is_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = Some(is_abstract);
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn has_stream(mut self, has_stream: bool) -> Self {
        self.has_stream = Some(has_stream);
        self
    }

    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    /// Key members in declaration order
    pub fn key_properties(&self) -> impl Iterator<Item = &PropertySpec> {
        self.properties.iter().filter(|p| p.is_key)
    }
}
