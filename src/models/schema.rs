//! Schema and reference models

use serde::{Deserialize, Serialize};

/// A schema to register under `edmx:DataServices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSpec {
    /// Dot-qualified namespace, e.g. `Corvus.Data.App`
    pub namespace: String,
    /// Optional short alias usable in qualified names instead of the namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SchemaSpec {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Schema pulled in from a referenced document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeSpec {
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// An `edmx:Reference` to another CSDL document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSpec {
    pub uri: String,
    #[serde(default, alias = "includeSchema")]
    pub includes: Vec<IncludeSpec>,
}

impl ReferenceSpec {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            includes: Vec::new(),
        }
    }

    /// Add an `edmx:Include` for the given namespace
    pub fn include(mut self, namespace: impl Into<String>, alias: Option<&str>) -> Self {
        self.includes.push(IncludeSpec {
            namespace: namespace.into(),
            alias: alias.map(str::to_string),
        });
        self
    }
}
