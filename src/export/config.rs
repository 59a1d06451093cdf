//! Configuration for CSDL output

use serde::{Deserialize, Serialize};

/// CSDL version written to `edmx:Edmx/@Version` when none is configured
pub const DEFAULT_CSDL_VERSION: &str = "4.01";

/// Configuration for document construction and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Indent nested elements, one element per line
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty printing
    pub indent_size: usize,

    /// Value of the `Version` attribute on the envelope
    pub version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent_size: 2,
            version: DEFAULT_CSDL_VERSION.to_string(),
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Debug, Default)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    /// Enable or disable pretty printing
    pub fn pretty_print(mut self, pretty: bool) -> Self {
        self.config.pretty_print = pretty;
        self
    }

    /// Set the indentation width (at least 1)
    pub fn indent_size(mut self, size: usize) -> Self {
        self.config.indent_size = size.max(1);
        self
    }

    /// Set the CSDL version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExportConfig {
        self.config
    }
}
