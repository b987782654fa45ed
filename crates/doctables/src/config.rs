//! Typed extension configuration.
//!
//! [`DatatablesConfig`] is constructed fresh from the configuration source
//! at every call site — it is never cached on shared state, so incremental
//! rebuilds always see current values.

use std::path::Path;

use doctables_render::TableOptions;
use serde::Deserialize;

use crate::error::ExtensionError;

/// DataTables release loaded from the CDN when nothing else is configured.
pub const DEFAULT_VERSION: &str = "2.3.5";

/// CSS class that marks tables for default activation.
pub const DEFAULT_TABLE_CLASS: &str = "sphinx-datatable";

/// Site-wide configuration for the extension.
///
/// Every field has a default, so an empty config file (or none at all) is
/// valid. `options` accepts either a nested mapping or a raw JS string,
/// mirroring what [`TableOptions`] can hold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatatablesConfig {
    /// DataTables version; drives CDN URLs and placeholder substitution.
    pub version: String,
    /// Default table class; empty disables the default activation block.
    pub table_class: String,
    /// Default options applied to the default class.
    pub options: TableOptions,
    /// Explicit script URL; non-empty overrides the computed CDN URL.
    pub js: String,
    /// Explicit stylesheet URL; non-empty overrides the computed CDN URL.
    pub css: String,
}

impl Default for DatatablesConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            options: TableOptions::default(),
            js: String::new(),
            css: String::new(),
        }
    }
}

impl DatatablesConfig {
    /// Parses configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ExtensionError> {
        serde_json::from_str(text).map_err(|err| ExtensionError::MalformedOptions {
            format: "json",
            message: err.to_string(),
        })
    }

    /// Parses configuration from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, ExtensionError> {
        serde_yaml::from_str(text).map_err(|err| ExtensionError::MalformedOptions {
            format: "yaml",
            message: err.to_string(),
        })
    }

    /// Loads configuration from a file, dispatching on its extension.
    ///
    /// `.json` always works; `.yaml`/`.yml` require the `yaml` feature.
    /// Anything else is an [`ExtensionError::UnsupportedFormat`].
    pub fn load(path: &Path) -> Result<Self, ExtensionError> {
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match ext {
            "json" => Self::from_json_str(&text),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&text),
            other => Err(ExtensionError::UnsupportedFormat(other.to_string())),
        }
    }
}
