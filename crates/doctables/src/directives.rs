//! Per-page directive front ends.
//!
//! A directive binds one CSS selector to its own DataTables options inside
//! a single page. Content arrives in one of three formats: JSON, YAML, or a
//! raw JS fragment. The rendered output is a self-contained inline
//! `<script>` snippet holding only that selector's activation call — the
//! site-wide defaults stay in the generated static asset.

use std::path::PathBuf;

use doctables_render::{compile, ActivationConfig, SelectorOptions, TableOptions};

use crate::config::DatatablesConfig;
use crate::error::ExtensionError;

/// Content format of a directive body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveFormat {
    /// Structured options as a JSON object.
    Json,
    /// Structured options as a YAML mapping (requires the `yaml` feature).
    Yaml,
    /// Raw JS text, inserted verbatim.
    Js,
}

impl DirectiveFormat {
    /// Resolves a format name as written in page markup.
    pub fn from_name(name: &str) -> Result<Self, ExtensionError> {
        match name {
            "json" => Ok(DirectiveFormat::Json),
            "yaml" | "yml" => Ok(DirectiveFormat::Yaml),
            "js" => Ok(DirectiveFormat::Js),
            other => Err(ExtensionError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// One table directive as collected from a page.
#[derive(Debug, Clone)]
pub struct TableDirective {
    /// How to interpret the body.
    pub format: DirectiveFormat,
    /// Selector whose tables receive these options.
    pub selector: String,
    /// Inline body text.
    pub content: String,
    /// Optional external file; when set, its contents replace the inline
    /// body.
    pub file: Option<PathBuf>,
}

impl TableDirective {
    /// Creates a directive with an inline body.
    pub fn new(
        format: DirectiveFormat,
        selector: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            format,
            selector: selector.into(),
            content: content.into(),
            file: None,
        }
    }

    /// Parses the directive body into a [`TableOptions`] value.
    ///
    /// JSON and YAML bodies must be top-level mappings; anything else is a
    /// [`ExtensionError::MalformedOptions`]. Raw JS is never validated.
    pub fn options(&self) -> Result<TableOptions, ExtensionError> {
        match self.format {
            DirectiveFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> =
                    serde_json::from_str(&self.source()?).map_err(|err| {
                        ExtensionError::MalformedOptions {
                            format: "json",
                            message: err.to_string(),
                        }
                    })?;
                Ok(TableOptions::Structured(map))
            }
            DirectiveFormat::Yaml => self.yaml_options(),
            DirectiveFormat::Js => Ok(TableOptions::Raw(self.source()?)),
        }
    }

    /// Renders the directive as an inline `<script>` snippet.
    ///
    /// The snippet contains only this selector's activation call: the
    /// default class and default options are left empty so page-local
    /// output never duplicates the site-wide asset.
    pub fn render(&self, config: &DatatablesConfig) -> Result<String, ExtensionError> {
        let options = self.options()?;
        log::debug!("rendering table directive for selector {:?}", self.selector);

        let mut selector_options = SelectorOptions::new();
        selector_options.insert(self.selector.clone(), options);

        let activation = ActivationConfig {
            version: config.version.clone(),
            table_class: String::new(),
            options: TableOptions::default(),
            selector_options,
            defaults_only: false,
            script_tag: true,
        };
        Ok(compile(&activation)?)
    }

    /// The directive body: the external file when one is given, otherwise
    /// the inline content.
    fn source(&self) -> Result<String, ExtensionError> {
        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Ok(self.content.clone()),
        }
    }

    #[cfg(feature = "yaml")]
    fn yaml_options(&self) -> Result<TableOptions, ExtensionError> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_yaml::from_str(&self.source()?).map_err(|err| {
                ExtensionError::MalformedOptions {
                    format: "yaml",
                    message: err.to_string(),
                }
            })?;
        Ok(TableOptions::Structured(map))
    }

    #[cfg(not(feature = "yaml"))]
    fn yaml_options(&self) -> Result<TableOptions, ExtensionError> {
        Err(ExtensionError::UnsupportedFormat("yaml".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_name() {
        assert_eq!(DirectiveFormat::from_name("json").unwrap(), DirectiveFormat::Json);
        assert_eq!(DirectiveFormat::from_name("yml").unwrap(), DirectiveFormat::Yaml);
        assert_eq!(DirectiveFormat::from_name("js").unwrap(), DirectiveFormat::Js);
        assert!(matches!(
            DirectiveFormat::from_name("toml"),
            Err(ExtensionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_json_directive_options() {
        let directive = TableDirective::new(
            DirectiveFormat::Json,
            ".custom-selector",
            r#"{"searching": false}"#,
        );
        match directive.options().unwrap() {
            TableOptions::Structured(map) => assert_eq!(map["searching"], json!(false)),
            TableOptions::Raw(_) => panic!("expected structured options"),
        }
    }

    #[test]
    fn test_json_directive_rejects_non_mapping() {
        let directive = TableDirective::new(DirectiveFormat::Json, ".x", "[1, 2]");
        assert!(matches!(
            directive.options().unwrap_err(),
            ExtensionError::MalformedOptions { format: "json", .. }
        ));
    }

    #[test]
    fn test_json_directive_malformed() {
        let directive = TableDirective::new(DirectiveFormat::Json, ".x", "{broken");
        assert!(matches!(
            directive.options().unwrap_err(),
            ExtensionError::MalformedOptions { format: "json", .. }
        ));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_directive_options() {
        let directive =
            TableDirective::new(DirectiveFormat::Yaml, ".x", "searching: false\npaging: true\n");
        match directive.options().unwrap() {
            TableOptions::Structured(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, ["searching", "paging"]);
            }
            TableOptions::Raw(_) => panic!("expected structured options"),
        }
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn test_yaml_directive_unsupported() {
        let directive = TableDirective::new(DirectiveFormat::Yaml, ".x", "searching: false");
        assert!(matches!(
            directive.options().unwrap_err(),
            ExtensionError::UnsupportedFormat(format) if format == "yaml"
        ));
    }

    #[test]
    fn test_js_directive_passthrough() {
        let directive =
            TableDirective::new(DirectiveFormat::Js, ".x", "{createdRow: function () {}}");
        assert_eq!(
            directive.options().unwrap(),
            TableOptions::Raw("{createdRow: function () {}}".to_string())
        );
    }

    #[test]
    fn test_external_file_replaces_inline_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{"paging": false}"#).unwrap();

        let mut directive = TableDirective::new(DirectiveFormat::Json, ".x", "ignored");
        directive.file = Some(path);
        match directive.options().unwrap() {
            TableOptions::Structured(map) => assert_eq!(map["paging"], json!(false)),
            TableOptions::Raw(_) => panic!("expected structured options"),
        }
    }

    #[test]
    fn test_render_is_self_contained_snippet() {
        let directive = TableDirective::new(
            DirectiveFormat::Json,
            ".custom-selector",
            r#"{"searching": false}"#,
        );
        let snippet = directive.render(&DatatablesConfig::default()).unwrap();
        let expected = "\
<script type=\"text/javascript\">
// Copyright (c) doctables contributors
//
// SPDX-License-Identifier: MIT

$(document).ready( function () {
    $(`.custom-selector:not(.dataTable)`).DataTable(
        {
            \"searching\": false
        },
    );
} );
</script>
";
        assert_eq!(snippet, expected);
    }

    #[test]
    fn test_render_substitutes_version_placeholder() {
        let directive = TableDirective::new(
            DirectiveFormat::Json,
            ".x",
            r#"{"language": {"url": "plug-ins/${datatables_version}/i18n/fr-FR.json"}}"#,
        );
        let snippet = directive.render(&DatatablesConfig::default()).unwrap();
        assert!(snippet.contains("plug-ins/2.3.5/i18n/fr-FR.json"));
    }
}
