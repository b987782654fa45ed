//! # Doctables - DataTables for documentation site builds
//!
//! Doctables wires [DataTables](https://datatables.net/) table enhancement
//! (pagination, search, sorting) into documentation-site builds. It owns the
//! pieces around the rendering core:
//!
//! - [`DatatablesConfig`]: typed site-wide configuration with sensible
//!   defaults, loadable from JSON or YAML
//! - [`TableDirective`]: per-page, per-selector option overrides in JSON,
//!   YAML, or raw-JS form, rendered as inline `<script>` snippets
//! - [`page_assets`]: the per-page hook computing script/stylesheet
//!   references (CDN or explicit overrides) and checking that jQuery is
//!   available
//! - [`assets::write_activation_script`]: the end-of-build hook persisting
//!   the site-wide activation script to `_static/activate_datatables.js`
//!
//! The rendering itself — options normalization and script compilation —
//! lives in [`doctables_render`] and is re-exported here.
//!
//! ## Quick Start
//!
//! ```rust
//! use doctables::{activation_script, DatatablesConfig, TableOptions};
//!
//! let config = DatatablesConfig {
//!     options: TableOptions::Raw("{paging: true}".to_string()),
//!     ..DatatablesConfig::default()
//! };
//!
//! let script = activation_script(&config).unwrap();
//! assert!(script.contains("$('table.sphinx-datatable').DataTable("));
//! ```
//!
//! ## Per-Page Directives
//!
//! ```rust
//! use doctables::{DatatablesConfig, DirectiveFormat, TableDirective};
//!
//! let directive = TableDirective::new(
//!     DirectiveFormat::Json,
//!     ".api-table",
//!     r#"{"searching": false}"#,
//! );
//!
//! let snippet = directive.render(&DatatablesConfig::default()).unwrap();
//! assert!(snippet.starts_with("<script"));
//! assert!(snippet.contains("$(`.api-table:not(.dataTable)`).DataTable("));
//! ```

pub mod assets;
pub mod config;
pub mod directives;
mod error;
pub mod hooks;

pub use assets::{activation_script, write_activation_script};
pub use config::{DatatablesConfig, DEFAULT_TABLE_CLASS, DEFAULT_VERSION};
pub use directives::{DirectiveFormat, TableDirective};
pub use error::ExtensionError;
pub use hooks::{page_assets, PageAssets, SiteBuild, ACTIVATION_ASSET, JQUERY};

// Re-export the rendering core.
pub use doctables_render::{
    compile, options_to_js, ActivationConfig, RenderError, SelectorOptions, TableOptions,
    VERSION_PLACEHOLDER,
};
