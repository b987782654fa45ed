//! # Doctables Render - DataTables activation scripts
//!
//! `doctables-render` generates the JavaScript that upgrades tables on a
//! documentation page to [DataTables](https://datatables.net/) widgets
//! (pagination, search, sorting). It is the rendering foundation for the
//! `doctables` build extension, but can be used independently by any tool
//! that needs to emit DataTables activation scripts.
//!
//! ## Core Concepts
//!
//! - [`TableOptions`]: structured option mapping, or raw JS text passed
//!   through verbatim
//! - [`SelectorOptions`]: per-selector overrides, in declaration order
//! - [`ActivationConfig`]: one render's complete input
//! - [`options_to_js`]: normalize options into indented, comma-terminated
//!   object-literal text
//! - [`compile`]: render the full activation script
//!
//! ## Quick Start
//!
//! ```rust
//! use doctables_render::{compile, ActivationConfig, TableOptions};
//! use serde_json::{json, Map};
//!
//! let mut options = Map::new();
//! options.insert("paging".to_string(), json!(true));
//! options.insert("searching".to_string(), json!(false));
//!
//! let config = ActivationConfig {
//!     version: "2.3.5".to_string(),
//!     table_class: "sphinx-datatable".to_string(),
//!     options: TableOptions::Structured(options),
//!     ..ActivationConfig::default()
//! };
//!
//! let script = compile(&config).unwrap();
//! assert!(script.starts_with("// Copyright"));
//! assert!(script.contains("$(document).ready( function () {"));
//! assert!(script.contains("$('table.sphinx-datatable').DataTable("));
//! ```
//!
//! ## Per-Selector Overrides
//!
//! Overrides layer on top of the defaults: the script first merges the
//! default options into `$.fn.dataTable.defaults`, activates the default
//! class bare, then activates each override selector with its own options.
//! Override calls carry a `:not(.dataTable)` guard so a broad selector
//! cannot re-initialize a table an earlier call already upgraded.
//!
//! ```rust
//! use doctables_render::{compile, ActivationConfig, SelectorOptions, TableOptions};
//!
//! let mut selector_options = SelectorOptions::new();
//! selector_options.insert(".wide-table", TableOptions::Raw("{scrollX: true}".to_string()));
//!
//! let config = ActivationConfig {
//!     version: "2.3.5".to_string(),
//!     table_class: "sphinx-datatable".to_string(),
//!     selector_options,
//!     ..ActivationConfig::default()
//! };
//!
//! let script = compile(&config).unwrap();
//! assert!(script.contains("$.extend( $.fn.dataTable.defaults,"));
//! assert!(script.contains("$(`.wide-table:not(.dataTable)`).DataTable("));
//! ```
//!
//! ## Version Placeholder
//!
//! Option text may embed [`VERSION_PLACEHOLDER`]; it is replaced with the
//! configured DataTables version after rendering, so it works at any
//! nesting depth and inside raw script text.

mod error;
mod normalize;
mod options;
mod script;
mod templates;

pub use error::RenderError;
pub use normalize::{options_to_js, INDENT};
pub use options::{SelectorOptions, TableOptions};
pub use script::{compile, ActivationConfig, VERSION_PLACEHOLDER};
