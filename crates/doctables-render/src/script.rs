//! Activation-script compilation.
//!
//! [`compile`] turns an [`ActivationConfig`] into the complete text of the
//! script that upgrades page tables to DataTables. The output is a pure
//! function of the input: no I/O, no shared state, safe to call from
//! parallel page workers.
//!
//! Call layout inside the document-ready guard, in order:
//!
//! 1. an optional defaults-merge call (`$.extend( $.fn.dataTable.defaults, … )`),
//!    always first so later activations see the merged defaults;
//! 2. an activation against the default table class — with the options
//!    inline when there are no per-selector overrides, as a bare call when
//!    the merge call already applied them;
//! 3. one activation per per-selector override, in declaration order, each
//!    guarded with `:not(.dataTable)` so a broad selector cannot re-activate
//!    a table an earlier call already upgraded.

use minijinja::{Environment, UndefinedBehavior, Value};
use serde::Serialize;

use crate::error::RenderError;
use crate::normalize::options_to_js;
use crate::options::{SelectorOptions, TableOptions};
use crate::templates::ACTIVATE_TEMPLATE;

/// Placeholder token replaced by the configured DataTables version.
///
/// Substitution runs over the fully rendered script, after normalization,
/// so the token works anywhere in the options — default block or
/// per-selector block, nested arbitrarily deep.
pub const VERSION_PLACEHOLDER: &str = "${datatables_version}";

/// CSS class DataTables adds to tables it has upgraded; used to keep
/// per-selector calls away from already-activated tables.
const ACTIVATED_CLASS: &str = "dataTable";

/// Indent level of an options block in call argument position.
const CALL_INDENT: usize = 2;

/// Everything one render of the activation script depends on.
///
/// Constructed fresh at each call site from the authoritative configuration
/// source; never cached. An empty `table_class` means "no default activation
/// block".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivationConfig {
    /// DataTables version, substituted for [`VERSION_PLACEHOLDER`] tokens.
    pub version: String,
    /// CSS class whose tables receive the default options.
    pub table_class: String,
    /// Default options, applied to `table_class` or merged into the
    /// library-wide defaults.
    pub options: TableOptions,
    /// Per-selector overrides, rendered in declaration order.
    pub selector_options: SelectorOptions,
    /// Emit only the defaults-merge call, no activation against the default
    /// class. Used when the activation step is deferred to page markup.
    pub defaults_only: bool,
    /// Wrap the output in an inline `<script>` element instead of emitting a
    /// bare script body.
    pub script_tag: bool,
}

#[derive(Serialize)]
struct TemplateData<'a> {
    script_tag: bool,
    calls: &'a [String],
}

/// Compiles the activation script for `config`.
///
/// # Example
///
/// ```rust
/// use doctables_render::{compile, ActivationConfig, TableOptions};
/// use serde_json::{json, Map};
///
/// let mut options = Map::new();
/// options.insert("paging".to_string(), json!(true));
///
/// let config = ActivationConfig {
///     version: "2.3.5".to_string(),
///     table_class: "sphinx-datatable".to_string(),
///     options: TableOptions::Structured(options),
///     ..ActivationConfig::default()
/// };
///
/// let script = compile(&config).unwrap();
/// assert!(script.contains("$('table.sphinx-datatable').DataTable("));
/// assert!(script.contains("\"paging\": true"));
/// ```
pub fn compile(config: &ActivationConfig) -> Result<String, RenderError> {
    let defaults = options_to_js(&config.options, CALL_INDENT);
    let has_class = !config.table_class.is_empty();
    let has_overrides = !config.selector_options.is_empty();

    // The merge call extends $.fn.dataTable.defaults. With a default class
    // and overrides it is mandatory (the bare activation relies on it);
    // without a default class it is only worth emitting when there are
    // defaults to merge.
    let emit_merge = if config.defaults_only {
        true
    } else if has_class {
        has_overrides
    } else {
        !config.options.is_empty()
    };
    let emit_bare = has_class && has_overrides && !config.defaults_only;
    let emit_inline = has_class && !has_overrides && !config.defaults_only;

    let mut calls = Vec::new();
    if emit_merge {
        calls.push(format!(
            "    $.extend( $.fn.dataTable.defaults,\n{defaults}\n    );"
        ));
    }
    if emit_bare {
        calls.push(format!(
            "    $(`table.{}`).DataTable();",
            config.table_class
        ));
    }
    if emit_inline {
        calls.push(format!(
            "    $('table.{}').DataTable(\n{defaults}\n    );",
            config.table_class
        ));
    }
    for (selector, options) in config.selector_options.iter() {
        let block = options_to_js(options, CALL_INDENT);
        calls.push(format!(
            "    $(`{selector}:not(.{ACTIVATED_CLASS})`).DataTable(\n{block}\n    );"
        ));
    }

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let data = TemplateData {
        script_tag: config.script_tag,
        calls: &calls,
    };
    let rendered = env.render_str(ACTIVATE_TEMPLATE, Value::from_serialize(&data))?;
    let rendered = rendered.replace(VERSION_PLACEHOLDER, &config.version);
    Ok(format!("{}\n", rendered.trim_end()))
}
