//! Build-completion hook: the generated static asset.
//!
//! At the end of a build the site-wide activation script is written once to
//! `_static/activate_datatables.js` under the output directory. The asset
//! carries only the global configuration — page-local selector overrides
//! are emitted inline by their directives — so parallel page workers that
//! race on this path always produce identical bytes.

use std::fs;
use std::path::{Path, PathBuf};

use doctables_render::{compile, ActivationConfig, SelectorOptions};

use crate::config::DatatablesConfig;
use crate::error::ExtensionError;
use crate::hooks::ACTIVATION_ASSET;

/// Directory for generated static files, relative to the build output
/// directory.
pub const STATIC_DIR: &str = "_static";

/// Compiles the site-wide activation script (bare body, no `<script>`
/// wrapper).
pub fn activation_script(config: &DatatablesConfig) -> Result<String, ExtensionError> {
    let activation = ActivationConfig {
        version: config.version.clone(),
        table_class: config.table_class.clone(),
        options: config.options.clone(),
        selector_options: SelectorOptions::new(),
        defaults_only: false,
        script_tag: false,
    };
    Ok(compile(&activation)?)
}

/// Writes the activation asset under `outdir`, creating parent directories
/// as needed. Returns the path written.
pub fn write_activation_script(
    config: &DatatablesConfig,
    outdir: &Path,
) -> Result<PathBuf, ExtensionError> {
    let script = activation_script(config)?;
    let path = outdir.join(STATIC_DIR).join(ACTIVATION_ASSET);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, script)?;
    log::info!("wrote activation script to {}", path.display());
    Ok(path)
}
