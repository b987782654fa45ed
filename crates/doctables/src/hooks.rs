//! Page-rendering hook and the host-environment model.
//!
//! The host site builder invokes [`page_assets`] once per output page to
//! learn which scripts and stylesheets the page must reference. URLs come
//! from the DataTables CDN unless the configuration supplies explicit
//! overrides, in which case the CDN is not referenced at all.

use std::collections::BTreeSet;
use std::path::PathBuf;

use semver::Version;

use crate::config::DatatablesConfig;
use crate::error::ExtensionError;

/// File name of the generated activation asset, referenced from every page
/// and written by the build-completion hook.
pub const ACTIVATION_ASSET: &str = "activate_datatables.js";

/// Companion extension DataTables cannot run without.
pub const JQUERY: &str = "jquery";

/// Minimal model of the host site build: where output goes and which
/// companion extensions are registered.
#[derive(Debug, Clone, Default)]
pub struct SiteBuild {
    /// Build output directory.
    pub outdir: PathBuf,
    /// Names of registered companion extensions.
    pub extensions: BTreeSet<String>,
}

impl SiteBuild {
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        Self {
            outdir: outdir.into(),
            extensions: BTreeSet::new(),
        }
    }

    /// Registers a companion extension.
    pub fn with_extension(mut self, name: &str) -> Self {
        self.extensions.insert(name.to_string());
        self
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

/// Script and stylesheet references one page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssets {
    /// Script URLs, in load order; ends with [`ACTIVATION_ASSET`].
    pub scripts: Vec<String>,
    /// Stylesheet URLs.
    pub stylesheets: Vec<String>,
}

/// Computes the assets a page must declare.
///
/// Fails with [`ExtensionError::MissingDependency`] when jQuery is not
/// registered in the host environment — DataTables would break at page
/// load otherwise, so the build stops here instead.
pub fn page_assets(
    config: &DatatablesConfig,
    site: &SiteBuild,
) -> Result<PageAssets, ExtensionError> {
    if !site.has_extension(JQUERY) {
        return Err(ExtensionError::MissingDependency(JQUERY.to_string()));
    }

    let (mut js, mut css) = cdn_urls(&config.version)?;
    if !config.js.is_empty() {
        js = config.js.clone();
    }
    if !config.css.is_empty() {
        css = config.css.clone();
    }

    Ok(PageAssets {
        scripts: vec![js, ACTIVATION_ASSET.to_string()],
        stylesheets: vec![css],
    })
}

/// CDN URLs for the configured version.
///
/// DataTables 2.0.0 dropped the bundled-jQuery build; only the combined
/// minified asset under the `v/dt/` scheme exists from there on.
fn cdn_urls(version: &str) -> Result<(String, String), ExtensionError> {
    let parsed = Version::parse(version).map_err(|err| ExtensionError::Version {
        version: version.to_string(),
        message: err.to_string(),
    })?;

    if parsed < Version::new(2, 0, 0) {
        Ok((
            format!("https://cdn.datatables.net/{version}/js/jquery.dataTables.min.js"),
            format!("https://cdn.datatables.net/{version}/css/jquery.dataTables.min.css"),
        ))
    } else {
        Ok((
            format!("https://cdn.datatables.net/v/dt/dt-{version}/datatables.min.js"),
            format!("https://cdn.datatables.net/v/dt/dt-{version}/datatables.min.css"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with_jquery() -> SiteBuild {
        SiteBuild::new("build").with_extension(JQUERY)
    }

    #[test]
    fn test_missing_jquery_is_fatal() {
        let err = page_assets(&DatatablesConfig::default(), &SiteBuild::new("build"))
            .unwrap_err();
        assert!(matches!(err, ExtensionError::MissingDependency(name) if name == "jquery"));
    }

    #[test]
    fn test_modern_versions_use_combined_cdn_asset() {
        let assets = page_assets(&DatatablesConfig::default(), &site_with_jquery()).unwrap();
        assert_eq!(
            assets.scripts,
            [
                "https://cdn.datatables.net/v/dt/dt-2.3.5/datatables.min.js",
                "activate_datatables.js"
            ]
        );
        assert_eq!(
            assets.stylesheets,
            ["https://cdn.datatables.net/v/dt/dt-2.3.5/datatables.min.css"]
        );
    }

    #[test]
    fn test_pre_2_versions_use_jquery_cdn_asset() {
        let config = DatatablesConfig {
            version: "1.13.4".to_string(),
            ..DatatablesConfig::default()
        };
        let assets = page_assets(&config, &site_with_jquery()).unwrap();
        assert_eq!(
            assets.scripts[0],
            "https://cdn.datatables.net/1.13.4/js/jquery.dataTables.min.js"
        );
        assert_eq!(
            assets.stylesheets[0],
            "https://cdn.datatables.net/1.13.4/css/jquery.dataTables.min.css"
        );
    }

    #[test]
    fn test_explicit_urls_suppress_cdn() {
        let config = DatatablesConfig {
            js: "local/datatables.js".to_string(),
            css: "local/datatables.css".to_string(),
            ..DatatablesConfig::default()
        };
        let assets = page_assets(&config, &site_with_jquery()).unwrap();
        assert_eq!(assets.scripts, ["local/datatables.js", "activate_datatables.js"]);
        assert_eq!(assets.stylesheets, ["local/datatables.css"]);
        for url in assets.scripts.iter().chain(&assets.stylesheets) {
            assert!(!url.contains("cdn.datatables.net"));
        }
    }

    #[test]
    fn test_invalid_version_is_fatal() {
        let config = DatatablesConfig {
            version: "latest".to_string(),
            ..DatatablesConfig::default()
        };
        let err = page_assets(&config, &site_with_jquery()).unwrap_err();
        assert!(matches!(err, ExtensionError::Version { version, .. } if version == "latest"));
    }
}
