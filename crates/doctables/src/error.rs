//! Error types for the build extension.
//!
//! Everything here is fatal: configuration and directive problems abort the
//! page or the build instead of degrading. The one deliberate exception
//! lives below this crate — raw script text is never validated, so broken
//! user JavaScript flows through the renderer untouched.

use doctables_render::RenderError;
use thiserror::Error;

/// Errors raised by configuration loading, directives, and build hooks.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// A required companion extension is not registered in the host
    /// environment.
    #[error("{0} is required for doctables to work; add it to the site's extensions")]
    MissingDependency(String),

    /// Directive or configuration content failed to parse under its
    /// declared format.
    #[error("malformed {format} options: {message}")]
    MalformedOptions {
        format: &'static str,
        message: String,
    },

    /// Parsing was requested for a format no parser is available for in
    /// this build.
    #[error("no parser available for {0:?} content")]
    UnsupportedFormat(String),

    /// The configured DataTables version is not a valid semantic version.
    #[error("invalid DataTables version {version:?}: {message}")]
    Version { version: String, message: String },

    /// Script rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Filesystem failure while loading configuration or writing assets.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
