//! Error type for script compilation.
//!
//! Normalization never fails; the only failure surface is the template
//! engine, and [`RenderError`] keeps that engine out of the public API.

use std::fmt;

/// Error type for script compilation.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or rendering failure.
    Template(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template(msg) => write!(f, "template error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::Template("bad tag".to_string());
        assert_eq!(err.to_string(), "template error: bad tag");
    }
}
