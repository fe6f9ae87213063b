//! Error types for task_galaxy
//!
//! Catalog lookups are total and never produce these errors. They only
//! surface from parsing user input, loading configuration and writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for galaxy operations
pub type Result<T> = std::result::Result<T, GalaxyError>;

/// Errors that can occur around the galaxy core
#[derive(Error, Debug)]
pub enum GalaxyError {
    /// IO error while reading config or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file not found
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Sector key outside the closed set
    #[error("Unknown sector: {name} (expected one of: all, home, work, school, health)")]
    UnknownSector { name: String },

    /// Orbit key outside the closed set
    #[error("Unknown orbit: {name} (expected one of: content, actions, outputs)")]
    UnknownOrbit { name: String },

    /// Output format name not recognised
    #[error("Unknown output format: {name}")]
    UnknownFormat { name: String },

    /// SVG generation error
    #[error("SVG generation error: {message}")]
    Svg { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<GalaxyError>,
    },
}

impl GalaxyError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        GalaxyError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        GalaxyError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an SVG error
    pub fn svg_error(message: impl Into<String>) -> Self {
        GalaxyError::Svg {
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalaxyError::ConfigNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn test_error_with_context() {
        let err = GalaxyError::invalid_config("width must be positive");
        let wrapped = err.with_context("loading canvas");
        let text = wrapped.to_string();
        assert!(text.contains("loading canvas"));
        assert!(text.contains("width must be positive"));
    }

    #[test]
    fn test_unknown_sector_lists_choices() {
        let err = GalaxyError::UnknownSector {
            name: "garden".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("garden"));
        assert!(text.contains("health"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GalaxyError = io_err.into();
        assert!(matches!(err, GalaxyError::Io(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(GalaxyError::svg_error("unbalanced group"));
        let err = result.context("rendering galaxy").unwrap_err();
        assert!(err.to_string().starts_with("rendering galaxy"));
    }
}
