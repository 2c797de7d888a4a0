//! Error types for webwright-core

use thiserror::Error;

/// Result type alias using webwright-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for webwright
#[derive(Error, Debug)]
pub enum Error {
    /// A selected package name has no entry in the registry
    #[error("Unknown package: {name}")]
    UnknownPackage { name: String },

    /// Two groups declare a package with the same name
    #[error("Duplicate package name across registry groups: {name}")]
    DuplicatePackage { name: String },

    /// An extra entry reuses the name of a top-level package
    #[error("Extra '{extra}' of package '{package}' shadows a top-level package")]
    ExtraShadowsPackage { package: String, extra: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown package error
    pub fn unknown_package(name: impl Into<String>) -> Self {
        Self::UnknownPackage { name: name.into() }
    }

    /// Create a duplicate package error
    pub fn duplicate_package(name: impl Into<String>) -> Self {
        Self::DuplicatePackage { name: name.into() }
    }

    /// Create an extra shadowing error
    pub fn extra_shadows_package(package: impl Into<String>, extra: impl Into<String>) -> Self {
        Self::ExtraShadowsPackage {
            package: package.into(),
            extra: extra.into(),
        }
    }
}
