//! Package selection and installation for webwright
//!
//! Holds the declarative feature-package registry (embedded at compile time),
//! the pure resolver that turns prompt selections into deduplicated install
//! lists, and the process boundaries around the JavaScript package manager.

pub mod installer;
pub mod manager;
pub mod registry;
pub mod resolver;

pub use installer::{DependencyKind, PackageInstaller};
pub use manager::PackageManager;
pub use registry::PackageRegistry;
pub use resolver::PackageResolver;
