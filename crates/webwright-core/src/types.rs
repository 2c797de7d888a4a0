//! Package registry data model
//!
//! The registry is a declarative YAML document: an ordered list of groups,
//! each holding named package definitions. Groups are a YAML sequence rather
//! than a mapping so declaration order survives deserialization into plain
//! vectors.

use serde::{Deserialize, Serialize};

/// One selectable unit: the dependencies it pulls in and its optional
/// second-stage extras.
///
/// The shape is recursive through [`NamedPackage`]; nothing in the code
/// assumes extras stop nesting after one level, even though the shipped
/// registry never goes deeper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageDef {
    /// Runtime dependency identifiers, in declaration order
    #[serde(default)]
    pub regular: Vec<String>,

    /// Development-only dependency identifiers
    #[serde(default)]
    pub dev: Vec<String>,

    /// Nested add-on choices, offered only when this package is chosen
    #[serde(default)]
    pub extras: Vec<NamedPackage>,

    /// Pre-select this entry in the prompt; irrelevant to resolution
    #[serde(default)]
    pub checked: bool,
}

impl PackageDef {
    /// Whether this package offers second-stage extras
    pub fn has_extras(&self) -> bool {
        !self.extras.is_empty()
    }

    /// Look up an extra by name
    pub fn extra(&self, name: &str) -> Option<&PackageDef> {
        self.extras.iter().find(|e| e.name == name).map(|e| &e.def)
    }
}

/// A package definition together with its selectable name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedPackage {
    pub name: String,
    #[serde(flatten)]
    pub def: PackageDef,
}

/// A labelled group of packages, shown as one prompt section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageGroup {
    pub label: String,
    #[serde(default)]
    pub packages: Vec<NamedPackage>,
}

/// The unconditional baseline dependencies, installed before any selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequiredPackages {
    #[serde(default)]
    pub regular: Vec<String>,
    #[serde(default)]
    pub dev: Vec<String>,
}

/// Complete registry document as parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDoc {
    pub version: String,
    #[serde(default)]
    pub required: RequiredPackages,
    #[serde(default)]
    pub groups: Vec<PackageGroup>,
}

/// Deduplicated install lists produced by resolution
///
/// Both lists keep first-seen order so installer output and tests stay
/// stable across runs of the same selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependencies {
    pub regular: Vec<String>,
    pub dev: Vec<String>,
}

impl ResolvedDependencies {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a result from the required baseline lists
    pub fn from_required(required: &RequiredPackages) -> Self {
        let mut deps = Self::new();
        for dep in &required.regular {
            deps.add_regular(dep);
        }
        for dep in &required.dev {
            deps.add_dev(dep);
        }
        deps
    }

    /// Add a runtime dependency unless already present
    pub fn add_regular(&mut self, dep: &str) {
        if !self.regular.iter().any(|d| d == dep) {
            self.regular.push(dep.to_string());
        }
    }

    /// Add a dev dependency unless already present
    pub fn add_dev(&mut self, dep: &str) {
        if !self.dev.iter().any(|d| d == dep) {
            self.dev.push(dep.to_string());
        }
    }

    /// Union a package definition's dependency lists into this result
    pub fn absorb(&mut self, def: &PackageDef) {
        for dep in &def.regular {
            self.add_regular(dep);
        }
        for dep in &def.dev {
            self.add_dev(dep);
        }
    }

    /// Concatenate several results into one deduplicated plan, earlier parts
    /// first
    pub fn merged<'a>(parts: impl IntoIterator<Item = &'a ResolvedDependencies>) -> Self {
        let mut plan = Self::new();
        for part in parts {
            for dep in &part.regular {
                plan.add_regular(dep);
            }
            for dep in &part.dev {
                plan.add_dev(dep);
            }
        }
        plan
    }

    /// Whether both lists are empty
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.dev.is_empty()
    }

    /// Total number of install actions
    pub fn len(&self) -> usize {
        self.regular.len() + self.dev.len()
    }
}
