//! Feature-package registry
//!
//! Loads the declarative package table from the YAML document compiled into
//! the binary and derives a flat name-to-definition index used by both the
//! prompt layer and the resolver. The index is built once at load time and
//! read-only afterwards.
//!
//! Extras are not part of the flat index: an extra name is only meaningful
//! relative to the package that declares it, so extras resolve through the
//! owning definition.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use webwright_core::types::{PackageDef, PackageGroup, RegistryDoc, RequiredPackages};
use webwright_core::{Error, Result};

/// Get the registry YAML compiled into the binary
fn embedded_yaml() -> &'static str {
    const EMBEDDED_YAML: &str = include_str!("../registry/packages.yaml");
    EMBEDDED_YAML
}

/// Loaded package registry with its derived flat index
#[derive(Debug, Clone)]
pub struct PackageRegistry {
    doc: RegistryDoc,
    index: HashMap<String, PackageDef>,
}

impl PackageRegistry {
    /// Load the registry compiled into the binary
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml(embedded_yaml())
    }

    /// Load a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: RegistryDoc = serde_yaml_ng::from_str(yaml)?;
        Self::from_doc(doc)
    }

    /// Load a registry from a file path (for testing/development)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Build the flat index and validate the document
    fn from_doc(doc: RegistryDoc) -> Result<Self> {
        let mut index = HashMap::new();

        for group in &doc.groups {
            for pkg in &group.packages {
                if index.insert(pkg.name.clone(), pkg.def.clone()).is_some() {
                    return Err(Error::duplicate_package(&pkg.name));
                }
            }
        }

        for group in &doc.groups {
            for pkg in &group.packages {
                validate_extras(&pkg.name, &pkg.def, &index)?;
            }
        }

        debug!(
            "Loaded package registry: {} groups, {} packages",
            doc.groups.len(),
            index.len()
        );

        Ok(Self { doc, index })
    }

    /// Ordered groups, for the first-stage selection prompt
    pub fn groups(&self) -> &[PackageGroup] {
        &self.doc.groups
    }

    /// The unconditional baseline dependency lists
    pub fn required(&self) -> &RequiredPackages {
        &self.doc.required
    }

    /// Flat lookup of a top-level package by name
    pub fn get(&self, name: &str) -> Option<&PackageDef> {
        self.index.get(name)
    }

    /// Check whether a top-level package exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All top-level package names, in declaration order
    pub fn package_names(&self) -> Vec<&str> {
        self.doc
            .groups
            .iter()
            .flat_map(|g| g.packages.iter().map(|p| p.name.as_str()))
            .collect()
    }

    /// Extra choices for a package: `(name, pre-checked)` pairs in
    /// declaration order
    ///
    /// Returns an empty list when the package is unknown or declares no
    /// extras; this drives the second-stage prompt only.
    pub fn extras_for(&self, name: &str) -> Vec<(&str, bool)> {
        self.get(name)
            .map(|def| {
                def.extras
                    .iter()
                    .map(|e| (e.name.as_str(), e.def.checked))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Reject extras (at any nesting depth) that reuse a top-level package name
fn validate_extras(
    owner: &str,
    def: &PackageDef,
    index: &HashMap<String, PackageDef>,
) -> Result<()> {
    for extra in &def.extras {
        if index.contains_key(&extra.name) {
            return Err(Error::extra_shadows_package(owner, &extra.name));
        }
        validate_extras(owner, &extra.def, index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_registry() {
        let yaml = r#"
version: "1.0"
groups:
  - label: icons
    packages:
      - name: lucide-react
        regular: [lucide-react]
        checked: true
"#;

        let registry = PackageRegistry::from_yaml(yaml).unwrap();
        assert_eq!(registry.groups().len(), 1);
        assert!(registry.contains("lucide-react"));

        let def = registry.get("lucide-react").unwrap();
        assert_eq!(def.regular, vec!["lucide-react"]);
        assert!(def.checked);
        assert!(def.dev.is_empty());
    }

    #[test]
    fn test_duplicate_name_across_groups_rejected() {
        let yaml = r#"
version: "1.0"
groups:
  - label: ui
    packages:
      - name: motion
        regular: [motion]
  - label: animation
    packages:
      - name: motion
        regular: [framer-motion]
"#;

        let err = PackageRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            webwright_core::Error::DuplicatePackage { ref name } if name == "motion"
        ));
    }

    #[test]
    fn test_extra_shadowing_top_level_rejected() {
        let yaml = r#"
version: "1.0"
groups:
  - label: animation
    packages:
      - name: motion
        regular: [motion]
      - name: react-three/fiber
        regular: [three]
        extras:
          - name: motion
            regular: [motion]
"#;

        let err = PackageRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            webwright_core::Error::ExtraShadowsPackage { ref extra, .. } if extra == "motion"
        ));
    }

    #[test]
    fn test_flat_index_excludes_extras() {
        let yaml = r#"
version: "1.0"
groups:
  - label: design engineering
    packages:
      - name: react-three/fiber
        regular: [three, "@react-three/fiber"]
        dev: ["@types/three"]
        extras:
          - name: "@react-three/drei"
            regular: ["@react-three/drei"]
"#;

        let registry = PackageRegistry::from_yaml(yaml).unwrap();
        assert!(registry.contains("react-three/fiber"));
        assert!(!registry.contains("@react-three/drei"));
        assert_eq!(registry.package_names(), vec!["react-three/fiber"]);
    }

    #[test]
    fn test_extras_for() {
        let yaml = r#"
version: "1.0"
groups:
  - label: design engineering
    packages:
      - name: motion
        regular: [motion]
      - name: react-three/fiber
        regular: [three]
        extras:
          - name: "@react-three/drei"
            regular: ["@react-three/drei"]
            checked: true
          - name: "@react-three/flex"
            regular: ["@react-three/flex"]
"#;

        let registry = PackageRegistry::from_yaml(yaml).unwrap();
        assert_eq!(
            registry.extras_for("react-three/fiber"),
            vec![("@react-three/drei", true), ("@react-three/flex", false)]
        );
        assert!(registry.extras_for("motion").is_empty());
        assert!(registry.extras_for("no-such-package").is_empty());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.yaml");
        std::fs::write(
            &path,
            "version: \"1.0\"\ngroups:\n  - label: ui\n    packages:\n      - name: vaul\n        regular: [vaul]\n",
        )
        .unwrap();

        let registry = PackageRegistry::from_file(&path).unwrap();
        assert!(registry.contains("vaul"));
        assert!(PackageRegistry::from_file(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_embedded_registry_loads_and_validates() {
        let registry = PackageRegistry::from_embedded().unwrap();
        assert!(registry.contains("motion"));
        assert!(registry.contains("lucide-react"));
        assert!(!registry.required().regular.is_empty());
        assert!(!registry.required().dev.is_empty());
    }
}
