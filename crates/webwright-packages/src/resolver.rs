//! Selection resolution
//!
//! Turns the two-stage prompt output (chosen packages, chosen extras) into
//! deduplicated install lists. Pure data transformation over the registry's
//! flat index; performs no I/O.

use tracing::debug;
use webwright_core::types::ResolvedDependencies;
use webwright_core::{Error, Result};

use crate::registry::PackageRegistry;

/// Resolver over a loaded registry
pub struct PackageResolver<'a> {
    registry: &'a PackageRegistry,
}

impl<'a> PackageResolver<'a> {
    /// Create a resolver borrowing the registry
    pub fn new(registry: &'a PackageRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the first-stage selection into install lists
    ///
    /// Top-level choices come from the closed list the prompt showed, so a
    /// name missing from the flat index is a wiring defect and fails fast
    /// with [`Error::UnknownPackage`] naming the offender.
    pub fn resolve_optional(&self, chosen: &[String]) -> Result<ResolvedDependencies> {
        let mut deps = ResolvedDependencies::new();

        for name in chosen {
            let def = self
                .registry
                .get(name)
                .ok_or_else(|| Error::unknown_package(name))?;
            deps.absorb(def);
        }

        debug!(
            "Resolved {} package(s) into {} regular / {} dev dependencies",
            chosen.len(),
            deps.regular.len(),
            deps.dev.len()
        );

        Ok(deps)
    }

    /// Resolve the second-stage extras selection into install lists
    ///
    /// Permissive by contract: pairs referencing an unknown or extra-less
    /// package are skipped, as are extra names the owning package does not
    /// declare. The prompt only offers extras for packages that have them,
    /// so these paths guard against stale selection state rather than user
    /// input.
    pub fn resolve_extras(&self, chosen_extras: &[(String, Vec<String>)]) -> ResolvedDependencies {
        let mut deps = ResolvedDependencies::new();

        for (name, extra_names) in chosen_extras {
            let Some(owner) = self.registry.get(name) else {
                continue;
            };
            if !owner.has_extras() {
                continue;
            }

            for extra_name in extra_names {
                if let Some(extra) = owner.extra(extra_name) {
                    deps.absorb(extra);
                }
            }
        }

        deps
    }

    /// Assemble the final install plan: required baseline first, then the
    /// first-stage selection, then extras, deduplicated across all three
    pub fn install_plan(
        &self,
        chosen: &[String],
        chosen_extras: &[(String, Vec<String>)],
    ) -> Result<ResolvedDependencies> {
        let required = ResolvedDependencies::from_required(self.registry.required());
        let optional = self.resolve_optional(chosen)?;
        let extras = self.resolve_extras(chosen_extras);

        Ok(ResolvedDependencies::merged([
            &required, &optional, &extras,
        ]))
    }
}
