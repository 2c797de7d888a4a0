//! Sequential package installation
//!
//! Installs one resolved dependency identifier at a time by shelling out to
//! the detected package manager inside the project directory. A non-zero
//! exit aborts the whole run: no retry, no partial-success continuation.

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use tokio::process::Command;
use tracing::debug;

use crate::manager::PackageManager;

/// Whether a dependency lands in `dependencies` or `devDependencies`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Regular,
    Dev,
}

/// Installer bound to a package manager and project directory
pub struct PackageInstaller {
    manager: PackageManager,
    project_dir: Utf8PathBuf,
}

impl PackageInstaller {
    /// Create an installer for the given project directory
    pub fn new(manager: PackageManager, project_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            manager,
            project_dir: project_dir.into(),
        }
    }

    /// Install a single package identifier
    pub async fn install(&self, package: &str, kind: DependencyKind) -> Result<()> {
        let mut args = vec!["install", package];
        if kind == DependencyKind::Dev {
            args.push("-D");
        }

        debug!(
            "Running {} {} in {}",
            self.manager.command(),
            args.join(" "),
            self.project_dir
        );

        let output = Command::new(self.manager.command())
            .args(&args)
            .current_dir(&self.project_dir)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.manager.command()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "Failed to install {} (exit code {:?})\n{}",
                package,
                output.status.code(),
                stderr.trim()
            ));
        }

        Ok(())
    }
}
