//! Project generator invocation
//!
//! Runs `create-next-app` through the detected package manager's one-shot
//! runner (`npx`, `yarn dlx`, `pnpm dlx`, `bunx`). Dependency installation is
//! skipped at generation time; the installer handles the resolved plan
//! afterwards.

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;
use webwright_packages::PackageManager;

const GENERATOR_PACKAGE: &str = "create-next-app@latest";

/// Build the full generator command line: runner program first, then its
/// arguments
pub fn generator_command(manager: PackageManager, target_dir: &Utf8Path) -> Vec<String> {
    let mut cmd: Vec<String> = manager
        .dlx_runner()
        .iter()
        .map(|s| s.to_string())
        .collect();

    cmd.push(GENERATOR_PACKAGE.to_string());
    cmd.push(target_dir.to_string());
    cmd.extend(
        [
            "--ts",
            "--app",
            "--src-dir",
            "--skip-install",
            manager.generator_flag(),
            "--empty",
            "--yes",
        ]
        .map(String::from),
    );

    cmd
}

/// Generate the project skeleton into the target directory
pub async fn generate(manager: PackageManager, target_dir: &Utf8Path) -> Result<()> {
    let cmd = generator_command(manager, target_dir);
    debug!("Running generator: {}", cmd.join(" "));

    let output = Command::new(&cmd[0])
        .args(&cmd[1..])
        .output()
        .await
        .with_context(|| format!("Failed to run {}", cmd[0]))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "Project generation failed (exit code {:?})\n{}",
            output.status.code(),
            stderr.trim()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_npm_generator_command() {
        let dir = Utf8PathBuf::from("/tmp/my-app");
        let cmd = generator_command(PackageManager::Npm, &dir);
        assert_eq!(
            cmd,
            vec![
                "npx",
                "create-next-app@latest",
                "/tmp/my-app",
                "--ts",
                "--app",
                "--src-dir",
                "--skip-install",
                "--use-npm",
                "--empty",
                "--yes",
            ]
        );
    }

    #[test]
    fn test_yarn_runner_splits_into_two_words() {
        let dir = Utf8PathBuf::from("site");
        let cmd = generator_command(PackageManager::Yarn, &dir);
        assert_eq!(&cmd[..2], &["yarn", "dlx"]);
        assert!(cmd.contains(&"--use-yarn".to_string()));
        assert!(cmd.contains(&"--skip-install".to_string()));
    }

    #[test]
    fn test_bun_runner() {
        let dir = Utf8PathBuf::from("site");
        let cmd = generator_command(PackageManager::Bun, &dir);
        assert_eq!(cmd[0], "bunx");
        assert!(cmd.contains(&"--use-bun".to_string()));
    }
}
