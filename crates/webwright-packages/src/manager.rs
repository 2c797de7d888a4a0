//! JavaScript package manager detection
//!
//! Detects which package manager invoked the tool from the
//! `npm_config_user_agent` environment variable (set by npm, yarn, pnpm and
//! bun when they run a script), falling back to npm. The prefix parser is
//! separated from the env read so it can be tested without process-global
//! state.

use tracing::debug;

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// npm (default)
    Npm,
    /// Yarn
    Yarn,
    /// pnpm
    Pnpm,
    /// Bun
    Bun,
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::Npm
    }
}

impl PackageManager {
    /// All supported managers, in detection-priority order
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Detect the invoking package manager from the environment
    pub fn detect() -> Self {
        let detected = std::env::var("npm_config_user_agent")
            .ok()
            .and_then(|ua| Self::from_user_agent(&ua))
            .unwrap_or_default();

        debug!("Detected package manager: {}", detected);
        detected
    }

    /// Parse a `npm_config_user_agent` value, e.g. `pnpm/9.1.0 npm/? node/v22`
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| user_agent.starts_with(m.command()))
    }

    /// The executable name
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// The one-shot package runner used to invoke the project generator
    pub fn dlx_runner(&self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["npx"],
            Self::Yarn => &["yarn", "dlx"],
            Self::Pnpm => &["pnpm", "dlx"],
            Self::Bun => &["bunx"],
        }
    }

    /// The `create-next-app` flag selecting this manager for the generated
    /// project
    pub fn generator_flag(&self) -> &'static str {
        match self {
            Self::Npm => "--use-npm",
            Self::Yarn => "--use-yarn",
            Self::Pnpm => "--use-pnpm",
            Self::Bun => "--use-bun",
        }
    }

    /// Check that the manager's executable is on PATH
    pub fn is_available(&self) -> bool {
        which::which(self.command()).is_ok()
    }

    /// The dev-server invocation shown in the post-provision summary
    pub fn run_dev_hint(&self) -> String {
        format!("{} run dev", self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_prefixes() {
        assert_eq!(
            PackageManager::from_user_agent("npm/10.8.1 node/v22.3.0 linux x64"),
            Some(PackageManager::Npm)
        );
        assert_eq!(
            PackageManager::from_user_agent("yarn/1.22.22 npm/? node/v22.3.0"),
            Some(PackageManager::Yarn)
        );
        assert_eq!(
            PackageManager::from_user_agent("pnpm/9.1.0 npm/? node/v22.3.0"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(
            PackageManager::from_user_agent("bun/1.1.13 npm/? node/v22.3.0"),
            Some(PackageManager::Bun)
        );
    }

    #[test]
    fn test_unrecognized_user_agent() {
        assert_eq!(PackageManager::from_user_agent("deno/1.44.0"), None);
        assert_eq!(PackageManager::from_user_agent(""), None);
    }

    #[test]
    fn test_default_is_npm() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
    }

    #[test]
    fn test_dlx_runners() {
        assert_eq!(PackageManager::Npm.dlx_runner(), &["npx"]);
        assert_eq!(PackageManager::Yarn.dlx_runner(), &["yarn", "dlx"]);
        assert_eq!(PackageManager::Pnpm.dlx_runner(), &["pnpm", "dlx"]);
        assert_eq!(PackageManager::Bun.dlx_runner(), &["bunx"]);
    }

    #[test]
    fn test_generator_flags() {
        assert_eq!(PackageManager::Pnpm.generator_flag(), "--use-pnpm");
        assert_eq!(PackageManager::Bun.generator_flag(), "--use-bun");
    }

    #[test]
    fn test_run_dev_hint() {
        assert_eq!(PackageManager::Yarn.run_dev_hint(), "yarn run dev");
    }
}
