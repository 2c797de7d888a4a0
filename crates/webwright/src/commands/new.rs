//! The provisioning flow
//!
//! Orchestrates the whole run as a strict sequence: prompts, resolution,
//! skeleton generation, sequential package installation, template overlay.
//! Any failing step aborts the run with a non-zero exit; a user backing out
//! of a prompt exits 0 with a short notice.

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;
use webwright_core::types::ResolvedDependencies;
use webwright_packages::{
    DependencyKind, PackageInstaller, PackageManager, PackageRegistry, PackageResolver,
};

use crate::cli::Cli;
use crate::output;
use crate::prompts;

pub async fn run(args: Cli) -> Result<()> {
    output::header("Provision New Web App");

    let registry =
        PackageRegistry::from_embedded().context("Failed to load the package registry")?;
    let manager = PackageManager::detect();

    let Some(project_name) = prompts::project_name()? else {
        return abort();
    };

    let cwd = Utf8PathBuf::from_path_buf(std::env::current_dir()?)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;
    let project_dir = resolve_project_dir(&cwd, args.dir.as_deref(), &project_name);

    output::kv("Project name", &project_name);
    output::kv("Location", project_dir.as_str());
    output::kv("Package manager", manager.command());
    println!();

    let Some(chosen) = prompts::select_packages(&registry)? else {
        return abort();
    };
    let Some(chosen_extras) = prompts::select_extras(&registry, &chosen)? else {
        return abort();
    };

    debug!("Selected packages: {:?}, extras: {:?}", chosen, chosen_extras);

    let spinner = output::spinner("Resolving dependencies...");
    let resolver = PackageResolver::new(&registry);
    let plan = resolver.install_plan(&chosen, &chosen_extras)?;
    spinner.finish_and_clear();
    output::success(&format!("Resolved {} dependencies", plan.len()));

    if args.dry_run {
        return show_plan(&plan, args.json);
    }

    if !manager.is_available() {
        return Err(anyhow!(
            "Package manager '{}' is not on PATH",
            manager.command()
        ));
    }

    std::fs::create_dir_all(&project_dir).context("Failed to create project directory")?;

    let spinner = output::spinner("Initializing project skeleton...");
    webwright_scaffold::generate(manager, &project_dir).await?;
    spinner.finish_and_clear();
    output::success("Project skeleton initialized");

    let installer = PackageInstaller::new(manager, project_dir.clone());
    let spinner = output::spinner("Installing packages...");
    for package in &plan.regular {
        spinner.set_message(format!("Installing {package}"));
        installer.install(package, DependencyKind::Regular).await?;
    }
    for package in &plan.dev {
        spinner.set_message(format!("Installing {package} (dev)"));
        installer.install(package, DependencyKind::Dev).await?;
    }
    spinner.finish_and_clear();
    output::success(&format!("Installed {} packages", plan.len()));

    let spinner = output::spinner("Copying templates...");
    let written = match &args.template {
        Some(dir) => webwright_scaffold::copy_tree(dir, &project_dir)?,
        None => webwright_scaffold::apply_embedded(&project_dir)?,
    };
    spinner.finish_and_clear();
    output::success(&format!("Copied {written} template files"));

    println!();
    output::success(&format!("Project '{}' provisioned", project_name));
    println!();
    output::info("Next steps:");
    println!("   1. cd {}", project_dir);
    println!("   2. {}", manager.run_dev_hint());

    Ok(())
}

/// Graceful exit after the user backed out of a prompt
fn abort() -> Result<()> {
    println!();
    output::info("Aborted, nothing was provisioned");
    Ok(())
}

/// Determine the project directory from the optional positional argument
///
/// "." provisions into the current directory; any other path is taken as
/// given; with no argument the project gets a fresh directory named after it.
fn resolve_project_dir(cwd: &Utf8Path, dir: Option<&Utf8Path>, name: &str) -> Utf8PathBuf {
    match dir {
        Some(d) if d.as_str() == "." => cwd.to_path_buf(),
        Some(d) if d.is_absolute() => d.to_path_buf(),
        Some(d) => cwd.join(d),
        None => cwd.join(name),
    }
}

/// Print the resolved install plan without provisioning
fn show_plan(plan: &ResolvedDependencies, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    output::header("Install plan");
    for dep in &plan.regular {
        println!("  {dep}");
    }
    if !plan.dev.is_empty() {
        output::header("Dev dependencies");
        for dep in &plan.dev {
            println!("  {dep}");
        }
    }

    Ok(())
}
