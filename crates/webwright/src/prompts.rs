//! Interactive selection prompts
//!
//! Two-stage flow: one multi-select per registry group, then one multi-select
//! per chosen package that declares extras. Every prompt helper returns
//! `Ok(None)` when the user backs out (Esc or Ctrl-C), which callers treat
//! as a graceful abort rather than an error.

use std::io::ErrorKind;

use anyhow::Result;
use dialoguer::{Input, MultiSelect};
use webwright_core::types::PackageGroup;
use webwright_packages::PackageRegistry;

const DEFAULT_PROJECT_NAME: &str = "my-web-app";

/// Map an interrupted prompt to `None` instead of an error
fn or_abort<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(dialoguer::Error::IO(err)) => Err(err.into()),
    }
}

/// Prompt for the project name
pub fn project_name() -> Result<Option<String>> {
    or_abort(
        Input::<String>::new()
            .with_prompt("Project name")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .interact_text(),
    )
}

/// Names and pre-checked flags for one group's multi-select
fn group_choices(group: &PackageGroup) -> (Vec<&str>, Vec<bool>) {
    let names = group.packages.iter().map(|p| p.name.as_str()).collect();
    let defaults = group.packages.iter().map(|p| p.def.checked).collect();
    (names, defaults)
}

/// First-stage selection: one multi-select per registry group
pub fn select_packages(registry: &PackageRegistry) -> Result<Option<Vec<String>>> {
    let mut chosen = Vec::new();

    for group in registry.groups() {
        let (names, defaults) = group_choices(group);

        let picks = or_abort(
            MultiSelect::new()
                .with_prompt(format!("{} packages", group.label))
                .items(&names)
                .defaults(&defaults)
                .interact_opt(),
        )?
        .flatten();
        let Some(picks) = picks else {
            return Ok(None);
        };

        chosen.extend(picks.into_iter().map(|i| names[i].to_string()));
    }

    Ok(Some(chosen))
}

/// Second-stage selection: extras for each chosen package that declares them
pub fn select_extras(
    registry: &PackageRegistry,
    chosen: &[String],
) -> Result<Option<Vec<(String, Vec<String>)>>> {
    let mut selections = Vec::new();

    for name in chosen {
        let extras = registry.extras_for(name);
        if extras.is_empty() {
            continue;
        }

        let items: Vec<&str> = extras.iter().map(|(n, _)| *n).collect();
        let defaults: Vec<bool> = extras.iter().map(|(_, checked)| *checked).collect();

        let picks = or_abort(
            MultiSelect::new()
                .with_prompt(format!("Extra packages for {name}"))
                .items(&items)
                .defaults(&defaults)
                .interact_opt(),
        )?
        .flatten();
        let Some(picks) = picks else {
            return Ok(None);
        };

        if !picks.is_empty() {
            selections.push((
                name.clone(),
                picks.into_iter().map(|i| items[i].to_string()).collect(),
            ));
        }
    }

    Ok(Some(selections))
}
