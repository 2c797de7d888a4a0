//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;

/// Webwright - interactive web-application scaffolding
#[derive(Parser, Debug)]
#[command(name = "webwright")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target directory ("." provisions into the current directory; default
    /// is a new directory named after the project)
    pub dir: Option<Utf8PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Resolve and print the install plan without provisioning anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run install plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Overlay templates from this directory instead of the embedded set
    #[arg(long)]
    pub template: Option<Utf8PathBuf>,
}
