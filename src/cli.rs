use clap::Parser;
use std::path::PathBuf;

/// Generate copyright/license header files for scaffolded projects
#[derive(Parser, Debug)]
#[command(name = "boilerplate-gen")]
#[command(version)]
#[command(
    about = "Generate copyright/license header files for scaffolded projects",
    long_about = None
)]
pub struct Args {
    /// License to embed: apache2, none, or a key defined under `licenses` in the config file
    #[arg(short, long, value_name = "KEY")]
    pub license: Option<String>,

    /// Copyright owner (e.g. "The Kubernetes Authors")
    #[arg(long)]
    pub owner: Option<String>,

    /// Copyright year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<String>,

    /// Output file path, relative to the project directory
    /// (defaults to hack/boilerplate.<ext>.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Source file extension used in the default output path
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Use the content of this file verbatim instead of the license template
    #[arg(short, long, value_name = "PATH")]
    pub boilerplate_file: Option<PathBuf>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Path to a config file (defaults to boilerplate.config.yml in the project directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the header to stdout instead of writing a file (same bytes, no added newline)
    #[arg(long)]
    pub stdout: bool,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Only print errors and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// List the known license keys and exit
    #[arg(long)]
    pub list_licenses: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
