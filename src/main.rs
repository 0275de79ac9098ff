mod cli;

use boilerplate_gen::adapters::outbound::console::StderrProgressReporter;
use boilerplate_gen::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use boilerplate_gen::application::dto::HeaderRequest;
use boilerplate_gen::application::use_cases::GenerateHeaderUseCase;
use boilerplate_gen::config::{self, ConfigFile};
use boilerplate_gen::header_generation::domain::{LicenseRegistry, LicenseTable};
use boilerplate_gen::ports::outbound::{OutputPresenter, ProgressReporter};
use boilerplate_gen::shared::error::{ExitCode, HeaderError};
use boilerplate_gen::shared::Result;
use cli::Args;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&project_path)?,
    };

    if args.list_licenses {
        let custom = config_file.as_ref().and_then(|c| c.licenses.as_ref());
        print_license_keys(&LicenseTable::new(custom));
        return Ok(());
    }

    let request = build_request(&args, config_file.as_ref(), &project_path)?;

    let use_case = GenerateHeaderUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new().with_quiet(args.quiet),
    );
    let response = use_case.execute(request)?;

    if args.stdout {
        return StdoutPresenter::new().present(&response.content);
    }

    let output_path = resolve_against(&project_path, &response.output_path);
    FileSystemWriter::new(output_path.clone())
        .with_overwrite(args.force)
        .present(&response.content)?;

    StderrProgressReporter::new()
        .with_quiet(args.quiet)
        .report_completion(&format!("✅ Output complete: {}", output_path.display()));

    Ok(())
}

/// Merges CLI flags over config file values. Flags win.
fn build_request(
    args: &Args,
    config_file: Option<&ConfigFile>,
    project_path: &Path,
) -> Result<HeaderRequest> {
    let default_config = ConfigFile::default();
    let config_file = config_file.unwrap_or(&default_config);

    let mut builder = HeaderRequest::builder();

    if let Some(license) = args.license.as_ref().or(config_file.license.as_ref()) {
        builder = builder.license(license.as_str());
    }
    if let Some(owner) = args.owner.as_ref().or(config_file.owner.as_ref()) {
        builder = builder.owner(owner.as_str());
    }
    if let Some(year) = args.year.clone().or_else(|| config_file.year_string()) {
        builder = builder.year(year);
    }
    if let Some(ext) = args.ext.as_ref().or(config_file.extension.as_ref()) {
        builder = builder.source_extension(ext.as_str());
    }
    if let Some(output) = args.output.as_ref().or(config_file.output.as_ref()) {
        builder = builder.output_path(output.clone());
    }

    // Paths on the command line are taken as given; paths in the config file
    // are relative to the project directory.
    if let Some(path) = &args.boilerplate_file {
        builder = builder.boilerplate_file(path.clone());
    } else if let Some(path) = &config_file.boilerplate_file {
        builder = builder.boilerplate_file(resolve_against(project_path, path));
    }

    if let Some(licenses) = &config_file.licenses {
        builder = builder.custom_licenses(licenses.clone());
    }

    builder.build()
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn print_license_keys(table: &LicenseTable<'_>) {
    for key in table.keys() {
        if LicenseRegistry::contains(key) {
            println!("{} (built-in)", key);
        } else {
            println!("{}", key);
        }
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(HeaderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| HeaderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(HeaderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Project path is a symbolic link, which is not allowed".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(HeaderError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
