use crate::ports::outbound::OutputPresenter;
use crate::shared::error::HeaderError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the header to a file
///
/// Missing parent directories are created (a fresh scaffold has no `hack/`
/// yet). An existing file is only replaced when `overwrite` is set.
pub struct FileSystemWriter {
    output_path: PathBuf,
    overwrite: bool,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            overwrite: false,
        }
    }

    /// Allows replacing an existing output file
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Creates the parent directory chain if it does not exist yet
    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| HeaderError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!(
                        "Failed to create parent directory {}: {}",
                        parent.display(),
                        e
                    ),
                })?;
            }
        }
        Ok(())
    }

    /// Refuses symlinks and, unless overwriting, any existing file
    fn validate_target(&self) -> Result<()> {
        reject_symlink(&self.output_path, "write")?;

        if self.output_path.exists() {
            if self.output_path.is_dir() {
                return Err(HeaderError::FileWriteError {
                    path: self.output_path.clone(),
                    details: "Output path is a directory".to_string(),
                }
                .into());
            }
            if !self.overwrite {
                return Err(HeaderError::OutputExists {
                    path: self.output_path.clone(),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_target()?;
        self.ensure_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|e| HeaderError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing the header to stdout
///
/// The bytes written are exactly what the file writer would store; no
/// trailing newline is added.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        stdout
            .flush()
            .map_err(|e| anyhow::anyhow!("Failed to flush stdout: {}", e))
    }
}
