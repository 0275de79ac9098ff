use crate::ports::outbound::BoilerplateSourceReader;
use crate::shared::error::HeaderError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading pre-written header bodies
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BoilerplateSourceReader for FileSystemReader {
    fn read_boilerplate(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(HeaderError::FileReadError {
                path: path.to_path_buf(),
                details: "Boilerplate file does not exist".to_string(),
            }
            .into());
        }

        read_checked(path, "boilerplate file")
    }
}
