use boilerplate_gen::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock BoilerplateSourceReader serving file contents from memory
#[derive(Default)]
pub struct MockBoilerplateSourceReader {
    files: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockBoilerplateSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            files: HashMap::new(),
            should_fail: true,
        }
    }
}

impl BoilerplateSourceReader for MockBoilerplateSourceReader {
    fn read_boilerplate(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock boilerplate read failure");
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock file not found: {}", path.display()))
    }
}
