use crate::shared::Result;
use std::path::Path;

/// BoilerplateSourceReader port for loading a pre-written header body
///
/// The content is used verbatim in place of the rendered template.
pub trait BoilerplateSourceReader {
    /// Reads the full header body from `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link
    /// - The file is too large or not valid UTF-8
    fn read_boilerplate(&self, path: &Path) -> Result<String>;
}
