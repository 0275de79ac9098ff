use crate::shared::Result;

/// OutputPresenter port for presenting the rendered header
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered header content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination already exists and may not be overwritten
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
