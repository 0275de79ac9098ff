use std::path::PathBuf;

/// HeaderResponse - result of the header generation use case
///
/// Carries the rendered text plus the resolved values so the caller can
/// present and report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderResponse {
    /// Rendered header text
    pub content: String,
    /// Resolved destination path (relative paths are relative to the project)
    pub output_path: PathBuf,
    /// License key after defaulting
    pub license_key: String,
    /// Copyright year after defaulting
    pub year: String,
    /// True when a pre-supplied body replaced the template
    pub used_explicit_body: bool,
}
