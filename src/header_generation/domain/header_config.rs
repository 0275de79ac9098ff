use super::license_table::LicenseTable;
use super::template_source::TemplateSource;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// HeaderConfig - everything one header rendering needs
///
/// Empty strings (and an empty `output_path`) mean "not set"; defaulting fills
/// them in. A config is built fresh per invocation and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderConfig {
    /// License key selecting the body text; empty means the default license
    pub license_key: String,
    /// Caller-supplied license bodies keyed by license key
    pub custom_licenses: Option<BTreeMap<String, String>>,
    /// Copyright holder; empty omits the owner clause
    pub owner: String,
    /// Copyright year; empty means the current year
    pub year: String,
    /// Full header text that bypasses templated rendering
    pub explicit_body: Option<String>,
    /// Destination of the rendered header; empty means the default path
    pub output_path: PathBuf,
    /// Source file extension used to build the default path; empty means `go`
    pub source_extension: String,
    /// Set by defaulting
    pub template_source: Option<TemplateSource>,
}

impl HeaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, license_key: impl Into<String>) -> Self {
        self.license_key = license_key.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_custom_license(
        mut self,
        license_key: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.custom_licenses
            .get_or_insert_with(BTreeMap::new)
            .insert(license_key.into(), body.into());
        self
    }

    pub fn with_explicit_body(mut self, body: impl Into<String>) -> Self {
        self.explicit_body = Some(body.into());
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    /// The explicit body, if one was supplied and is non-empty
    pub fn explicit_body(&self) -> Option<&str> {
        self.explicit_body.as_deref().filter(|body| !body.is_empty())
    }

    /// Merged view of built-in and custom licenses used for resolution
    pub fn license_table(&self) -> LicenseTable<'_> {
        LicenseTable::new(self.custom_licenses.as_ref())
    }
}
