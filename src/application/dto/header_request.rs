use crate::shared::security::validate_source_extension;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// HeaderRequest - request DTO for the header generation use case
///
/// Empty strings mean "not set", matching how the core treats them.
#[derive(Debug, Clone, Default)]
pub struct HeaderRequest {
    /// License key; empty selects the default license
    pub license_key: String,
    /// Copyright owner; empty omits the owner clause
    pub owner: String,
    /// Copyright year; empty uses the current year
    pub year: String,
    /// Extra license bodies keyed by license key
    pub custom_licenses: BTreeMap<String, String>,
    /// Inline header body used verbatim
    pub explicit_body: Option<String>,
    /// File whose content is used verbatim as the header body
    pub boilerplate_file: Option<PathBuf>,
    /// Destination path; `None` uses `hack/boilerplate.<ext>.txt`
    pub output_path: Option<PathBuf>,
    /// Source extension for the default destination path
    pub source_extension: String,
}

impl HeaderRequest {
    pub fn builder() -> HeaderRequestBuilder {
        HeaderRequestBuilder::default()
    }
}

/// Builder for [`HeaderRequest`]
#[derive(Debug, Default)]
pub struct HeaderRequestBuilder {
    request: HeaderRequest,
}

impl HeaderRequestBuilder {
    pub fn license(mut self, license_key: impl Into<String>) -> Self {
        self.request.license_key = license_key.into();
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.request.owner = owner.into();
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.request.year = year.into();
        self
    }

    pub fn custom_license(mut self, key: impl Into<String>, body: impl Into<String>) -> Self {
        self.request.custom_licenses.insert(key.into(), body.into());
        self
    }

    pub fn custom_licenses(mut self, licenses: BTreeMap<String, String>) -> Self {
        self.request.custom_licenses.extend(licenses);
        self
    }

    pub fn explicit_body(mut self, body: impl Into<String>) -> Self {
        self.request.explicit_body = Some(body.into());
        self
    }

    pub fn boilerplate_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.boilerplate_file = Some(path.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.output_path = Some(path.into());
        self
    }

    pub fn source_extension(mut self, extension: impl Into<String>) -> Self {
        self.request.source_extension = extension.into();
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns an error if a custom license is registered under an empty key,
    /// or if the source extension contains a path separator.
    pub fn build(self) -> Result<HeaderRequest> {
        if self.request.custom_licenses.keys().any(|key| key.trim().is_empty()) {
            anyhow::bail!("Custom license keys must not be empty");
        }
        validate_source_extension(&self.request.source_extension)?;
        Ok(self.request)
    }
}
