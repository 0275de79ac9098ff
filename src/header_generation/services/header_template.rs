use crate::header_generation::domain::license_registry::DEFAULT_LICENSE_KEY;
use crate::header_generation::domain::{HeaderConfig, LicenseRegistry, TemplateSource};
use crate::shared::error::HeaderError;
use chrono::{Datelike, Local};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Directory the default header file is placed in
pub const DEFAULT_OUTPUT_DIR: &str = "hack";

/// Extension used for the default path when none is given
pub const DEFAULT_SOURCE_EXTENSION: &str = "go";

/// HeaderTemplate service - validates, defaults and renders header configs
///
/// The pipeline is `validate -> apply_defaults -> render`. Every step is pure;
/// defaulting only fills fields that were left empty.
pub struct HeaderTemplate;

impl HeaderTemplate {
    /// Checks that the requested license can be resolved
    ///
    /// An empty key passes because defaulting picks the default license.
    ///
    /// # Errors
    /// Returns `HeaderError::UnknownLicense` carrying the key when it is
    /// neither built in nor present in `custom_licenses`.
    pub fn validate(config: &HeaderConfig) -> Result<(), HeaderError> {
        let key = config.license_key.as_str();
        if key.is_empty() || config.license_table().contains(key) {
            return Ok(());
        }

        Err(HeaderError::UnknownLicense {
            key: key.to_string(),
        })
    }

    /// Returns a fully populated copy of `config`, using the current year as
    /// the fallback year
    pub fn apply_defaults(config: &HeaderConfig) -> HeaderConfig {
        Self::apply_defaults_for_year(config, &current_year())
    }

    /// Returns a fully populated copy of `config`
    ///
    /// `fallback_year` is only used when `config.year` is empty.
    pub fn apply_defaults_for_year(config: &HeaderConfig, fallback_year: &str) -> HeaderConfig {
        let mut defaulted = config.clone();

        if defaulted.source_extension.is_empty() {
            defaulted.source_extension = DEFAULT_SOURCE_EXTENSION.to_string();
        }

        if defaulted.output_path.as_os_str().is_empty() {
            defaulted.output_path = Self::default_output_path(&defaulted.source_extension);
        }

        if defaulted.license_key.is_empty() {
            defaulted.license_key = DEFAULT_LICENSE_KEY.to_string();
        }

        let custom = defaulted.custom_licenses.get_or_insert_with(BTreeMap::new);
        for (key, body) in LicenseRegistry::entries() {
            custom
                .entry(key.to_string())
                .or_insert_with(|| body.to_string());
        }

        if defaulted.year.is_empty() {
            defaulted.year = fallback_year.to_string();
        }

        defaulted.template_source = Some(match defaulted.explicit_body() {
            Some(body) => TemplateSource::Explicit(body.to_string()),
            None => TemplateSource::Standard,
        });

        defaulted
    }

    /// Renders the header text for a defaulted config
    ///
    /// # Panics
    /// Panics if the license key cannot be resolved. That only happens when
    /// `validate` or `apply_defaults` was skipped, which is a caller bug.
    pub fn render(config: &HeaderConfig) -> String {
        if let Some(TemplateSource::Explicit(body)) = &config.template_source {
            return body.clone();
        }
        if let Some(body) = config.explicit_body() {
            return body.to_string();
        }

        let license_body = config
            .license_table()
            .get(&config.license_key)
            .unwrap_or_else(|| {
                panic!(
                    "license '{}' is not resolvable; validate and apply_defaults must run before render",
                    config.license_key
                )
            });

        format!(
            "/*\n{}\n{}*/",
            Self::copyright_line(&config.year, &config.owner),
            license_body
        )
    }

    /// `Copyright <year> <owner>.`, or `Copyright <year>.` without an owner
    pub fn copyright_line(year: &str, owner: &str) -> String {
        if owner.is_empty() {
            format!("Copyright {}.", year)
        } else {
            format!("Copyright {} {}.", year, owner)
        }
    }

    /// `hack/boilerplate.<extension>.txt`
    pub fn default_output_path(extension: &str) -> PathBuf {
        let extension = if extension.is_empty() {
            DEFAULT_SOURCE_EXTENSION
        } else {
            extension.trim_start_matches('.')
        };
        PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!("boilerplate.{}.txt", extension))
    }
}

/// Current calendar year as a 4-digit string
pub fn current_year() -> String {
    format!("{:04}", Local::now().year())
}
