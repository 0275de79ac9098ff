//! Configuration file support for boilerplate-gen.
//!
//! Provides YAML-based configuration through `boilerplate.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::shared::security::{read_checked, validate_source_extension};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "boilerplate.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub license: Option<String>,
    pub owner: Option<String>,
    pub year: Option<YearValue>,
    pub extension: Option<String>,
    pub output: Option<PathBuf>,
    pub boilerplate_file: Option<PathBuf>,
    /// Custom license bodies keyed by license key.
    pub licenses: Option<BTreeMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A year written either as `2024` or `"2024"`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum YearValue {
    Number(u32),
    Text(String),
}

impl YearValue {
    pub fn as_year_string(&self) -> String {
        match self {
            YearValue::Number(year) => format!("{:04}", year),
            YearValue::Text(year) => year.clone(),
        }
    }
}

impl ConfigFile {
    pub fn year_string(&self) -> Option<String> {
        self.year.as_ref().map(YearValue::as_year_string)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref licenses) = config.licenses {
        if licenses.keys().any(|key| key.trim().is_empty()) {
            bail!(
                "Invalid config: licenses must not contain an empty key.\n\n\
                 💡 Hint: Each entry under 'licenses' needs a name (e.g., \"mit\")."
            );
        }
    }
    if let Some(ref extension) = config.extension {
        validate_source_extension(extension)
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
license: mit
owner: Acme Corp
year: "2024"
extension: rs
output: hack/header.txt
boilerplate_file: hack/custom.txt
licenses:
  mit: |

    Permission is hereby granted, free of charge.
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.license.as_deref(), Some("mit"));
        assert_eq!(config.owner.as_deref(), Some("Acme Corp"));
        assert_eq!(config.year_string().as_deref(), Some("2024"));
        assert_eq!(config.extension.as_deref(), Some("rs"));
        assert_eq!(config.output, Some(PathBuf::from("hack/header.txt")));
        assert_eq!(
            config.boilerplate_file,
            Some(PathBuf::from("hack/custom.txt"))
        );
        let licenses = config.licenses.unwrap();
        assert_eq!(
            licenses.get("mit").map(String::as_str),
            Some("\nPermission is hereby granted, free of charge.\n")
        );
    }

    #[test]
    fn test_numeric_year() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "year: 2019\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.year, Some(YearValue::Number(2019)));
        assert_eq!(config.year_string().as_deref(), Some("2019"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "license: none\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().license.as_deref(), Some("none"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_license_key_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
licenses:
  "  ": "body"
"#,
        )
        .unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("must not contain an empty key"));
    }

    #[test]
    fn test_extension_with_separator_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "extension: ../go\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("path separators"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
license: apache2
domain: my.domain
repo: github.com/example/project
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("domain"));
        assert!(config.unknown_fields.contains_key("repo"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.license.is_none());
        assert!(config.owner.is_none());
        assert!(config.year.is_none());
        assert!(config.licenses.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
