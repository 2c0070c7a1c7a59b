//! Configuration file support for bom-master.
//!
//! Provides YAML-based configuration through `bom-master.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::assembly::policies::{DuplicatePolicy, OrphanPolicy};
use crate::shared::error::BomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bom-master.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Record source: API base URL or JSON file path
    pub source: Option<String>,
    pub format: Option<String>,
    pub on_duplicate: Option<String>,
    pub on_orphan: Option<String>,
    /// Separator used to display the selected part's path
    pub separator: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        parse_field(self.format.as_deref(), "format")
    }

    pub fn duplicate_policy(&self) -> Result<Option<DuplicatePolicy>> {
        parse_field(self.on_duplicate.as_deref(), "on_duplicate")
    }

    pub fn orphan_policy(&self) -> Result<Option<OrphanPolicy>> {
        parse_field(self.on_orphan.as_deref(), "on_orphan")
    }
}

fn parse_field<T>(value: Option<&str>, field: &str) -> Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value
        .map(|raw| {
            T::from_str(raw).map_err(|e| {
                BomError::Validation {
                    message: format!("config field '{}': {}", field, e),
                }
                .into()
            })
        })
        .transpose()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
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
    if config.source.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(BomError::Validation {
            message: "config field 'source' must not be empty.\n\n\
                      💡 Hint: Set it to the API base URL or a JSON file path, or remove the field."
                .to_string(),
        }
        .into());
    }

    if config.separator.as_deref().is_some_and(str::is_empty) {
        return Err(BomError::Validation {
            message: "config field 'separator' must not be empty.\n\n\
                      💡 Hint: Remove the field to use the default backslash separator."
                .to_string(),
        }
        .into());
    }

    config.output_format()?;
    config.duplicate_policy()?;
    config.orphan_policy()?;
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

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
source: https://localhost:44357/api/BOMappAPI
format: json
on_duplicate: reject
on_orphan: drop
separator: " / "
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.source.as_deref(),
            Some("https://localhost:44357/api/BOMappAPI")
        );
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
        assert_eq!(
            config.duplicate_policy().unwrap(),
            Some(DuplicatePolicy::Reject)
        );
        assert_eq!(config.orphan_policy().unwrap(), Some(OrphanPolicy::Drop));
        assert_eq!(config.separator.as_deref(), Some(" / "));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_backslash_separator_in_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "separator: \"\\\\\"\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.separator.as_deref(), Some("\\"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "source: records.json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.source.as_deref(), Some("records.json"));
        assert_eq!(config.output_format().unwrap(), None);
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_source_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "source: \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("'source' must not be empty"));
    }

    #[test]
    fn test_empty_separator_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "separator: \"\"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("'separator' must not be empty"));
    }

    #[test]
    fn test_invalid_policy_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "on_orphan: keep\n");

        let error = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BomError>(),
            Some(BomError::Validation { .. })
        ));
        assert!(error.to_string().contains("on_orphan"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: yaml\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "source: records.json\ncolor: blue\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("color"));
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "{}\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.source.is_none());
        assert!(config.separator.is_none());
    }
}
