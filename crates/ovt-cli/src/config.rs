//! # Tool Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! specification_dir: ../specification
//! strict_enumeration_ranges: true
//! assume_yes: false
//! ```
//!
//! A relative `specification_dir` is resolved against the directory holding
//! the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ovt_core::layout::discover_spec_dir;
use ovt_validate::ValidationOptions;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Root of the specification tree.
    pub specification_dir: Option<PathBuf>,
    /// Out-of-range child enumeration ids fail validation (otherwise warn).
    pub strict_enumeration_ranges: bool,
    /// Overwrite an existing specification.md without asking.
    pub assume_yes: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            specification_dir: None,
            strict_enumeration_ranges: true,
            assume_yes: false,
        }
    }
}

impl ToolConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if let Some(dir) = config.specification_dir.take() {
            let base = path.parent().unwrap_or(Path::new("."));
            config.specification_dir = Some(if dir.is_absolute() { dir } else { base.join(dir) });
        }
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse configuration YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict_enumeration_ranges: self.strict_enumeration_ranges,
        }
    }

    /// Pick the specification root.
    ///
    /// Order: `--spec-dir`, then `specification_dir` from the config, then
    /// the nearest `specification/` directory above `cwd`, then
    /// `cwd/specification`.
    pub fn resolve_spec_dir(&self, flag: Option<&Path>, cwd: &Path) -> PathBuf {
        if let Some(dir) = flag {
            return cwd.join(dir);
        }
        if let Some(dir) = &self.specification_dir {
            return cwd.join(dir);
        }
        discover_spec_dir(cwd).unwrap_or_else(|| {
            tracing::warn!("no specification/ directory found above the current directory");
            cwd.join("specification")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ToolConfig::default();
        assert!(config.strict_enumeration_ranges);
        assert!(!config.assume_yes);
        assert!(config.validation_options().strict_enumeration_ranges);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(ToolConfig::from_yaml("\n").unwrap(), ToolConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = ToolConfig::from_yaml("strict_enumeration_ranges: false\n").unwrap();
        assert!(!config.strict_enumeration_ranges);
        assert!(!config.assume_yes);
        assert!(config.specification_dir.is_none());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(ToolConfig::from_yaml("strict: false\n").is_err());
    }

    #[test]
    fn load_resolves_relative_dir_against_config_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ovt.yaml");
        std::fs::write(&path, "specification_dir: specification\nassume_yes: true\n").unwrap();
        let config = ToolConfig::load(&path).unwrap();
        assert_eq!(
            config.specification_dir,
            Some(dir.path().join("specification"))
        );
        assert!(config.assume_yes);
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ToolConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn flag_wins_over_config() {
        let config = ToolConfig {
            specification_dir: Some(PathBuf::from("/from/config")),
            ..ToolConfig::default()
        };
        let cwd = Path::new("/work");
        assert_eq!(
            config.resolve_spec_dir(Some(Path::new("spec")), cwd),
            PathBuf::from("/work/spec")
        );
        assert_eq!(
            config.resolve_spec_dir(None, cwd),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn discovers_specification_dir_upwards() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("specification");
        let tools = dir.path().join("tools");
        std::fs::create_dir_all(&spec).unwrap();
        std::fs::create_dir_all(&tools).unwrap();
        assert_eq!(ToolConfig::default().resolve_spec_dir(None, &tools), spec);
    }
}
