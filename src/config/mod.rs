//! Configuration for mcwarm
//!
//! Settings come from an optional YAML file (`config.yaml`) and are then
//! overridden by command-line flags. The file lives at `$MCWARM_CONFIG` when
//! set, otherwise under the platform config directory:
//!
//! ```yaml
//! kinds: [curseforge, prism]
//! search_default_roots: true
//! extra_roots: ["/mnt/games/instances"]
//! selection:
//!   include_assets: false
//!   max_total_bytes: 4294967296
//!   exclude: ["mods/**/*-dev.jar"]
//! execution:
//!   jobs: 4
//! launch:
//!   command: 'prismlauncher --launch "{instance}"'
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{LauncherKind, WarmMode};
use crate::error::{Result, config_invalid, config_parse_failed, config_read_failed};

pub mod selection;

pub use selection::{CategoryRule, SelectionConfig, default_rules};

/// Directory name under the platform config directory
const CONFIG_DIR: &str = "mcwarm";

/// Config file name
pub const CONFIG_FILE: &str = "config.yaml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "MCWARM_CONFIG";

/// Upper limit for the worker pool; more only deepens the disk queue
pub const MAX_JOBS: usize = 64;

/// Executor options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    pub dry_run: bool,

    /// Number of files read concurrently
    pub jobs: usize,

    /// Discard buffer size per worker, in bytes
    pub chunk_size: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            jobs: 2,
            chunk_size: 1024 * 1024,
        }
    }
}

impl ExecutionConfig {
    pub fn mode(&self) -> WarmMode {
        if self.dry_run {
            WarmMode::DryRun
        } else {
            WarmMode::Real
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 || self.jobs > MAX_JOBS {
            return Err(config_invalid(format!(
                "jobs must be between 1 and {MAX_JOBS}, got {}",
                self.jobs
            )));
        }
        if self.chunk_size == 0 {
            return Err(config_invalid("chunk_size must be greater than zero"));
        }
        Ok(())
    }
}

/// Command run after warming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Template with `{instance}` (folder name) and `{path}` placeholders
    pub command: Option<String>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Launcher kinds to search
    pub kinds: Vec<LauncherKind>,

    /// Search the platform's default launcher directories
    pub search_default_roots: bool,

    /// Roots searched in addition to the platform defaults
    pub extra_roots: Vec<PathBuf>,

    pub selection: SelectionConfig,
    pub execution: ExecutionConfig,
    pub launch: LaunchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kinds: LauncherKind::ALL.to_vec(),
            search_default_roots: true,
            extra_roots: Vec::new(),
            selection: SelectionConfig::default(),
            execution: ExecutionConfig::default(),
            launch: LaunchConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path (argument or `$MCWARM_CONFIG`) must exist. The default
    /// location may be absent, in which case defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let (path, required) = match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => (path, true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() && !required {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), "loaded config");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.kinds.is_empty() {
            return Err(config_invalid("at least one launcher kind must be searched"));
        }
        self.selection.validate()?;
        self.execution.validate()
    }
}

/// `<config dir>/mcwarm/config.yaml`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WarmerError;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.kinds, LauncherKind::ALL.to_vec());
        assert_eq!(config.execution.jobs, 2);
        assert_eq!(config.execution.mode(), WarmMode::Real);
        assert!(config.search_default_roots);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = Config::from_yaml(
            "kinds: [prism]\nexecution:\n  jobs: 4\n  dry_run: true\nlaunch:\n  command: 'x {instance}'\n",
        )
        .unwrap();
        assert_eq!(config.kinds, vec![LauncherKind::Prism]);
        assert_eq!(config.execution.jobs, 4);
        assert_eq!(config.execution.mode(), WarmMode::DryRun);
        assert_eq!(config.launch.command.as_deref(), Some("x {instance}"));
        assert!(config.selection.include_mod_archives);
    }

    #[test]
    fn test_from_yaml_unknown_field_rejected() {
        assert!(Config::from_yaml("jbos: 3\n").is_err());
    }

    #[test]
    fn test_from_yaml_custom_rule() {
        let config = Config::from_yaml(
            "selection:\n  rules:\n    - category: mod-archive\n      dirs: [mods]\n      extensions: [jar]\n",
        )
        .unwrap();
        assert_eq!(config.selection.rules.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jobs_bounds() {
        let mut config = Config::default();
        config.execution.jobs = 0;
        assert!(config.validate().is_err());
        config.execution.jobs = MAX_JOBS + 1;
        assert!(config.validate().is_err());
        config.execution.jobs = MAX_JOBS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_kinds_rejected() {
        let config = Config {
            kinds: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "selection:\n  max_files: 10\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.selection.max_files, Some(10));
    }

    #[test]
    #[serial]
    fn test_load_explicit_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("missing.yaml")));
        assert!(matches!(
            result,
            Err(WarmerError::ConfigReadFailed { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_invalid_yaml_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "selection: [unclosed").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(WarmerError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "execution:\n  jobs: 0\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(WarmerError::ConfigInvalid { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env.yaml");
        std::fs::write(&path, "kinds: [curseforge]\n").unwrap();

        // SAFETY: serialized with every other test touching the environment
        unsafe { std::env::set_var(CONFIG_ENV, &path) };
        let config = Config::load(None);
        unsafe { std::env::remove_var(CONFIG_ENV) };

        assert_eq!(config.unwrap().kinds, vec![LauncherKind::CurseForge]);
    }
}
