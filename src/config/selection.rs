//! File selection options and the category rule table
//!
//! Which directories and extensions make up each [`Category`] is data, not
//! code: the default table below can be replaced from `config.yaml` as
//! launcher and modpack conventions change.

use serde::{Deserialize, Serialize};

use crate::domain::Category;
use crate::error::{Result, config_invalid};

/// 8 GiB, the historical default read limit
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 8 * 1024 * 1024 * 1024;

/// Maps game-directory locations and extensions to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryRule {
    pub category: Category,

    /// Directories relative to the game directory, searched recursively
    #[serde(default)]
    pub dirs: Vec<String>,

    /// Extensions without the leading dot, matched case-insensitively
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Individual files directly inside the game directory
    #[serde(default)]
    pub files: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, dirs: &[&str], extensions: &[&str]) -> Self {
        Self {
            category,
            dirs: dirs.iter().map(|s| (*s).to_string()).collect(),
            extensions: extensions.iter().map(|s| (*s).to_string()).collect(),
            files: Vec::new(),
        }
    }

    pub fn with_files(mut self, files: &[&str]) -> Self {
        self.files = files.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Whether `file_name` has one of this rule's extensions (last extension only)
    pub fn matches_extension(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// The built-in rule table
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::ModArchive,
            &["mods", "coremods"],
            &["jar", "zip", "litemod"],
        ),
        CategoryRule::new(
            Category::Asset,
            &["resourcepacks", "texturepacks", "assets", "kubejs/assets"],
            &["zip", "png", "jpg", "ogg", "wav", "json", "mcmeta"],
        ),
        CategoryRule::new(
            Category::Config,
            &["config", "defaultconfigs", "kubejs/config"],
            &[
                "toml",
                "cfg",
                "json",
                "json5",
                "ini",
                "txt",
                "properties",
                "snbt",
                "yml",
                "yaml",
            ],
        )
        .with_files(&["options.txt", "optionsof.txt", "optionsshaders.txt"]),
    ]
}

/// Directory names never descended into
pub fn default_skip_dirs() -> Vec<String> {
    [
        ".git",
        ".gradle",
        ".idea",
        "logs",
        "crash-reports",
        "screenshots",
        "shaderpacks",
        "saves",
        "backups",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

/// Options controlling what goes into a warm plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub include_mod_archives: bool,
    pub include_assets: bool,
    pub include_configs: bool,

    /// `None` means unbounded
    pub max_total_bytes: Option<u64>,

    /// `None` means unbounded
    pub max_files: Option<u64>,

    /// Allow symlinks whose target lies outside the instance
    pub follow_symlinks_outside_root: bool,

    pub skip_dirs: Vec<String>,

    /// Globs matched against the game-directory-relative path (forward slashes)
    pub exclude: Vec<String>,

    pub rules: Vec<CategoryRule>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            include_mod_archives: true,
            include_assets: true,
            include_configs: true,
            max_total_bytes: Some(DEFAULT_MAX_TOTAL_BYTES),
            max_files: None,
            follow_symlinks_outside_root: false,
            skip_dirs: default_skip_dirs(),
            exclude: Vec::new(),
            rules: default_rules(),
        }
    }
}

impl SelectionConfig {
    /// Whether files of `category` should be collected
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::ModArchive => self.include_mod_archives,
            Category::Asset => self.include_assets,
            Category::Config => self.include_configs,
        }
    }

    /// Rules for `category`, in table order
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_total_bytes == Some(0) {
            return Err(config_invalid("max_total_bytes must be greater than zero"));
        }
        if self.max_files == Some(0) {
            return Err(config_invalid("max_files must be greater than zero"));
        }
        for rule in &self.rules {
            if rule.extensions.is_empty() && rule.files.is_empty() {
                return Err(config_invalid(format!(
                    "rule for {} lists neither extensions nor files",
                    rule.category
                )));
            }
            if !rule.extensions.is_empty() && rule.dirs.is_empty() {
                return Err(config_invalid(format!(
                    "rule for {} lists extensions but no dirs",
                    rule.category
                )));
            }
            if rule.dirs.iter().any(|d| escapes(d)) || rule.files.iter().any(|f| escapes(f)) {
                return Err(config_invalid(format!(
                    "rule for {} must use paths relative to the game directory",
                    rule.category
                )));
            }
        }
        for pattern in &self.exclude {
            if let Err(e) = wax::Glob::new(pattern) {
                return Err(config_invalid(format!(
                    "invalid exclude pattern '{pattern}': {e}"
                )));
            }
        }
        Ok(())
    }
}

fn escapes(relative: &str) -> bool {
    let path = std::path::Path::new(relative);
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
}
