use clap::Args;

use mcwarm::config::SelectionConfig;
use mcwarm::error::{Result, config_invalid};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Selection flags shared by `plan` and `warm`; they override config.yaml
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Read at most this many gigabytes in total, across all instances
    #[arg(long, value_name = "GB", conflicts_with_all = ["max_bytes", "unbounded"])]
    pub max_gb: Option<f64>,

    /// Read at most this many bytes in total, across all instances
    #[arg(long, value_name = "BYTES", conflicts_with = "unbounded")]
    pub max_bytes: Option<u64>,

    /// Read at most this many files per instance
    #[arg(long, value_name = "N")]
    pub max_files: Option<u64>,

    /// Remove the byte limit
    #[arg(long)]
    pub unbounded: bool,

    /// Skip mod archives
    #[arg(long)]
    pub no_mods: bool,

    /// Skip resource packs and assets
    #[arg(long)]
    pub no_assets: bool,

    /// Skip config files
    #[arg(long)]
    pub no_configs: bool,

    /// Glob of game-directory-relative paths to leave out (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,
}

impl SelectionArgs {
    /// Apply flags on top of `config`
    pub fn apply(&self, config: &mut SelectionConfig) -> Result<()> {
        if let Some(gb) = self.max_gb {
            if !gb.is_finite() || gb <= 0.0 {
                return Err(config_invalid(format!(
                    "--max-gb must be a positive number, got {gb}"
                )));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bytes = (gb * BYTES_PER_GB) as u64;
            config.max_total_bytes = Some(bytes.max(1));
        }
        if let Some(bytes) = self.max_bytes {
            config.max_total_bytes = Some(bytes);
        }
        if self.unbounded {
            config.max_total_bytes = None;
        }
        if let Some(files) = self.max_files {
            config.max_files = Some(files);
        }
        if self.no_mods {
            config.include_mod_archives = false;
        }
        if self.no_assets {
            config.include_assets = false;
        }
        if self.no_configs {
            config.include_configs = false;
        }
        config.exclude.extend(self.exclude.iter().cloned());
        config.validate()
    }
}
