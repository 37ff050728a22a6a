//! Command helper utilities
//!
//! Loading configuration, resolving search roots and turning instance
//! queries from the command line into discovered instances.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use mcwarm::config::Config;
use mcwarm::discovery::{discover, instance_at};
use mcwarm::domain::{Instance, LauncherKind};
use mcwarm::error::{Result, instance_not_found, root_not_found};
use mcwarm::resolver::{HostDirs, LauncherRoot, OsIdentity, existing_roots, resolver_for};

use crate::cli::Cli;

/// Everything a command needs besides its own arguments
pub struct Context {
    pub config: Config,
    pub os: OsIdentity,
    /// `None` when the user has no home directory
    pub dirs: Option<HostDirs>,
}

impl Context {
    /// Load configuration and merge global flags into it
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        config.extra_roots.extend(cli.roots.iter().cloned());
        if cli.no_default_roots {
            config.search_default_roots = false;
        }

        let os = OsIdentity::current();
        Ok(Self {
            config,
            os,
            dirs: HostDirs::from_env(os),
        })
    }

    /// Every candidate default root, existing or not
    pub fn default_candidates(&self) -> Vec<LauncherRoot> {
        match (&self.dirs, self.config.search_default_roots) {
            (Some(dirs), true) => resolver_for(self.os).candidate_roots(dirs),
            _ => Vec::new(),
        }
    }

    /// Roots to scan: existing defaults followed by user roots.
    ///
    /// A user root that does not exist is an error; missing defaults are not.
    pub fn roots(&self) -> Result<Vec<LauncherRoot>> {
        for root in &self.config.extra_roots {
            if !root.is_dir() {
                return Err(root_not_found(root.display().to_string()));
            }
        }

        let mut candidates = self.default_candidates();
        candidates.extend(self.config.extra_roots.iter().map(LauncherRoot::custom));
        Ok(existing_roots(candidates))
    }

    /// Instances under every root, restricted to `kind` when given
    pub fn instances(&self, kind: Option<LauncherKind>) -> Result<Vec<Instance>> {
        let roots = self.roots()?;
        let kinds: Vec<LauncherKind> = self
            .config
            .kinds
            .iter()
            .copied()
            .filter(|k| kind.is_none_or(|wanted| wanted == *k))
            .collect();
        Ok(discover(&roots, &kinds))
    }

    /// Resolve each query to one instance, in query order, without duplicates
    pub fn find_instances(&self, queries: &[String]) -> Result<Vec<Instance>> {
        // Discovery only runs if some query is not a path
        let mut discovered: Option<Vec<Instance>> = None;
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for query in queries {
            let path = Path::new(query);
            let instance = if path.is_dir() {
                instance_at(path).ok_or_else(|| instance_not_found(query.clone()))?
            } else {
                if discovered.is_none() {
                    discovered = Some(self.instances(None)?);
                }
                let all = discovered.as_deref().unwrap_or_default();
                match_query(all, query)
                    .cloned()
                    .ok_or_else(|| instance_not_found(query.clone()))?
            };

            debug!(query = %query, path = %instance.root_path.display(), "resolved instance");
            if seen.insert(instance.root_path.clone()) {
                found.push(instance);
            }
        }

        Ok(found)
    }

    /// Find a single instance
    pub fn find_instance(&self, query: &str) -> Result<Instance> {
        self.find_instances(&[query.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| instance_not_found(query))
    }
}

/// Display name first, then folder name; both case-insensitive
fn match_query<'a>(instances: &'a [Instance], query: &str) -> Option<&'a Instance> {
    let query = query.trim();
    instances
        .iter()
        .find(|i| i.name.eq_ignore_ascii_case(query))
        .or_else(|| {
            instances
                .iter()
                .find(|i| i.folder_name().eq_ignore_ascii_case(query))
        })
}

/// Show `path` relative to the home directory when it lies below it
pub fn display_path(path: &Path, dirs: Option<&HostDirs>) -> String {
    dirs.and_then(|d| path.strip_prefix(&d.home).ok())
        .map(|rest| PathBuf::from("~").join(rest).display().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
