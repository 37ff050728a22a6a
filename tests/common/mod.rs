//! Common test utilities for mcwarm integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Launcher directories with instances, plus a config file pointing at them
#[allow(dead_code)]
pub struct TestInstances {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the temporary directory
    pub path: PathBuf,
}

impl TestInstances {
    /// Create empty CurseForge and Prism roots and a config that only
    /// searches them
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let fixture = Self { temp, path };

        std::fs::create_dir_all(fixture.curseforge_root())
            .expect("Failed to create CurseForge root");
        std::fs::create_dir_all(fixture.prism_root()).expect("Failed to create Prism root");
        std::fs::create_dir_all(fixture.path.join("home")).expect("Failed to create home");
        fixture.write_config("");
        fixture
    }

    pub fn curseforge_root(&self) -> PathBuf {
        self.path.join("curseforge").join("Instances")
    }

    pub fn prism_root(&self) -> PathBuf {
        self.path.join("prism").join("instances")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path.join("config.yaml")
    }

    /// Write config.yaml with both roots and `extra` appended
    pub fn write_config(&self, extra: &str) {
        let yaml = format!(
            "search_default_roots: false\nextra_roots:\n  - {}\n  - {}\n{extra}",
            yaml_path(&self.curseforge_root()),
            yaml_path(&self.prism_root()),
        );
        std::fs::write(self.config_path(), yaml).expect("Failed to write config");
    }

    /// Create a CurseForge instance and return its root
    #[allow(dead_code)]
    pub fn curseforge_instance(&self, folder: &str, name: &str) -> PathBuf {
        let root = self.curseforge_root().join(folder);
        write_file(
            &root.join("minecraftinstance.json"),
            format!(r#"{{"name": "{name}", "gameVersion": "1.20.1"}}"#).as_bytes(),
        );
        root
    }

    /// Create a Prism instance and return its game directory
    #[allow(dead_code)]
    pub fn prism_instance(&self, folder: &str, name: &str) -> PathBuf {
        let root = self.prism_root().join(folder);
        write_file(
            &root.join("instance.cfg"),
            format!("[General]\nInstanceType=OneSix\nname={name}\n").as_bytes(),
        );
        let game_dir = root.join(".minecraft");
        std::fs::create_dir_all(&game_dir).expect("Failed to create .minecraft");
        game_dir
    }

    /// mcwarm with this fixture's config and an isolated home directory
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mcwarm").expect("Failed to find mcwarm binary");
        let home = self.path.join("home");
        cmd.env("MCWARM_CONFIG", self.config_path());
        cmd.env_remove("MCWARM_LOG");
        cmd.env("HOME", &home);
        cmd.env("USERPROFILE", &home);
        cmd.env("XDG_DATA_HOME", home.join(".local").join("share"));
        cmd.env("XDG_CONFIG_HOME", home.join(".config"));
        cmd.current_dir(&self.path);
        cmd
    }
}

/// Write `size` bytes to `path`, creating parents
#[allow(dead_code)]
pub fn write_sized(path: &Path, size: usize) {
    write_file(path, &vec![7u8; size]);
}

pub fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, contents).expect("Failed to write file");
}

/// Single-quoted YAML scalar, so Windows paths survive
fn yaml_path(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', "''"))
}
