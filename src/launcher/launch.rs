//! Starting a launcher, for an instance after warming or on its own

use std::process::{Command, Stdio};

use tracing::info;

use crate::domain::Instance;
use crate::error::{Result, launch_failed, root_not_found};

/// Placeholder replaced by the instance folder name
pub const INSTANCE_PLACEHOLDER: &str = "{instance}";

/// Placeholder replaced by the full instance path
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Split `template` into program and arguments, then fill in placeholders.
///
/// Substitution happens per word after splitting, so names containing quotes
/// or spaces never change the word boundaries.
pub fn render_command(template: &str, instance: &Instance) -> Result<Vec<String>> {
    let words = shell_words::split(template)
        .map_err(|e| launch_failed(template, format!("invalid command: {e}")))?;
    if words.is_empty() {
        return Err(launch_failed(template, "command is empty"));
    }

    let folder = instance.folder_name();
    let path = instance.root_path.to_string_lossy();
    Ok(words
        .into_iter()
        .map(|word| {
            word.replace(INSTANCE_PLACEHOLDER, &folder)
                .replace(PATH_PLACEHOLDER, &path)
        })
        .collect())
}

/// Start the launcher for `instance` without waiting for it to exit
pub fn launch(template: &str, instance: &Instance) -> Result<()> {
    if !instance.root_path.exists() {
        return Err(root_not_found(instance.root_path.display().to_string()));
    }

    let argv = render_command(template, instance)?;
    spawn_detached(&argv)
}

/// Split a launcher command that is not tied to an instance.
///
/// Templates with instance placeholders are refused; they only make sense
/// through [`launch`].
pub fn open_command(command: &str) -> Result<Vec<String>> {
    let words = shell_words::split(command)
        .map_err(|e| launch_failed(command, format!("invalid command: {e}")))?;
    if words.is_empty() {
        return Err(launch_failed(command, "command is empty"));
    }
    if has_placeholder(command) {
        return Err(launch_failed(command, "command needs an instance"));
    }
    Ok(words)
}

/// Whether `template` refers to an instance
pub fn has_placeholder(template: &str) -> bool {
    template.contains(INSTANCE_PLACEHOLDER) || template.contains(PATH_PLACEHOLDER)
}

/// Start a launcher without an instance, without waiting for it to exit
pub fn open(command: &str) -> Result<()> {
    let argv = open_command(command)?;
    spawn_detached(&argv)
}

fn spawn_detached(argv: &[String]) -> Result<()> {
    let command_line = shell_words::join(argv);
    let Some((program, args)) = argv.split_first() else {
        return Err(launch_failed(command_line, "command is empty"));
    };
    info!(command = %command_line, "launching");

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| launch_failed(command_line, e.to_string()))?;

    Ok(())
}
