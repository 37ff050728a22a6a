//! Progress bar display for warm runs

use indicatif::{ProgressBar, ProgressStyle};

use crate::common::truncate_path;
use crate::executor::{ProgressEvent, ProgressKind, ProgressReporter};

const PATH_WIDTH: usize = 50;

/// Terminal progress for one instance at a time
pub struct ProgressDisplay {
    /// Byte progress of the current instance
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a bar for an instance of `total_bytes`
    pub fn new(instance_name: &str, total_bytes: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {prefix} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_bytes);
        bar.set_style(style);
        bar.set_prefix(instance_name.to_string());

        Self { bar }
    }

    /// Hidden display, for non-interactive output
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Finish and leave the bar on screen
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Clear the bar on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl ProgressReporter for ProgressDisplay {
    fn on_event(&self, event: &ProgressEvent) {
        self.bar.set_length(event.bytes_total.max(event.bytes_done));
        self.bar.set_position(event.bytes_done);

        let path = event.current_path.to_string_lossy();
        let marker = match event.kind {
            ProgressKind::Read | ProgressKind::WouldRead => "",
            ProgressKind::Skipped => "skipped ",
            ProgressKind::Failed => "failed ",
        };
        self.bar.set_message(format!(
            "({}/{}) {marker}{}",
            event.files_done,
            event.files_total,
            truncate_path(&path, PATH_WIDTH)
        ));
    }

    fn on_log(&self, message: &str) {
        if self.bar.is_hidden() {
            eprintln!("{message}");
        } else {
            // Above the bar so it survives redraws
            self.bar.println(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use std::path::PathBuf;

    fn event(files_done: u64, bytes_done: u64, kind: ProgressKind) -> ProgressEvent {
        ProgressEvent {
            seq: files_done,
            files_done,
            files_total: 2,
            bytes_done,
            bytes_total: 10,
            current_path: PathBuf::from("/games/pack/mods/a.jar"),
            category: Category::ModArchive,
            kind,
            message: String::new(),
        }
    }

    #[test]
    fn test_hidden_display_tracks_bytes() {
        let display = ProgressDisplay::hidden();
        display.on_event(&event(1, 4, ProgressKind::Read));
        assert_eq!(display.bar.position(), 4);
        display.on_event(&event(2, 10, ProgressKind::Failed));
        assert_eq!(display.bar.position(), 10);
        assert!(display.bar.message().contains("failed"));
        display.finish();
    }

    #[test]
    fn test_new_display_starts_at_zero() {
        let display = ProgressDisplay::new("Pack", 100);
        assert_eq!(display.bar.position(), 0);
        assert_eq!(display.bar.length(), Some(100));
        display.abandon();
    }
}
