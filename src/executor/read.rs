//! Reading a single file into a discard buffer

use std::fs::File;
use std::io::{ErrorKind, Read};

use crate::domain::{CandidateFile, FileOutcome, WarmMode};

/// Warm one planned file.
///
/// Dry runs touch nothing and report the planned size. Real runs read the
/// whole file sequentially through `buf`, which is reused across files.
pub(super) fn warm_file(file: &CandidateFile, mode: WarmMode, buf: &mut [u8]) -> FileOutcome {
    if mode == WarmMode::DryRun {
        return FileOutcome::Succeeded {
            bytes_read: file.size_bytes,
        };
    }

    let mut handle = match File::open(&file.path) {
        Ok(handle) => handle,
        Err(e) => return FileOutcome::Failed { error: e.to_string() },
    };

    match handle.metadata() {
        Ok(metadata) if !metadata.is_file() => {
            return FileOutcome::Skipped {
                reason: "not a regular file".to_string(),
            };
        }
        Ok(_) => {}
        Err(e) => return FileOutcome::Failed { error: e.to_string() },
    }

    let mut bytes_read = 0u64;
    loop {
        match handle.read(buf) {
            Ok(0) => break,
            Ok(n) => bytes_read += n as u64,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return FileOutcome::Failed { error: e.to_string() },
        }
    }

    FileOutcome::Succeeded { bytes_read }
}
