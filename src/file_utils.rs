use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logger::Logger;

/// Extension of the files a batch operates on
pub const AUDIO_EXTENSION: &str = "mp3";

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(AUDIO_EXTENSION))
        .unwrap_or(false)
}

/// List the MP3 files directly inside `dir`, sorted by file name.
/// Entries that can't be read are skipped.
pub fn list_audio_files(dir: &Path, logger: &Logger) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                logger.debug(&format!("Skipping unreadable entry in {}: {}", dir.display(), e));
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_audio_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name for status output
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
