use std::path::{Path, PathBuf};

use crate::editor::{self, EditorConfig};
use crate::file_utils::display_name;
use crate::logger::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    Failed(String),
}

/// Per-file results of one batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| *outcome == FileOutcome::Updated)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.updated()
    }

    pub fn outcome(&self, path: &Path) -> Option<&FileOutcome> {
        self.results
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, outcome)| outcome)
    }
}

/// Tag every file in order. A failure is reported and the batch moves on;
/// files already written stay written.
pub fn apply_batch(config: &EditorConfig, files: &[PathBuf], logger: &Logger) -> BatchReport {
    let mut report = BatchReport::default();

    for (i, path) in files.iter().enumerate() {
        let name = display_name(path);
        logger.debug(&format!("[{}/{}] Tagging {}", i + 1, files.len(), path.display()));

        let outcome = match editor::write_tags(config, path) {
            Ok(()) => {
                logger.file_updated(&name);
                FileOutcome::Updated
            }
            Err(e) => {
                let error = format!("{:#}", e);
                logger.file_failed(&name, &error);
                FileOutcome::Failed(error)
            }
        };
        report.results.push((path.clone(), outcome));
    }

    logger.batch_complete(report.updated(), report.failed());
    report
}
