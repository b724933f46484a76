// file: src/repository/scanner.rs
// description: Directory walking and file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::ScanConfig;
use crate::error::{PipelineError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

pub struct FileScanner {
    config: ScanConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walks `root` recursively. Hidden entries are pruned along with
    /// everything beneath them; any traversal error ends the scan.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = entry.map_err(|source| PipelineError::DirectoryRead {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                source,
            })?;

            let path = entry.path();

            // Unfollowed links still count when they point at a file.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && path.is_file());
            if !is_file {
                continue;
            }

            if self.is_output_file(path) {
                debug!("Skipping output file: {}", path.display());
                continue;
            }

            let size = match fs::metadata(path) {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    debug!("Cannot stat {}, counting 0 bytes: {}", path.display(), err);
                    0
                }
            };

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                size,
            });
        }

        info!("Found {} candidate files", files.len());
        Ok(files)
    }

    fn is_output_file(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str())
            == Some(self.config.output_extension.as_str())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().first() == Some(&b'.')
}
