// crates/extract_snippets/src/discovery.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

/// Expands `paths` into the list of files to scan.
///
/// Files named directly are always kept. Directories are walked recursively
/// in file-name order, keeping regular files whose extension is in
/// `extensions` (case-insensitive; an empty list keeps everything).
pub fn collect_files(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let walked = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        log::warn!("skipping unreadable entry: {err}");
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|file| has_wanted_extension(file, extensions));
            files.extend(walked);
        } else {
            bail!("Path {} does not exist", path.display());
        }
    }
    log::debug!("{} file(s) selected for scanning", files.len());
    Ok(files)
}

fn has_wanted_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
