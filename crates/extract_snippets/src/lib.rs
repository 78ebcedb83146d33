// crates/extract_snippets/src/lib.rs

use std::fs;
use std::io::{ErrorKind, Write};

use anyhow::{bail, Context, Result};
use comment_marker_snippets::{extract_str, normalize_name, strip_marker_lines};

pub mod config;
pub mod discovery;
pub mod render;

use config::RunConfig;
use discovery::collect_files;
use render::write_snippet;

/// Counts reported back to the binary for its exit status.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub snippets_printed: usize,
    pub diagnostics: usize,
}

/// Scans every selected file, writing snippets to `out` and diagnostics and
/// warnings to `err`.
///
/// Each file gets its own engine invocation; nothing is shared between files.
/// With `config.name` set, it is an error for no file to resolve that name.
pub fn run<W: Write, E: Write>(config: &RunConfig, out: &mut W, err: &mut E) -> Result<RunSummary> {
    let options = config.extract_options();
    let wanted = config.name.as_deref().map(normalize_name);
    let files = collect_files(&config.paths, &config.extensions)?;
    let mut summary = RunSummary::default();

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                writeln!(err, "Warning: skipping {} (not valid UTF-8)", file.display())?;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Error reading file {}", file.display()))
            }
        };
        let file_id = file.display().to_string();
        let extraction = extract_str(&file_id, &content, &options);
        summary.files_scanned += 1;

        for diagnostic in &extraction.diagnostics {
            writeln!(err, "{diagnostic}")?;
        }
        summary.diagnostics += extraction.diagnostics.len();

        for (name, text) in &extraction.snippets {
            if wanted.as_deref().is_some_and(|w| w != name.as_str()) {
                continue;
            }
            let text = if config.strip_markers {
                strip_marker_lines(text, &options)
            } else {
                text.clone()
            };
            write_snippet(out, &file_id, name.as_str(), &text)
                .with_context(|| format!("Failed to write snippet [{name}]"))?;
            summary.snippets_printed += 1;
        }
    }

    if let Some(name) = wanted {
        if summary.snippets_printed == 0 {
            bail!("No scanned file contains a complete [{}] marker span", name);
        }
    }
    log::debug!("{summary:?}");
    Ok(summary)
}
