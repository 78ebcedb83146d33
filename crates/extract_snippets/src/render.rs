// crates/extract_snippets/src/render.rs

use std::io::{self, Write};

/// Writes one snippet under a `==> file [name] <==` header.
pub fn write_snippet<W: Write>(out: &mut W, file_id: &str, name: &str, text: &str) -> io::Result<()> {
    writeln!(out, "==> {file_id} [{name}] <==")?;
    if !text.is_empty() {
        writeln!(out, "{text}")?;
    }
    Ok(())
}
