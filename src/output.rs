use std::io::{BufWriter, Write};

use crate::error::{FilesetsError, Result};

/// Writes one ID per line and flushes.
pub fn write_ids<W: Write>(ids: &[u32], writer: W) -> Result<()> {
    let mut out = BufWriter::new(writer);
    for id in ids {
        writeln!(out, "{}", id).map_err(write_failed)?;
    }
    out.flush().map_err(write_failed)
}

fn write_failed(e: std::io::Error) -> FilesetsError {
    FilesetsError::Resource(format!("can't write output: {}", e))
}
