//! JSON export
//!
//! The document is pretty-printed with a four-space indent. Non-ASCII
//! text (Korean labels, for instance) is written as UTF-8, not escaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::{OcelLog, Result};

const INDENT: &[u8] = b"    ";

/// Serialize any value the way logs are exported
pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(())
}

/// Render a log as a JSON string
pub fn to_json_string(log: &OcelLog) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, log)?;
    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| crate::Error::Serialization(e.to_string()))
}

/// Write a log to a file, replacing any existing file
pub fn write_json(log: &OcelLog, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer(&mut writer, log)?;
    writer.flush()?;
    info!(path = %path.display(), summary = %log.summary(), "Wrote OCEL document");
    Ok(())
}
