//! file.rs - Dictionary files as a source.
//!
//! License: MIT OR Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use wordshield_automata::Entry;

use super::{parse_entries, DictFormat, DictSource};

/// Loads entries from a local file. The format follows the extension:
/// `.json` and `.yaml`/`.yml` hold entry arrays, anything else is read
/// as a plain word list.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictSource for FileSource {
    fn load(&self) -> Result<Vec<Entry>> {
        let display = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read dictionary file {display}"))?;
        let format = DictFormat::from_extension(&display);
        let entries = parse_entries(&content, format, &display)?;
        debug!("loaded {} entries from {display}", entries.len());
        Ok(entries)
    }
}
