//! Dictionary ingestion.
//!
//! The detection core consumes an ordered sequence of [`Entry`]
//! records and does not care where they came from; a [`DictSource`]
//! produces such a sequence from memory, a file or an HTTP endpoint.
//! Three text formats are supported, chosen by extension: plain `.txt`
//! word lists (one word per line, `#` comments), `.json` and
//! `.yaml`/`.yml` entry arrays.
//!
//! License: MIT OR Apache-2.0

mod file;
mod http;
mod memory;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::MemorySource;

use anyhow::Result;

use wordshield_automata::Entry;

use crate::errors::WordshieldError;

/// A producer of dictionary entries.
pub trait DictSource: Send + Sync {
    /// Loads the entries. Called at build time and again on every
    /// watcher-triggered reload.
    fn load(&self) -> Result<Vec<Entry>>;
}

/// The dictionary file formats a source can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DictFormat {
    Txt,
    Json,
    Yaml,
}

impl DictFormat {
    /// Picks the format from a path or URL extension; plain text is
    /// the default.
    pub(crate) fn from_extension(path: &str) -> DictFormat {
        match path.rsplit('.').next().map(str::to_ascii_lowercase) {
            Some(ext) if ext == "json" => DictFormat::Json,
            Some(ext) if ext == "yaml" || ext == "yml" => DictFormat::Yaml,
            _ => DictFormat::Txt,
        }
    }
}

/// Parses dictionary content in the given format.
pub(crate) fn parse_entries(
    content: &str,
    format: DictFormat,
    source_name: &str,
) -> Result<Vec<Entry>, WordshieldError> {
    match format {
        DictFormat::Txt => Ok(parse_word_lines(content)),
        DictFormat::Json => {
            serde_json::from_str(content).map_err(|e| WordshieldError::DictionaryParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })
        }
        DictFormat::Yaml => {
            serde_yml::from_str(content).map_err(|e| WordshieldError::DictionaryParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })
        }
    }
}

/// One word per line; blank lines and `#` comments are skipped. Every
/// word gets the default `other`/`medium` metadata.
pub(crate) fn parse_word_lines(content: &str) -> Vec<Entry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Entry::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(DictFormat::from_extension("words.json"), DictFormat::Json);
        assert_eq!(DictFormat::from_extension("words.YAML"), DictFormat::Yaml);
        assert_eq!(DictFormat::from_extension("words.yml"), DictFormat::Yaml);
        assert_eq!(DictFormat::from_extension("words.txt"), DictFormat::Txt);
        assert_eq!(DictFormat::from_extension("no_extension"), DictFormat::Txt);
    }

    #[test]
    fn word_lines_skip_comments_and_blanks() {
        let entries = parse_word_lines("# header\n\n  badword  \nother\n#tail");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "badword");
        assert_eq!(entries[1].text, "other");
    }

    #[test]
    fn malformed_json_reports_the_source() {
        let err = parse_entries("{not json", DictFormat::Json, "dict.json").unwrap_err();
        assert!(err.to_string().contains("dict.json"));
    }
}
