// wordshield-core/tests/loader_tests.rs
//! Dictionary source tests: the three file formats, defaults and
//! failure reporting.

use std::io::Write;

use anyhow::Result;
use tempfile::Builder;
use test_log::test;

use wordshield_core::{Category, DictSource, FileSource, Level, MemorySource};

#[test]
fn memory_source_applies_default_metadata() -> Result<()> {
    let entries = MemorySource::new(["bad", "worse"]).load()?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category, Category::OTHER);
    assert_eq!(entries[0].level, Level::Medium);
    Ok(())
}

#[test]
fn txt_file_skips_comments_and_blank_lines() -> Result<()> {
    let mut file = Builder::new().suffix(".txt").tempfile()?;
    writeln!(file, "# banned words")?;
    writeln!(file)?;
    writeln!(file, "badword")?;
    writeln!(file, "  spaced  ")?;
    writeln!(file, "# trailing comment")?;

    let entries = FileSource::new(file.path()).load()?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "badword");
    assert_eq!(entries[1].text, "spaced");
    Ok(())
}

#[test]
fn json_file_carries_full_metadata() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"[
            {{ "text": "murder", "category": "violence", "level": "critical" }},
            {{ "text": "scam", "category": ["ad", "illegal"] }}
        ]"#
    )?;

    let entries = FileSource::new(file.path()).load()?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category, Category::VIOLENCE);
    assert_eq!(entries[0].level, Level::Critical);
    assert_eq!(entries[1].category, Category::AD | Category::ILLEGAL);
    assert_eq!(entries[1].level, Level::Medium);
    Ok(())
}

#[test]
fn yaml_file_parses_entry_list() -> Result<()> {
    let mut file = Builder::new().suffix(".yaml").tempfile()?;
    write!(
        file,
        "- text: insult\n  category: abuse\n  level: high\n- text: plain\n"
    )?;

    let entries = FileSource::new(file.path()).load()?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category, Category::ABUSE);
    assert_eq!(entries[0].level, Level::High);
    assert_eq!(entries[1].text, "plain");
    Ok(())
}

#[test]
fn missing_file_reports_the_path() {
    let err = FileSource::new("/definitely/not/here.txt").load().unwrap_err();
    assert!(err.to_string().contains("here.txt"));
}

#[test]
fn malformed_json_reports_the_file() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(file, "{{ not valid json")?;

    let err = FileSource::new(file.path()).load().unwrap_err();
    assert!(err.to_string().contains("json"));
    Ok(())
}

#[test]
fn unknown_extension_falls_back_to_word_list() -> Result<()> {
    let mut file = Builder::new().suffix(".dict").tempfile()?;
    writeln!(file, "someword")?;

    let entries = FileSource::new(file.path()).load()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "someword");
    Ok(())
}
