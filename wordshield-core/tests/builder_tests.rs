// wordshield-core/tests/builder_tests.rs
//! Builder wiring: source aggregation, whitelist loading and failure
//! policy.

use std::io::Write;

use anyhow::Result;
use tempfile::Builder;
use test_log::test;

use wordshield_core::{DetectorBuilder, DictSource, Entry};

#[test]
fn entries_words_and_files_aggregate() -> Result<()> {
    let mut file = Builder::new().suffix(".txt").tempfile()?;
    writeln!(file, "fromfile")?;

    let detector = DetectorBuilder::new()
        .entries([Entry::new("fromentry")])
        .words(["fromword"])
        .file(file.path())
        .build()?;

    for text in ["fromentry", "fromword", "fromfile"] {
        assert!(detector.contains(text), "missing dictionary part: {text}");
    }
    Ok(())
}

#[test]
fn custom_sources_plug_in() -> Result<()> {
    struct Fixed;

    impl DictSource for Fixed {
        fn load(&self) -> Result<Vec<Entry>> {
            Ok(vec![Entry::new("plugged")])
        }
    }

    let detector = DetectorBuilder::new().source(Box::new(Fixed)).build()?;
    assert!(detector.contains("plugged in"));
    Ok(())
}

#[test]
fn failing_dictionary_source_aborts_the_build() {
    let result = DetectorBuilder::new()
        .file("/definitely/not/here.txt")
        .build();
    assert!(result.is_err());
}

#[test]
fn failing_whitelist_source_is_skipped() -> Result<()> {
    // An unreachable exemption list must not block detection.
    let detector = DetectorBuilder::new()
        .words(["bad"])
        .whitelist_file("/definitely/not/here.txt")
        .build()?;
    assert!(detector.contains("bad"));
    Ok(())
}

#[test]
fn whitelist_file_entries_are_exempted() -> Result<()> {
    let mut file = Builder::new().suffix(".txt").tempfile()?;
    writeln!(file, "harmless")?;

    let detector = DetectorBuilder::new()
        .words(["harmless", "bad"])
        .whitelist_file(file.path())
        .build()?;

    let matches = detector.find("harmless but bad");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word, "bad");
    Ok(())
}

#[test]
fn normalizers_compose_in_fixed_order() -> Result<()> {
    // Symbol fold must run before homoglyph fold for "p.0.r.n" to
    // collapse to "p0rn" and then fold to "porn".
    let detector = DetectorBuilder::new()
        .words(["porn"])
        .symbol_fold()
        .homoglyph_fold()
        .build()?;
    assert!(detector.contains("p.0.r.n"));
    Ok(())
}

#[test]
fn close_is_idempotent_without_watchers() -> Result<()> {
    let detector = DetectorBuilder::new().words(["bad"]).build()?;
    detector.close();
    detector.close();
    assert!(detector.contains("bad"));
    Ok(())
}
