//! Score ingestion tests against real files on disk

use std::io::Write;

use pianoroll::{LineError, PlaybackClock, load_score};
use tempfile::NamedTempFile;

fn write_score(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_score_from_file() {
    let file = write_score("144 0 100 0 480\n144 1 80 480 960\n144 2 64 0 960\n");

    let load = load_score(file.path()).unwrap();
    assert_eq!(load.store.note_count(), 3);
    assert!(load.skipped.is_empty());

    // The loaded store plays
    let clock = PlaybackClock::at(&load.store, 500);
    assert_eq!(clock.active_notes().len(), 2);
}

#[test]
fn test_malformed_lines_are_reported_not_fatal() {
    let file = write_score(
        "144 0 100 0 480\n\
         garbage here\n\
         144 0 100\n\
         128 0 100 0 480\n\
         144 0 100 480 480\n\
         144 1 80 480 960\n",
    );

    let load = load_score(file.path()).unwrap();

    // Both well-formed lines made it in, around four bad ones
    assert_eq!(load.store.note_count(), 2);
    assert_eq!(load.skipped.len(), 4);

    let numbers: Vec<usize> = load.skipped.iter().map(|s| s.line_number).collect();
    assert_eq!(numbers, vec![2, 3, 4, 5]);

    assert_eq!(load.skipped[0].reason, LineError::Shape(2));
    assert_eq!(load.skipped[1].reason, LineError::Shape(3));
    assert_eq!(load.skipped[2].reason, LineError::Status(0x80));
    assert!(matches!(load.skipped[3].reason, LineError::Note(_)));
}

#[test]
fn test_empty_score_loads_empty_store() {
    let file = write_score("\n\n");

    let load = load_score(file.path()).unwrap();
    assert!(load.store.is_empty());
    assert!(load.skipped.is_empty());
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_score(dir.path().join("no-such-score.txt"));
    assert!(result.is_err());
}
