// Score loader
// Per-line recovery: a bad line is logged and skipped, the rest still loads

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::score::{LineError, ScoreError};
use crate::sequencer::note::{Note, generate_note_id};
use crate::sequencer::store::NoteStore;

/// High nibble marking a note-on status byte. The low nibble carries the
/// wire channel and is ignored: the file repeats the channel in its own
/// field. The note-off half of the pair is implied by the note interval.
const NOTE_ON_STATUS: u8 = 0x90;

/// Result of loading a score: the populated store plus every line that had
/// to be skipped, for the editor to surface
#[derive(Debug)]
pub struct ScoreLoad {
    pub store: NoteStore,
    pub skipped: Vec<SkippedLine>,
}

/// A line that failed to parse, with its position and reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    pub content: String,
    pub reason: LineError,
}

/// Load a score file from disk
pub fn load_score<P: AsRef<Path>>(path: P) -> Result<ScoreLoad, ScoreError> {
    let file = File::open(path)?;
    read_score(BufReader::new(file))
}

/// Read a score from any buffered source
///
/// Blank lines are ignored. A malformed line is logged, recorded in
/// [`ScoreLoad::skipped`] and skipped; loading never aborts on one bad
/// line.
pub fn read_score<R: BufRead>(reader: R) -> Result<ScoreLoad, ScoreError> {
    let mut store = NoteStore::new();
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let accepted = parse_line(&line)
            .and_then(|note| store.add(note).map_err(LineError::Note));
        if let Err(reason) = accepted {
            warn!("score line {line_number} skipped ({reason}): {line:?}");
            skipped.push(SkippedLine {
                line_number,
                content: line,
                reason,
            });
        }
    }

    Ok(ScoreLoad { store, skipped })
}

/// Parse one `status channel velocity start end` line into a note
fn parse_line(line: &str) -> Result<Note, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(LineError::Shape(fields.len()));
    }

    let status: u8 = parse_field(fields[0])?;
    if status & 0xF0 != NOTE_ON_STATUS {
        return Err(LineError::Status(status));
    }

    let channel: u8 = parse_field(fields[1])?;
    let velocity: u8 = parse_field(fields[2])?;
    let start: i64 = parse_field(fields[3])?;
    let end: i64 = parse_field(fields[4])?;

    Ok(Note::new(generate_note_id(), channel, velocity, start, end)?)
}

fn parse_field<T>(text: &str) -> Result<T, LineError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    text.parse().map_err(|source| LineError::Field {
        text: text.to_string(),
        source,
    })
}
