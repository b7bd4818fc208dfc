// Score files - the line-oriented note list format
// One note per line: status channel velocity start end

pub mod loader;

pub use loader::{ScoreLoad, SkippedLine, load_score, read_score};

use crate::sequencer::note::NoteError;

/// Errors that abort a score load
///
/// Everything line-level is recovered instead (see [`LineError`]).
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single line was skipped; never fatal to the load
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected 5 fields `status channel velocity start end`, found {0}")]
    Shape(usize),

    #[error("invalid number {text:?}")]
    Field {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("status byte {0:#04x} is not a note-on")]
    Status(u8),

    #[error(transparent)]
    Note(#[from] NoteError),
}
