// Piano-roll sequencer core - library exports for tests and the demo player

pub mod messaging;
pub mod score;
pub mod sequencer;

// Re-export commonly used types for convenience
pub use messaging::channels::{CommandConsumer, CommandProducer, create_command_channel};
pub use messaging::command::SessionCommand;
pub use score::loader::{ScoreLoad, SkippedLine, load_score, read_score};
pub use score::{LineError, ScoreError};
pub use sequencer::{
    MidiEvent, Note, NoteError, NoteId, NoteStore, PlaybackClock, generate_note_id, timecode,
};
