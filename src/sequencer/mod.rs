// Sequencer module
// Note model, note storage, playback clock and the editor-facing time codec

pub mod clock;
pub mod note;
pub mod store;
pub mod timecode;

pub use clock::PlaybackClock;
pub use note::{MidiEvent, Note, NoteError, NoteId, generate_note_id};
pub use store::NoteStore;
