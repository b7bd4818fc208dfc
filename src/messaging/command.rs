// Commands crossing the editor -> session boundary
// Only well-formed data crosses it: time text goes through
// `timecode::parse` before a seek is ever queued, so the session side
// applies commands without a failure path for user input.

use crate::sequencer::note::Note;

/// A mutation request for the session loop
///
/// The session applies commands in arrival order; that ordering is the
/// only synchronization the core needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Jump the clock to an absolute time step
    Seek(i64),

    /// Move the clock by a delta; the playback driver ticks with this
    Advance(i64),

    /// Append a note to the store
    AddNote(Note),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::note::generate_note_id;

    #[test]
    fn test_commands_are_plain_data() {
        let note = Note::new(generate_note_id(), 0, 100, 0, 10).unwrap();
        let cmd = SessionCommand::AddNote(note);

        // Copy semantics: both sides of the channel see the same note
        let copy = cmd;
        assert_eq!(cmd, copy);
    }
}
