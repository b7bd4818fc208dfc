// Note representation for the sequencer
// A note is a half-open interval of time steps carrying its MIDI on/off pair

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for notes
pub type NoteId = u64;

/// Global note ID generator (atomic for thread-safety)
static NEXT_NOTE_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique note ID
pub fn generate_note_id() -> NoteId {
    NEXT_NOTE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Reasons a note is rejected at construction or insertion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("note duration must be positive (start {start}, end {end})")]
    InvalidDuration { start: i64, end: i64 },

    #[error("note start must not be negative: {0}")]
    NegativeStart(i64),

    #[error("MIDI channel out of range: {0} (expected 0-127)")]
    ChannelOutOfRange(u8),

    #[error("MIDI velocity out of range: {0} (expected 0-127)")]
    VelocityOutOfRange(u8),
}

/// One of the two MIDI events a note expands to at its interval bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, velocity: u8 },
    NoteOff { channel: u8, velocity: u8 },
}

impl MidiEvent {
    /// Status byte of this event (note-on 0x90, note-off 0x80)
    pub fn status_byte(&self) -> u8 {
        match self {
            MidiEvent::NoteOn { .. } => 0x90,
            MidiEvent::NoteOff { .. } => 0x80,
        }
    }
}

/// A musical note on the timeline
///
/// The interval is half-open: the note is sounding for every time step `t`
/// with `start <= t < end`. Channel and velocity describe the note-on event;
/// the note-off event shares the channel and always has velocity 0, so the
/// pair can never disagree.
///
/// Notes are plain data. The editor keeps its rendering proxies keyed by
/// `id` and replaces a note wholesale when dragged or resized (see
/// [`Note::with_interval`]); the interval is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier for this note
    pub id: NoteId,

    /// MIDI channel shared by the on and off events (0-127)
    pub channel: u8,

    /// MIDI velocity of the note-on event (0-127)
    pub velocity: u8,

    /// Inclusive time step at which the note begins
    pub start: i64,

    /// Exclusive time step at which the note ends
    pub end: i64,
}

impl Note {
    /// Creates a validated note
    pub fn new(
        id: NoteId,
        channel: u8,
        velocity: u8,
        start: i64,
        end: i64,
    ) -> Result<Self, NoteError> {
        let note = Self {
            id,
            channel,
            velocity,
            start,
            end,
        };
        note.validate()?;
        Ok(note)
    }

    /// Check every field invariant
    ///
    /// Fields are public, so [`crate::sequencer::NoteStore::add`] re-checks
    /// here before accepting a note built by hand.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.channel > 127 {
            return Err(NoteError::ChannelOutOfRange(self.channel));
        }
        if self.velocity > 127 {
            return Err(NoteError::VelocityOutOfRange(self.velocity));
        }
        if self.start < 0 {
            return Err(NoteError::NegativeStart(self.start));
        }
        if self.start >= self.end {
            return Err(NoteError::InvalidDuration {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Check if this note is sounding at time step `t`
    pub fn contains(&self, t: i64) -> bool {
        self.start <= t && t < self.end
    }

    /// Note length in time steps
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Replace both interval bounds at once, keeping identity and events
    ///
    /// Drag/resize edits go through here so the interval can never be
    /// observed half-updated.
    pub fn with_interval(&self, start: i64, end: i64) -> Result<Self, NoteError> {
        Self::new(self.id, self.channel, self.velocity, start, end)
    }

    /// The note-on event at `start`
    pub fn on_event(&self) -> MidiEvent {
        MidiEvent::NoteOn {
            channel: self.channel,
            velocity: self.velocity,
        }
    }

    /// The note-off event at `end`; velocity is always 0
    pub fn off_event(&self) -> MidiEvent {
        MidiEvent::NoteOff {
            channel: self.channel,
            velocity: 0,
        }
    }
}
