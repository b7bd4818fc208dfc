// PlaybackClock - the current time step and its cached active-note set

use crate::sequencer::note::Note;
use crate::sequencer::store::NoteStore;

/// Playback position over a note store
///
/// The clock holds the only mutable playback state of a session: the
/// current time step and the notes sounding at it. The active set is
/// recomputed on every time mutation and never on read, so a UI redrawn on
/// every tick reads it for free.
///
/// There is no playing/paused state in here. Playing is an external driver
/// calling [`PlaybackClock::advance`] on a fixed period; pausing is the
/// driver ceasing to call it.
///
/// The store is borrowed per operation rather than held, which keeps the
/// session free to mutate the store between time mutations. Callers own
/// the pairing of one clock with one store.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    current_time: i64,
    active: Vec<Note>,
}

impl PlaybackClock {
    /// Clock at time step 0, active set already computed
    pub fn new(store: &NoteStore) -> Self {
        Self::at(store, 0)
    }

    /// Clock starting at an arbitrary time step
    pub fn at(store: &NoteStore, t: i64) -> Self {
        Self {
            current_time: t,
            active: store.select_active(t),
        }
    }

    /// Jump to time step `t` and recompute the active set
    ///
    /// No clamping: any integer is accepted, including negative ones. The
    /// display side decides how to show out-of-range times (see
    /// [`crate::sequencer::timecode::format`]).
    pub fn seek(&mut self, store: &NoteStore, t: i64) {
        self.current_time = t;
        self.active = store.select_active(t);
    }

    /// Move by `dt` time steps; negative deltas rewind
    ///
    /// This is the one operation a playback driver invokes per tick.
    pub fn advance(&mut self, store: &NoteStore, dt: i64) {
        let t = self.current_time.saturating_add(dt);
        self.seek(store, t);
    }

    /// The current time step
    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    /// Notes sounding at the current time, as cached by the last
    /// `seek`/`advance`
    ///
    /// O(1). Store edits made after the last time mutation are not
    /// reflected until the next one.
    pub fn active_notes(&self) -> &[Note] {
        &self.active
    }
}
