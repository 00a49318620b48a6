//! Note events delivered through the event input bus.

/// A note event as delivered by the host for one block.
///
/// The gain stage reads only the velocity: note-on velocity becomes the
/// gain reduction, note-off clears it. Pitch and channel are carried so
/// hosts can route faithfully, and intra-block timing is intentionally
/// absent: events apply before the block renders, in list order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteEvent {
    /// Key down.
    On {
        /// MIDI-style note number.
        pitch: i16,
        /// Event bus channel.
        channel: i16,
        /// Strike velocity, normalized [0, 1].
        velocity: f32,
    },
    /// Key up.
    Off {
        /// MIDI-style note number.
        pitch: i16,
        /// Event bus channel.
        channel: i16,
        /// Release velocity, normalized [0, 1].
        velocity: f32,
    },
}

impl NoteEvent {
    /// The event's velocity, on or off.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        match *self {
            Self::On { velocity, .. } | Self::Off { velocity, .. } => velocity,
        }
    }

    /// True for note-on events.
    #[must_use]
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On { .. })
    }
}
