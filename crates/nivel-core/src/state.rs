//! Persisted processor state.
//!
//! The on-stream format is the host contract: exactly one IEEE-754 `f32`,
//! little-endian — the gain value. Nothing else is persisted; the
//! note-driven gain reduction is transient by design.

/// Size in bytes of the persisted state record.
pub const STATE_SIZE: usize = 4;

/// Encode a gain value as the 4-byte little-endian state record.
#[must_use]
pub fn encode_state(gain: f32) -> [u8; STATE_SIZE] {
    gain.to_le_bytes()
}

/// Decode a state record.
///
/// Returns `None` when `bytes` holds fewer than [`STATE_SIZE`] bytes.
/// Trailing bytes beyond the record are ignored, so a stream written by a
/// newer revision still yields the gain.
#[must_use]
pub fn decode_state(bytes: &[u8]) -> Option<f32> {
    let record: [u8; STATE_SIZE] = bytes.get(..STATE_SIZE)?.try_into().ok()?;
    Some(f32::from_le_bytes(record))
}
