//! Audio block model for the host-facing process call.
//!
//! The host hands the processor one [`AudioBlock`] per call: the main bus
//! as input/output channel pairs, an optional mono side-chain, parameter
//! change queues, and note events. All buffers are borrowed from the host
//! for the duration of the call; the processor never allocates.

use crate::event::NoteEvent;
use crate::param::ParamQueue;

/// One main-bus channel as handed over by the host.
///
/// Hosts either provide distinct input and output buffers or alias the
/// two ("in-place" processing). Making the aliasing explicit lets the
/// render path skip clearing buffers that already hold their own input.
#[derive(Debug)]
pub enum ChannelPair<'a> {
    /// Distinct input and output storage.
    Split {
        /// Samples read from the host.
        input: &'a [f32],
        /// Samples written back to the host.
        output: &'a mut [f32],
    },
    /// Input and output share one buffer.
    InPlace(&'a mut [f32]),
}

/// Per-channel silence bitmask for one bus.
///
/// Bit `i` set means channel `i` carries only silence. Channels past 63
/// cannot be flagged, matching the width hosts exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SilenceFlags(u64);

impl SilenceFlags {
    /// No channel flagged silent.
    pub const NONE: Self = Self(0);

    /// Flag the first `channels` channels silent.
    #[must_use]
    pub const fn all(channels: usize) -> Self {
        if channels >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << channels) - 1)
        }
    }

    /// Flag a single channel silent.
    #[must_use]
    pub const fn channel(index: usize) -> Self {
        if index >= 64 { Self(0) } else { Self(1u64 << index) }
    }

    /// Union of two masks.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when no channel is flagged.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when channel `index` is flagged silent.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < 64 && (self.0 >> index) & 1 == 1
    }

    /// True when every one of the first `channels` channels is flagged.
    /// A zero-channel bus is trivially covered.
    #[must_use]
    pub const fn covers(self, channels: usize) -> bool {
        let mask = Self::all(channels).0;
        self.0 & mask == mask
    }

    /// Raw bitmask, bit `i` = channel `i`.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Rebuild from a raw host bitmask.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }
}

/// Everything the processor sees for one process call.
///
/// `'h` covers the host-owned sample storage; `'a` covers the borrow of
/// the pair list and the event/automation slices for this call.
#[derive(Debug)]
pub struct AudioBlock<'a, 'h> {
    /// Main-bus channels, input/output paired. Empty means the host
    /// connected no input bus.
    pub channels: &'a mut [ChannelPair<'h>],
    /// Mono side-chain input when the aux bus is connected and active.
    pub side_chain: Option<&'a [f32]>,
    /// Samples per channel in this call.
    pub frames: usize,
    /// Host-provided silence mask for the main input bus.
    pub input_silence: SilenceFlags,
    /// Silence mask for the main output bus, written by the processor.
    pub output_silence: SilenceFlags,
    /// Parameter automation queues for this block.
    pub param_changes: &'a [ParamQueue<'a>],
    /// Note events for this block, in host order.
    pub events: &'a [NoteEvent],
}

impl<'a, 'h> AudioBlock<'a, 'h> {
    /// A block over `channels` with no side-chain, automation, or events.
    pub fn new(channels: &'a mut [ChannelPair<'h>], frames: usize) -> Self {
        Self {
            channels,
            side_chain: None,
            frames,
            input_silence: SilenceFlags::NONE,
            output_silence: SilenceFlags::NONE,
            param_changes: &[],
            events: &[],
        }
    }

    /// Attach a mono side-chain buffer.
    #[must_use]
    pub fn with_side_chain(mut self, side_chain: &'a [f32]) -> Self {
        self.side_chain = Some(side_chain);
        self
    }

    /// Attach parameter automation queues.
    #[must_use]
    pub fn with_param_changes(mut self, queues: &'a [ParamQueue<'a>]) -> Self {
        self.param_changes = queues;
        self
    }

    /// Attach note events.
    #[must_use]
    pub fn with_events(mut self, events: &'a [NoteEvent]) -> Self {
        self.events = events;
        self
    }

    /// Set the input silence mask.
    #[must_use]
    pub fn with_input_silence(mut self, silence: SilenceFlags) -> Self {
        self.input_silence = silence;
        self
    }

    /// Number of main channels in this call.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_exactly_that_many_channels() {
        let flags = SilenceFlags::all(2);
        assert!(flags.contains(0));
        assert!(flags.contains(1));
        assert!(!flags.contains(2));
        assert!(flags.covers(2));
        assert!(!flags.covers(3));
    }

    #[test]
    fn partial_mask_does_not_cover() {
        let flags = SilenceFlags::channel(0);
        assert!(!flags.covers(2));
        assert!(flags.covers(1));
        assert!(flags.covers(0));
    }

    #[test]
    fn union_combines_channels() {
        let flags = SilenceFlags::channel(0).union(SilenceFlags::channel(1));
        assert_eq!(flags, SilenceFlags::all(2));
        assert!(!flags.is_empty());
    }

    #[test]
    fn empty_mask_covers_zero_channels_only() {
        assert!(SilenceFlags::NONE.covers(0));
        assert!(!SilenceFlags::NONE.covers(1));
        assert!(SilenceFlags::NONE.is_empty());
    }

    #[test]
    fn wide_masks_saturate() {
        let flags = SilenceFlags::all(128);
        assert_eq!(flags.bits(), u64::MAX);
        assert!(flags.covers(64));
        assert_eq!(SilenceFlags::channel(128), SilenceFlags::NONE);
    }

    #[test]
    fn block_defaults_are_empty() {
        let mut pairs: [ChannelPair<'_>; 0] = [];
        let block = AudioBlock::new(&mut pairs, 0);
        assert_eq!(block.channel_count(), 0);
        assert!(block.side_chain.is_none());
        assert!(block.param_changes.is_empty());
        assert!(block.events.is_empty());
        assert_eq!(block.input_silence, SilenceFlags::NONE);
    }

    #[test]
    fn builders_attach_everything() {
        let input = [0.0f32; 4];
        let mut output = [0.0f32; 4];
        let aux = [1.0f32; 4];
        let events = [NoteEvent::Off { pitch: 0, channel: 0, velocity: 0.0 }];
        let mut pairs = [ChannelPair::Split { input: &input, output: &mut output }];

        let block = AudioBlock::new(&mut pairs, 4)
            .with_side_chain(&aux)
            .with_events(&events)
            .with_input_silence(SilenceFlags::all(1));

        assert_eq!(block.side_chain, Some(&aux[..]));
        assert_eq!(block.events.len(), 1);
        assert!(block.input_silence.covers(1));
    }
}
