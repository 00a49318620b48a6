//! The gain stage: one persisted gain, one transient note-driven
//! reduction, optional mono side-chain modulation.

use crate::block::{AudioBlock, ChannelPair};
use crate::buses::DEFAULT_MAIN_CHANNELS;
use crate::event::NoteEvent;
use crate::param::GAIN_PARAM_ID;

/// Default normalized gain, matching the parameter default.
pub const DEFAULT_GAIN: f32 = 0.5;

/// A gain stage with mono side-chain modulation and note-driven ducking.
///
/// Each block the stage computes one effective gain,
/// `max(0, gain − gain_reduction)`, and scales every main-bus sample by
/// it — multiplied sample-wise with the mono side-chain when one is
/// connected. The effective gain is deliberately block-constant: no
/// smoothing, changes land at block boundaries.
///
/// The audio path allocates nothing, takes no locks, and never panics on
/// short host buffers (it processes what is there).
#[derive(Debug, Clone)]
pub struct GainStage {
    /// Persisted gain factor, kept in [0, 1].
    gain: f32,
    /// Transient note-driven reduction, cleared by note-off.
    gain_reduction: f32,
    /// Negotiated main-bus channel count.
    main_channels: usize,
    /// Sample rate from the accepted processing setup.
    sample_rate: f64,
    /// Block-size ceiling from the accepted setup; 0 until a host commits.
    max_block_frames: usize,
    /// Host activation state.
    active: bool,
}

impl Default for GainStage {
    fn default() -> Self {
        Self::new()
    }
}

impl GainStage {
    /// A stage in its default state: gain 0.5, no reduction, stereo main
    /// bus, inactive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gain: DEFAULT_GAIN,
            gain_reduction: 0.0,
            main_channels: DEFAULT_MAIN_CHANNELS,
            sample_rate: 44_100.0,
            max_block_frames: 0,
            active: false,
        }
    }

    /// Current persisted gain.
    #[must_use]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Set the gain directly, clamped to [0, 1]. Host automation flows
    /// through [`process`](Self::process) instead.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain.clamp(0.0, 1.0);
    }

    /// Current transient reduction.
    #[must_use]
    pub fn gain_reduction(&self) -> f32 {
        self.gain_reduction
    }

    /// Gain applied to the next block: `max(0, gain − gain_reduction)`.
    #[must_use]
    pub fn effective_gain(&self) -> f32 {
        (self.gain - self.gain_reduction).max(0.0)
    }

    /// Negotiated main-bus channel count.
    #[must_use]
    pub fn main_channels(&self) -> usize {
        self.main_channels
    }

    /// Sample rate from the accepted processing setup.
    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Block-size ceiling from the accepted setup; 0 until a host commits.
    #[must_use]
    pub fn max_block_frames(&self) -> usize {
        self.max_block_frames
    }

    /// Whether the host has activated the component.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restore default processing state: default gain, no reduction.
    /// Setup values (sample rate, block ceiling) survive a reset.
    pub fn reset(&mut self) {
        self.gain = DEFAULT_GAIN;
        self.gain_reduction = 0.0;
    }

    pub(crate) fn apply_setup(&mut self, sample_rate: f64, max_block_frames: usize) {
        self.sample_rate = sample_rate;
        self.max_block_frames = max_block_frames;
    }

    pub(crate) fn adopt_main_channels(&mut self, channels: usize) {
        self.main_channels = channels;
    }

    pub(crate) fn mark_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Render one block.
    ///
    /// Order matters and matches the host contract:
    ///
    /// 1. Parameter queues drain first; for the gain id the LAST point
    ///    wins for the whole block. Unknown ids and empty queues are
    ///    skipped.
    /// 2. Note events apply in list order: on sets the reduction to the
    ///    velocity, off clears it.
    /// 3. A block with no channels or zero frames does no further work.
    /// 4. An input silence mask covering every channel propagates to the
    ///    output mask, zero-fills distinct output buffers, leaves
    ///    in-place buffers untouched, and skips rendering.
    /// 5. Otherwise one effective gain is computed and applied, with the
    ///    mono side-chain (when present) multiplied in sample-wise and
    ///    broadcast across channels.
    pub fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        for queue in block.param_changes {
            if queue.id == GAIN_PARAM_ID {
                if let Some(value) = queue.last_value() {
                    self.gain = value.clamp(0.0, 1.0);
                }
            }
        }

        for event in block.events {
            match *event {
                NoteEvent::On { velocity, .. } => self.gain_reduction = velocity,
                NoteEvent::Off { .. } => self.gain_reduction = 0.0,
            }
        }

        if block.channels.is_empty() || block.frames == 0 {
            return;
        }

        let frames = block.frames;
        debug_assert!(
            block.channels.iter().all(|pair| match pair {
                ChannelPair::Split { input, output } =>
                    input.len() >= frames && output.len() >= frames,
                ChannelPair::InPlace(buffer) => buffer.len() >= frames,
            }),
            "channel buffers shorter than the block frame count"
        );

        if block.input_silence.covers(block.channels.len()) {
            block.output_silence = block.input_silence;
            for pair in block.channels.iter_mut() {
                if let ChannelPair::Split { output, .. } = pair {
                    for sample in output.iter_mut().take(frames) {
                        *sample = 0.0;
                    }
                }
            }
            return;
        }

        let gain = self.effective_gain();
        match block.side_chain {
            Some(aux) => {
                debug_assert!(aux.len() >= frames, "side-chain shorter than the block");
                for pair in block.channels.iter_mut() {
                    match pair {
                        ChannelPair::Split { input, output } => {
                            for ((out, &dry), &sc) in
                                output.iter_mut().zip(input.iter()).zip(aux.iter()).take(frames)
                            {
                                *out = dry * sc * gain;
                            }
                        }
                        ChannelPair::InPlace(buffer) => {
                            for (sample, &sc) in buffer.iter_mut().zip(aux.iter()).take(frames) {
                                *sample *= sc * gain;
                            }
                        }
                    }
                }
            }
            None => {
                for pair in block.channels.iter_mut() {
                    match pair {
                        ChannelPair::Split { input, output } => {
                            for (out, &dry) in output.iter_mut().zip(input.iter()).take(frames) {
                                *out = dry * gain;
                            }
                        }
                        ChannelPair::InPlace(buffer) => {
                            for sample in buffer.iter_mut().take(frames) {
                                *sample *= gain;
                            }
                        }
                    }
                }
            }
        }
    }
}
