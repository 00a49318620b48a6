//! The host-facing component boundary.
//!
//! Hosts drive a plugin through one polymorphic surface: lifecycle
//! (initialize, activate), processing setup, capability queries, bus
//! negotiation, block processing, and state streams. [`AudioEffect`]
//! captures that surface as an object-safe trait; [`GainStage`] is its
//! one implementation here.

use std::io::{Read, Write};

use crate::block::AudioBlock;
use crate::buses::{DEFAULT_MAIN_CHANNELS, SIDE_CHAIN_CHANNELS};
use crate::processor::GainStage;
use crate::state::{STATE_SIZE, decode_state, encode_state};

/// Per-sample float width a host may ask the component to run at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    /// 32-bit float samples. Supported.
    F32,
    /// 64-bit float samples. Not supported.
    F64,
}

/// The host's processing contract, delivered before activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSetup {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Upper bound on frames per process call.
    pub max_block_frames: usize,
    /// Sample width the host intends to use.
    pub sample_width: SampleWidth,
}

impl Default for ProcessSetup {
    /// 44.1 kHz, 32-bit samples, no block-size commitment.
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            max_block_frames: 0,
            sample_width: SampleWidth::F32,
        }
    }
}

/// Failure loading or saving persisted state.
#[derive(Debug)]
pub enum StateError {
    /// The stream ended before a full state record was transferred.
    Truncated,
    /// The underlying stream failed.
    Io(std::io::Error),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncated => write!(f, "state stream shorter than {STATE_SIZE} bytes"),
            Self::Io(err) => write!(f, "state stream error: {err}"),
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Truncated => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StateError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Truncated,
            _ => Self::Io(err),
        }
    }
}

/// The polymorphic surface a host drives a plugin component through.
///
/// Calls are single-threaded from the host's perspective: setup and state
/// calls never overlap a running [`process`](Self::process) call.
pub trait AudioEffect {
    /// Reset to construction defaults and restore the default bus layout.
    fn initialize(&mut self);

    /// Toggle processing readiness. Hosts do not call
    /// [`process`](Self::process) on an inactive component.
    fn set_active(&mut self, active: bool);

    /// Adopt a processing setup. Returns `false` — leaving the previous
    /// setup in place — when the setup is unsupportable, e.g. a 64-bit
    /// sample width.
    fn setup_processing(&mut self, setup: &ProcessSetup) -> bool;

    /// Whether blocks of the given sample width can be processed.
    fn supports_sample_width(&self, width: SampleWidth) -> bool;

    /// Negotiate audio bus channel counts; `inputs` and `outputs` list
    /// one count per bus. Returns `true` and adopts the layout when it is
    /// supported, otherwise leaves the current layout untouched.
    fn set_bus_arrangement(&mut self, inputs: &[usize], outputs: &[usize]) -> bool;

    /// Render one block. See [`GainStage::process`] for the semantics of
    /// the one implementation here.
    fn process(&mut self, block: &mut AudioBlock<'_, '_>);

    /// Write the persisted state record to `writer`.
    fn save_state(&self, writer: &mut dyn Write) -> Result<(), StateError>;

    /// Read a persisted state record from `reader`. On failure the
    /// previous state stays fully intact.
    fn load_state(&mut self, reader: &mut dyn Read) -> Result<(), StateError>;
}

impl AudioEffect for GainStage {
    fn initialize(&mut self) {
        self.reset();
        self.adopt_main_channels(DEFAULT_MAIN_CHANNELS);
        self.mark_active(false);
        #[cfg(feature = "tracing")]
        tracing::debug!("component initialized");
    }

    fn set_active(&mut self, active: bool) {
        self.mark_active(active);
        #[cfg(feature = "tracing")]
        tracing::debug!(active, "activation changed");
    }

    fn setup_processing(&mut self, setup: &ProcessSetup) -> bool {
        if !self.supports_sample_width(setup.sample_width) {
            #[cfg(feature = "tracing")]
            tracing::debug!(sample_width = ?setup.sample_width, "rejected processing setup");
            return false;
        }
        self.apply_setup(setup.sample_rate, setup.max_block_frames);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = setup.sample_rate,
            max_block_frames = setup.max_block_frames,
            "processing setup accepted"
        );
        true
    }

    fn supports_sample_width(&self, width: SampleWidth) -> bool {
        matches!(width, SampleWidth::F32)
    }

    fn set_bus_arrangement(&mut self, inputs: &[usize], outputs: &[usize]) -> bool {
        match (inputs, outputs) {
            ([main_in, aux_in], [main_out])
                if main_in == main_out && *aux_in == SIDE_CHAIN_CHANNELS =>
            {
                self.adopt_main_channels(*main_in);
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?inputs, ?outputs, "rejected bus arrangement");
                false
            }
        }
    }

    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        GainStage::process(self, block);
    }

    fn save_state(&self, writer: &mut dyn Write) -> Result<(), StateError> {
        writer.write_all(&encode_state(self.gain()))?;
        Ok(())
    }

    fn load_state(&mut self, reader: &mut dyn Read) -> Result<(), StateError> {
        let mut record = [0u8; STATE_SIZE];
        reader.read_exact(&mut record)?;
        let gain = decode_state(&record).ok_or(StateError::Truncated)?;
        self.set_gain(gain);
        #[cfg(feature = "tracing")]
        tracing::debug!(gain, "state loaded");
        Ok(())
    }
}
