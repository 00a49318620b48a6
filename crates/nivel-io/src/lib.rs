//! WAV file I/O and an offline host driver for the nivel gain stage.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] / [`write_wav`] working in planar
//!   (per-channel) buffers, the shape the component's buses use
//! - **Offline hosting**: [`OfflineHost`] drives any
//!   [`AudioEffect`](nivel_core::AudioEffect) block by block, performing
//!   the same handshake and event delivery a plugin host does
//! - **State files**: [`load_state_file`] / [`save_state_file`] move the
//!   component's persisted record to and from disk
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nivel_core::GainStage;
//! use nivel_io::{read_wav, read_wav_mono, write_wav, EventSchedule, OfflineHost};
//!
//! let input = read_wav("input.wav")?;
//! let side = read_wav_mono("side.wav")?;
//!
//! let mut stage = GainStage::new();
//! let rendered = OfflineHost::new().run(
//!     &mut stage,
//!     &input,
//!     Some(&side),
//!     &EventSchedule::default(),
//!     |_, _| {},
//! )?;
//!
//! write_wav("output.wav", &rendered)?;
//! ```

mod host;
mod persist;
mod wav;

pub use host::{DEFAULT_BLOCK_FRAMES, EventSchedule, OfflineHost};
pub use persist::{load_state_file, save_state_file};
pub use wav::{WavData, read_wav, read_wav_mono, write_wav};

use nivel_core::StateError;

/// Error types for audio I/O and offline hosting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample format or setup the component or reader does not handle.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Buffers or buses with inconsistent shapes.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// State record save/load failure.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
