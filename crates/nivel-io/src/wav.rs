//! Planar WAV file reading and writing.
//!
//! The component is bus-shaped: channels are separate buffers. Files are
//! therefore exchanged as [`WavData`] — one `Vec<f32>` per channel —
//! rather than interleaved frames.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavWriter};

use crate::{Error, Result};

/// Planar audio: one buffer per channel, all the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct WavData {
    /// One buffer per channel.
    pub channels: Vec<Vec<f32>>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavData {
    /// Frames per channel (0 when there are no channels).
    #[must_use]
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Number of channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Read a WAV file into planar f32 buffers.
///
/// Integer files are normalized by `2^(bits-1)`; float files are read
/// as-is. All channels are kept — no mixdown.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavData> {
    let reader = WavReader::open(&path)?;
    let spec = reader.spec();
    let channel_count = spec.channels as usize;
    if channel_count == 0 {
        return Err(Error::UnsupportedFormat("file reports zero channels".into()));
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frames); channel_count];
    for frame in interleaved.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    tracing::debug!(
        path = %path.as_ref().display(),
        channels = channel_count,
        frames,
        sample_rate = spec.sample_rate,
        "read WAV"
    );

    Ok(WavData { channels, sample_rate: spec.sample_rate })
}

/// Read only the first channel of a WAV file.
///
/// Side-chain signals are mono by contract; extra channels in the file
/// are dropped.
pub fn read_wav_mono<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let mut data = read_wav(path)?;
    Ok(data.channels.swap_remove(0))
}

/// Write planar buffers to a 32-bit float WAV file.
///
/// All channels must have equal length.
pub fn write_wav<P: AsRef<Path>>(path: P, data: &WavData) -> Result<()> {
    let frames = data.frames();
    if data.channels.iter().any(|channel| channel.len() != frames) {
        return Err(Error::ShapeMismatch("channel lengths differ".into()));
    }
    if data.channel_count() == 0 {
        return Err(Error::ShapeMismatch("no channels to write".into()));
    }
    let channels = u16::try_from(data.channel_count())
        .map_err(|_| Error::ShapeMismatch("too many channels for WAV".into()))?;

    let spec = hound::WavSpec {
        channels,
        sample_rate: data.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&path, spec)?;
    for frame in 0..frames {
        for channel in &data.channels {
            writer.write_sample(channel[frame])?;
        }
    }
    writer.finalize()?;

    tracing::debug!(path = %path.as_ref().display(), channels, frames, "wrote WAV");
    Ok(())
}
