//! Offline host driver.
//!
//! Feeds planar audio through an [`AudioEffect`] block by block, the way
//! a plugin host does: handshake first, then per-block delivery of
//! automation points and note events rebased into each block.

use nivel_core::{
    AudioBlock, AudioEffect, ChannelPair, NoteEvent, ParamId, ParamPoint, ParamQueue,
    ProcessSetup, SIDE_CHAIN_CHANNELS, SampleWidth,
};

use crate::wav::WavData;
use crate::{Error, Result};

/// Default frames per process call.
pub const DEFAULT_BLOCK_FRAMES: usize = 512;

/// Scheduled automation and note events, in absolute frames.
///
/// The driver rebases entries into block-relative offsets as it renders.
/// Entries at or past the end of the input never reach the component.
#[derive(Debug, Clone, Default)]
pub struct EventSchedule {
    params: Vec<(usize, ParamId, f32)>,
    notes: Vec<(usize, NoteEvent)>,
}

impl EventSchedule {
    /// Schedule a parameter point at an absolute frame.
    pub fn param(&mut self, frame: usize, id: ParamId, value: f32) -> &mut Self {
        self.params.push((frame, id, value));
        self
    }

    /// Schedule a note event at an absolute frame.
    pub fn note(&mut self, frame: usize, event: NoteEvent) -> &mut Self {
        self.notes.push((frame, event));
        self
    }

    /// True when nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.notes.is_empty()
    }

    /// Automation queues for the block starting at `start`, offsets
    /// rebased block-relative, one queue per parameter id.
    fn queues_for(&self, start: usize, frames: usize) -> Vec<(ParamId, Vec<ParamPoint>)> {
        let mut window: Vec<_> = self
            .params
            .iter()
            .filter(|(frame, ..)| *frame >= start && *frame < start + frames)
            .collect();
        window.sort_by_key(|(frame, ..)| *frame);

        let mut queues: Vec<(ParamId, Vec<ParamPoint>)> = Vec::new();
        for (frame, id, value) in window {
            let point = ParamPoint { offset: (frame - start) as u32, value: *value };
            match queues.iter_mut().find(|(queue_id, _)| queue_id == id) {
                Some((_, points)) => points.push(point),
                None => queues.push((*id, vec![point])),
            }
        }
        queues
    }

    /// Note events for the block starting at `start`, in frame order;
    /// entries on the same frame keep their scheduling order.
    fn notes_for(&self, start: usize, frames: usize) -> Vec<NoteEvent> {
        let mut window: Vec<_> = self
            .notes
            .iter()
            .filter(|(frame, _)| *frame >= start && *frame < start + frames)
            .collect();
        window.sort_by_key(|(frame, _)| *frame);
        window.into_iter().map(|(_, event)| *event).collect()
    }
}

/// Drives an [`AudioEffect`] over planar buffers in fixed-size blocks.
///
/// The driver performs the same handshake a plugin host does — sample
/// width query, processing setup, bus arrangement for the actual channel
/// shape, activation — then renders block by block.
#[derive(Debug, Clone)]
pub struct OfflineHost {
    block_frames: usize,
}

impl Default for OfflineHost {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineHost {
    /// A host with the default block size.
    #[must_use]
    pub fn new() -> Self {
        Self { block_frames: DEFAULT_BLOCK_FRAMES }
    }

    /// Set the per-call block size (minimum 1 frame).
    #[must_use]
    pub fn with_block_frames(mut self, frames: usize) -> Self {
        self.block_frames = frames.max(1);
        self
    }

    /// Configured frames per process call.
    #[must_use]
    pub fn block_frames(&self) -> usize {
        self.block_frames
    }

    /// Render `input` through `effect`, delivering scheduled events.
    ///
    /// `progress` is called after every block with completed and total
    /// block counts. The side-chain, when present, must cover at least
    /// as many frames as the input.
    pub fn run(
        &self,
        effect: &mut dyn AudioEffect,
        input: &WavData,
        side_chain: Option<&[f32]>,
        schedule: &EventSchedule,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<WavData> {
        let frames = input.frames();
        let channel_count = input.channel_count();

        if let Some(aux) = side_chain {
            if aux.len() < frames {
                return Err(Error::ShapeMismatch(format!(
                    "side-chain has {} frames, input has {frames}",
                    aux.len()
                )));
            }
        }

        if !effect.supports_sample_width(SampleWidth::F32) {
            return Err(Error::UnsupportedFormat(
                "component does not process 32-bit samples".into(),
            ));
        }
        if !effect.setup_processing(&ProcessSetup {
            sample_rate: f64::from(input.sample_rate),
            max_block_frames: self.block_frames,
            sample_width: SampleWidth::F32,
        }) {
            return Err(Error::UnsupportedFormat(
                "component rejected the processing setup".into(),
            ));
        }
        if channel_count > 0 {
            let inputs = [channel_count, SIDE_CHAIN_CHANNELS];
            let outputs = [channel_count];
            if !effect.set_bus_arrangement(&inputs, &outputs) {
                return Err(Error::ShapeMismatch(format!(
                    "component rejected a {channel_count}-channel bus arrangement"
                )));
            }
        }
        effect.set_active(true);

        let mut output: Vec<Vec<f32>> = vec![vec![0.0; frames]; channel_count];
        let total_blocks = frames.div_ceil(self.block_frames);

        let mut start = 0;
        let mut done = 0;
        while start < frames {
            let len = self.block_frames.min(frames - start);

            let queue_storage = schedule.queues_for(start, len);
            let queues: Vec<ParamQueue<'_>> = queue_storage
                .iter()
                .map(|(id, points)| ParamQueue { id: *id, points })
                .collect();
            let events = schedule.notes_for(start, len);

            let mut pairs: Vec<ChannelPair<'_>> = input
                .channels
                .iter()
                .zip(output.iter_mut())
                .map(|(dry, wet)| ChannelPair::Split {
                    input: &dry[start..start + len],
                    output: &mut wet[start..start + len],
                })
                .collect();

            let mut block = AudioBlock::new(&mut pairs, len)
                .with_param_changes(&queues[..])
                .with_events(&events[..]);
            if let Some(aux) = side_chain {
                block = block.with_side_chain(&aux[start..start + len]);
            }
            effect.process(&mut block);

            start += len;
            done += 1;
            progress(done, total_blocks);
        }

        effect.set_active(false);
        tracing::debug!(
            blocks = done,
            frames,
            channels = channel_count,
            "offline render complete"
        );

        Ok(WavData { channels: output, sample_rate: input.sample_rate })
    }
}
