//! File-based processing command: render a WAV through the gain stage.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use nivel_core::{GAIN_PARAM_ID, GainStage, NoteEvent, linear_to_db};
use nivel_io::{EventSchedule, OfflineHost, WavData, read_wav, read_wav_mono, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Mono side-chain WAV file (first channel is used)
    #[arg(short, long)]
    sidechain: Option<PathBuf>,

    /// Gain value in [0, 1], applied as an automation point at frame 0
    #[arg(short, long)]
    gain: Option<f32>,

    /// Note-on event as FRAME:VELOCITY (e.g., "22050:0.8")
    #[arg(long, value_parser = parse_note_on, number_of_values = 1)]
    note_on: Vec<(usize, f32)>,

    /// Note-off event at FRAME
    #[arg(long, number_of_values = 1)]
    note_off: Vec<usize>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,
}

fn parse_note_on(s: &str) -> Result<(usize, f32), String> {
    let parts: Vec<&str> = s.splitn(2, ':').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid note-on format: '{}' (expected FRAME:VELOCITY)", s));
    }
    let frame = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("Invalid frame: '{}'", parts[0]))?;
    let velocity = parts[1]
        .parse::<f32>()
        .map_err(|_| format!("Invalid velocity: '{}'", parts[1]))?;
    if !(0.0..=1.0).contains(&velocity) {
        return Err(format!("Velocity {} out of [0, 1]", velocity));
    }
    Ok((frame, velocity))
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let input = read_wav(&args.input)?;
    println!(
        "  {} channels, {} frames, {} Hz, {:.2}s",
        input.channel_count(),
        input.frames(),
        input.sample_rate,
        input.frames() as f32 / input.sample_rate as f32
    );

    let side_chain = match &args.sidechain {
        Some(path) => {
            println!("Reading side-chain {}...", path.display());
            Some(read_wav_mono(path)?)
        }
        None => None,
    };

    let mut schedule = EventSchedule::default();
    if let Some(gain) = args.gain {
        anyhow::ensure!((0.0..=1.0).contains(&gain), "gain {} out of [0, 1]", gain);
        schedule.param(0, GAIN_PARAM_ID, gain);
    }
    for (frame, velocity) in &args.note_on {
        schedule.note(
            *frame,
            NoteEvent::On { pitch: 60, channel: 0, velocity: *velocity },
        );
    }
    for frame in &args.note_off {
        schedule.note(
            *frame,
            NoteEvent::Off { pitch: 60, channel: 0, velocity: 0.0 },
        );
    }

    let mut stage = GainStage::new();
    let host = OfflineHost::new().with_block_frames(args.block_size);
    let total_blocks = input.frames().div_ceil(host.block_frames()) as u64;

    println!("Processing...");
    let pb = ProgressBar::new(total_blocks);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let output = host.run(&mut stage, &input, side_chain.as_deref(), &schedule, |done, _| {
        pb.set_position(done as u64);
    })?;
    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&input)),
        linear_to_db(peak(&input))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&output)),
        linear_to_db(peak(&output))
    );
    println!(
        "  Final gain: {:.3} ({:.1} dB)",
        stage.gain(),
        linear_to_db(stage.gain())
    );

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output)?;
    println!("Done!");

    Ok(())
}

fn rms(data: &WavData) -> f32 {
    let count: usize = data.channels.iter().map(Vec::len).sum();
    if count == 0 {
        return 0.0;
    }
    let sum: f32 = data
        .channels
        .iter()
        .flat_map(|channel| channel.iter())
        .map(|s| s * s)
        .sum();
    (sum / count as f32).sqrt()
}

fn peak(data: &WavData) -> f32 {
    data.channels
        .iter()
        .flat_map(|channel| channel.iter())
        .map(|s| s.abs())
        .fold(0.0, f32::max)
}
