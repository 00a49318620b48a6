//! Component capability report.

use clap::Args;
use nivel_core::{AudioEffect, BusKind, DEFAULT_BUSES, GainStage, STATE_SIZE, SampleWidth};

#[derive(Args)]
pub struct InfoArgs {}

fn kind_label(kind: BusKind) -> &'static str {
    match kind {
        BusKind::MainInput => "audio in",
        BusKind::AuxInput => "aux in",
        BusKind::MainOutput => "audio out",
        BusKind::EventInput => "event in",
    }
}

pub fn run(_args: InfoArgs) -> anyhow::Result<()> {
    let stage = GainStage::new();

    println!("Buses:");
    println!("  {:14}  {:10}  {}", "Name", "Kind", "Channels");
    println!("  {:14}  {:10}  {}", "----", "----", "--------");
    for bus in DEFAULT_BUSES {
        println!("  {:14}  {:10}  {}", bus.name, kind_label(bus.kind), bus.channels);
    }

    println!("\nSample widths:");
    for (width, label) in [(SampleWidth::F32, "32-bit float"), (SampleWidth::F64, "64-bit float")] {
        let supported = if stage.supports_sample_width(width) { "yes" } else { "no" };
        println!("  {:14}  {}", label, supported);
    }

    println!("\nState record: {STATE_SIZE} bytes (little-endian f32 gain)");

    Ok(())
}
