//! Persisted state file inspection and creation.

use clap::{Args, Subcommand};
use nivel_core::{GainStage, linear_to_db};
use nivel_io::{load_state_file, save_state_file};
use std::path::PathBuf;

#[derive(Args)]
pub struct StateArgs {
    #[command(subcommand)]
    command: StateCommand,
}

#[derive(Subcommand)]
enum StateCommand {
    /// Decode a state file and print the gain it holds
    Show {
        /// State file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Write a state file holding the given gain
    Write {
        /// State file to create
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Gain value in [0, 1]
        #[arg(long)]
        gain: f32,
    },
}

pub fn run(args: StateArgs) -> anyhow::Result<()> {
    match args.command {
        StateCommand::Show { file } => {
            let mut stage = GainStage::new();
            load_state_file(&file, &mut stage)?;
            println!(
                "{}: gain {:.6} ({:.1} dB)",
                file.display(),
                stage.gain(),
                linear_to_db(stage.gain())
            );
        }
        StateCommand::Write { file, gain } => {
            anyhow::ensure!((0.0..=1.0).contains(&gain), "gain {} out of [0, 1]", gain);
            let mut stage = GainStage::new();
            stage.set_gain(gain);
            save_state_file(&file, &stage)?;
            println!("Wrote {} (gain {:.6})", file.display(), gain);
        }
    }
    Ok(())
}
