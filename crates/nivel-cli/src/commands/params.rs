//! Parameter listing command.

use clap::Args;
use nivel_core::{gain_param, linear_to_db};

#[derive(Args)]
pub struct ParamsArgs {}

pub fn run(_args: ParamsArgs) -> anyhow::Result<()> {
    let params = [gain_param()];

    println!(
        "  {:>5}  {:12}  {:6}  {:10}  {:10}  {}",
        "Id", "Name", "Unit", "Default", "Display", "Automatable"
    );
    println!(
        "  {:>5}  {:12}  {:6}  {:10}  {:10}  {}",
        "--", "----", "----", "-------", "-------", "-----------"
    );
    for param in params {
        println!(
            "  {:>5}  {:12}  {:6}  {:<10.2}  {:>7.1} dB  {}",
            param.id.0,
            param.name,
            param.unit,
            param.default,
            linear_to_db(param.default),
            if param.automatable { "yes" } else { "no" }
        );
    }

    Ok(())
}
