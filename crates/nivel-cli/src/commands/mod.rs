//! CLI command implementations.

pub mod info;
pub mod params;
pub mod process;
pub mod state;
