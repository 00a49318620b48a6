//! Persisted state records on disk.
//!
//! A host keeps the component's state inside its own session file; these
//! helpers move the same record to and from a standalone file, which is
//! useful for inspecting and preparing states outside a host.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use nivel_core::AudioEffect;

use crate::Result;

/// Write `effect`'s persisted state record to `path`.
pub fn save_state_file<P: AsRef<Path>>(path: P, effect: &dyn AudioEffect) -> Result<()> {
    let mut writer = BufWriter::new(File::create(&path)?);
    effect.save_state(&mut writer)?;
    tracing::debug!(path = %path.as_ref().display(), "saved state file");
    Ok(())
}

/// Load a persisted state record from `path` into `effect`.
///
/// On failure the effect's previous state stays intact, per the state
/// contract.
pub fn load_state_file<P: AsRef<Path>>(path: P, effect: &mut dyn AudioEffect) -> Result<()> {
    let mut reader = BufReader::new(File::open(&path)?);
    effect.load_state(&mut reader)?;
    tracing::debug!(path = %path.as_ref().display(), "loaded state file");
    Ok(())
}
