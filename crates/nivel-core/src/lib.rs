//! Nivel Core - a side-chain gain plugin core
//!
//! This crate is the processing heart of a minimal audio-effect plugin: a
//! gain stage whose output level is modulated by a mono side-chain signal
//! and ducked by incoming note velocity. It models the host-facing world
//! a plugin lives in — paired channel buffers, parameter automation
//! queues, note events, silence flags, bus negotiation, and a 4-byte
//! persisted state record — without binding to any host ABI.
//!
//! # Core Abstractions
//!
//! ## Processing
//!
//! - [`GainStage`] - The gain stage: persisted gain, transient
//!   note-driven reduction, block-constant effective gain
//! - [`AudioBlock`] / [`ChannelPair`] - One process call's buffers,
//!   in-place aliasing made explicit
//! - [`SilenceFlags`] - Per-channel silence bitmask
//!
//! ## Host surface
//!
//! - [`AudioEffect`] - Object-safe trait for the host dispatch boundary
//!   (std only): lifecycle, setup, capability queries, bus negotiation,
//!   processing, state streams
//! - [`gain_param`] - Descriptor for the one automatable parameter
//! - [`encode_state`] / [`decode_state`] - The little-endian state record
//!
//! ## Utilities
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Level conversions backing the
//!   parameter's dB display
//!
//! # no_std Support
//!
//! Everything except the [`component`] module (stream-based state I/O) is
//! `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! nivel-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use nivel_core::{AudioBlock, ChannelPair, GainStage};
//!
//! let mut stage = GainStage::new();
//! let input = [1.0f32; 8];
//! let mut output = [0.0f32; 8];
//! let mut pairs = [ChannelPair::Split { input: &input[..], output: &mut output[..] }];
//! let mut block = AudioBlock::new(&mut pairs, 8);
//! stage.process(&mut block);
//!
//! // Default gain is 0.5
//! assert!((output[0] - 0.5).abs() < 1e-6);
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, locks, or I/O in the audio path
//! - **No dependencies on std** in the processing core; `libm` for math
//! - **Status codes, not panics**: the host boundary refuses, it never
//!   unwinds
//! - **Block-constant parameters**: the last automation point per block
//!   wins; no smoothing

#![cfg_attr(not(feature = "std"), no_std)]

pub mod block;
pub mod buses;
#[cfg(feature = "std")]
pub mod component;
pub mod event;
pub mod math;
pub mod param;
pub mod processor;
pub mod state;

// Re-export main types at crate root
pub use block::{AudioBlock, ChannelPair, SilenceFlags};
pub use buses::{BusInfo, BusKind, DEFAULT_BUSES, DEFAULT_MAIN_CHANNELS, SIDE_CHAIN_CHANNELS};
#[cfg(feature = "std")]
pub use component::{AudioEffect, ProcessSetup, SampleWidth, StateError};
pub use event::NoteEvent;
pub use math::{db_to_linear, linear_to_db};
pub use param::{GAIN_PARAM_ID, ParamDescriptor, ParamId, ParamPoint, ParamQueue, gain_param};
pub use processor::{DEFAULT_GAIN, GainStage};
pub use state::{STATE_SIZE, decode_state, encode_state};
