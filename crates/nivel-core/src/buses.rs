//! Default bus layout advertised by the component.
//!
//! Mirrors the buses declared at initialization: a stereo main pair, the
//! mono side-chain, and the event input the note handling listens on.
//! Channel counts here are the defaults; bus negotiation on the component
//! is authoritative once a host arranges buses.

/// Role of a bus in the component's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusKind {
    /// Primary audio input.
    MainInput,
    /// Auxiliary (side-chain) audio input.
    AuxInput,
    /// Primary audio output.
    MainOutput,
    /// Note event input.
    EventInput,
}

/// Static description of one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusInfo {
    /// Host-visible bus name.
    pub name: &'static str,
    /// Bus role.
    pub kind: BusKind,
    /// Channel count. For the event bus this is the event channel count.
    pub channels: usize,
}

/// Default main-bus channel count.
pub const DEFAULT_MAIN_CHANNELS: usize = 2;

/// Side-chain channel count; the aux bus is always mono.
pub const SIDE_CHAIN_CHANNELS: usize = 1;

/// The default layout: stereo main in/out, mono aux, one event channel.
pub const DEFAULT_BUSES: [BusInfo; 4] = [
    BusInfo { name: "Stereo In", kind: BusKind::MainInput, channels: DEFAULT_MAIN_CHANNELS },
    BusInfo { name: "Mono Aux In", kind: BusKind::AuxInput, channels: SIDE_CHAIN_CHANNELS },
    BusInfo { name: "Stereo Out", kind: BusKind::MainOutput, channels: DEFAULT_MAIN_CHANNELS },
    BusInfo { name: "Event In", kind: BusKind::EventInput, channels: 1 },
];
