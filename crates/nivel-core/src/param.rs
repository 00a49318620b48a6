//! Parameter surface: stable identity, per-block automation queues, and
//! the descriptor for the one automatable parameter.

/// Stable parameter identifier, unique within the component.
///
/// Ids are part of the automation and persistence contract with the host
/// and never change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// Identifier of the gain parameter.
pub const GAIN_PARAM_ID: ParamId = ParamId(102);

/// One automation point inside a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamPoint {
    /// Frame offset within the block. Carried for hosts that sample-align
    /// automation; the gain stage applies the last point to the whole
    /// block.
    pub offset: u32,
    /// Normalized parameter value at that point, [0, 1].
    pub value: f32,
}

/// All automation points for one parameter in one block.
#[derive(Debug, Clone, Copy)]
pub struct ParamQueue<'a> {
    /// Which parameter the points belong to.
    pub id: ParamId,
    /// Points in ascending frame order.
    pub points: &'a [ParamPoint],
}

impl ParamQueue<'_> {
    /// Value of the final point, if the queue has any.
    ///
    /// Block-rate semantics: the last point wins for the entire block.
    #[must_use]
    pub fn last_value(&self) -> Option<f32> {
        self.points.last().map(|point| point.value)
    }
}

/// Static description of one automatable parameter.
///
/// The surface is normalized: hosts exchange values in [0, 1] and the
/// unit label only governs display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Stable identifier.
    pub id: ParamId,
    /// Host-visible display name.
    pub name: &'static str,
    /// Display unit label.
    pub unit: &'static str,
    /// Default normalized value.
    pub default: f32,
    /// Whether the host may automate the parameter.
    pub automatable: bool,
}

impl ParamDescriptor {
    /// Clamp a host-provided value into the normalized range.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(0.0, 1.0)
    }
}

/// The gain parameter: a linear gain factor in [0, 1], displayed in dB,
/// automatable, default 0.5.
#[must_use]
pub const fn gain_param() -> ParamDescriptor {
    ParamDescriptor {
        id: GAIN_PARAM_ID,
        name: "Gain",
        unit: "dB",
        default: 0.5,
        automatable: true,
    }
}
