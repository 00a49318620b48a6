//! Level conversions between linear gain factors and decibels.
//!
//! The gain parameter lives in linear [0, 1]; these helpers back its "dB"
//! display unit. Allocation-free and `no_std`-friendly via `libm`.

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use nivel_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Inputs at or below zero are floored to keep the result finite.
///
/// # Example
/// ```rust
/// use nivel_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(x) = 20 * ln(x) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_round_trip() {
        for db in [-24.0f32, -6.0, 0.0, 6.0, 12.0] {
            let back = linear_to_db(db_to_linear(db));
            assert!((back - db).abs() < 0.001, "{db} dB round-tripped to {back}");
        }
    }

    #[test]
    fn unity_is_zero_db() {
        assert!(linear_to_db(1.0).abs() < 0.001);
        assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn zero_gain_stays_finite() {
        assert!(linear_to_db(0.0).is_finite());
        assert!(linear_to_db(-1.0).is_finite());
    }

    #[test]
    fn half_gain_is_about_minus_six_db() {
        assert!((linear_to_db(0.5) + 6.02).abs() < 0.01);
    }
}
