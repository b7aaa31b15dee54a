//! Discrete output mapping for a narrow serial channel.
//!
//! Maps real samples linearly onto `[0, 1023]` so they can be written as one
//! small integer per line.

use num_traits::AsPrimitive;

/// Number of discrete output levels.
pub const QUANT_STEPS: u16 = 1024;

/// Linear quantizer for samples bounded by a known amplitude.
///
/// `-amplitude_max` maps to 0, `+amplitude_max` to 1023, and inputs are
/// clamped to that range first, so the output saturates at the endpoints
/// instead of wrapping.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    amplitude_max: f64,
}

impl Quantizer {
    /// Create a quantizer for signals within `[-amplitude_max, amplitude_max]`.
    ///
    /// amplitude_max must be finite and > 0
    pub fn new(amplitude_max: f64) -> Self {
        debug_assert!(
            amplitude_max.is_finite() && amplitude_max > 0.0,
            "amplitude_max must be finite and positive, got {}",
            amplitude_max
        );
        Self { amplitude_max }
    }

    pub fn amplitude_max(&self) -> f64 {
        self.amplitude_max
    }

    /// Quantize one sample into the discrete range.
    ///
    /// The output type is chosen by the caller; any integer (or float) type
    /// wide enough for 1023 works.
    pub fn to_discrete<TOut>(&self, value: f64) -> TOut
    where
        TOut: Copy + 'static,
        f64: AsPrimitive<TOut>,
    {
        let clamped = value.clamp(-self.amplitude_max, self.amplitude_max);

        let normalized = (clamped + self.amplitude_max) * 0.5 / self.amplitude_max;
        let discrete = normalized * (QUANT_STEPS - 1) as f64;
        discrete.as_()
    }
}
