//! Synthetic test signal: a sine wave perturbed by uniform noise.
//!
//! Stands in for a real sensor channel when exercising the filter on a host
//! or bench setup. The firmware seeds its generator from floating analog
//! pins; here the seed is an explicit parameter so runs are reproducible.

use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

const TWO_PI: f64 = core::f64::consts::TAU;

/// Deterministic sine source.
#[derive(Debug, Clone, Copy)]
pub struct SineGenerator {
    amplitude: f64,
    frequency_hz: f64,
}

impl SineGenerator {
    pub fn new(amplitude: f64, frequency_hz: f64) -> Self {
        Self {
            amplitude,
            frequency_hz,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sample the wave at `time_s` seconds.
    pub fn sample(&self, time_s: f64) -> f64 {
        libm::sin(TWO_PI * self.frequency_hz * time_s) * self.amplitude
    }
}

/// Uniform noise over the symmetric range `[-amplitude, amplitude]`.
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    amplitude: f64,
    rng: XorShiftRng,
}

impl NoiseGenerator {
    pub fn new(amplitude: f64, seed: u64) -> Self {
        Self {
            amplitude,
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Draw one noise sample.
    pub fn sample(&mut self) -> f64 {
        let uniform = self.rng.next_u32() as f64 / u32::MAX as f64;
        self.amplitude * (2.0 * uniform - 1.0)
    }
}

/// Noisy sine source producing one sample per call at a fixed sample rate.
///
/// Matches the shape of the firmware input loop: each call advances time by
/// one sample period and returns sine plus noise.
#[derive(Debug, Clone)]
pub struct NoisySine {
    sine: SineGenerator,
    noise: NoiseGenerator,
    sample_period_s: f64,
    tick: u64,
}

impl NoisySine {
    /// sample_rate_hz must be > 0
    pub fn new(sine: SineGenerator, noise: NoiseGenerator, sample_rate_hz: f64) -> Self {
        debug_assert!(sample_rate_hz > 0.0);
        Self {
            sine,
            noise,
            sample_period_s: 1.0 / sample_rate_hz,
            tick: 0,
        }
    }

    /// Largest magnitude this source can emit. Feed to the quantizer.
    pub fn amplitude_max(&self) -> f64 {
        self.sine.amplitude() + self.noise.amplitude()
    }

    /// Produce the next sample.
    pub fn next_sample(&mut self) -> f64 {
        let time_s = self.tick as f64 * self.sample_period_s;
        self.tick += 1;
        self.sine.sample(time_s) + self.noise.sample()
    }
}
