#![cfg(feature = "signal-gen")]

use nl_means::signal::{NoiseGenerator, NoisySine, SineGenerator};

#[test]
fn sine_respects_amplitude_and_period() {
    let sine = SineGenerator::new(3.0, 1.0);

    assert!(sine.sample(0.0).abs() < 1e-9);
    assert!((sine.sample(0.25) - 3.0).abs() < 1e-9);
    assert!((sine.sample(0.75) + 3.0).abs() < 1e-9);
    assert!(sine.sample(1.0).abs() < 1e-6);

    for n in 0..1000 {
        let value = sine.sample(n as f64 * 0.0137);
        assert!(value.abs() <= 3.0 + 1e-12);
    }
}

#[test]
fn noise_stays_within_symmetric_range() {
    let mut noise = NoiseGenerator::new(2.0, 42);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for _ in 0..10_000 {
        let value = noise.sample();
        assert!(value.abs() <= 2.0);
        min = min.min(value);
        max = max.max(value);
    }

    // Uniform draws should come close to both ends of the range
    assert!(min < -1.8);
    assert!(max > 1.8);
}

#[test]
fn noise_is_deterministic_per_seed() {
    let mut a = NoiseGenerator::new(1.0, 7);
    let mut b = NoiseGenerator::new(1.0, 7);
    let mut c = NoiseGenerator::new(1.0, 8);

    let from_a: Vec<f64> = (0..32).map(|_| a.sample()).collect();
    let from_b: Vec<f64> = (0..32).map(|_| b.sample()).collect();
    let from_c: Vec<f64> = (0..32).map(|_| c.sample()).collect();

    assert_eq!(from_a, from_b);
    assert_ne!(from_a, from_c);
}

#[test]
fn noisy_sine_is_bounded_by_amplitude_max() {
    let sine = SineGenerator::new(3.0, 1.0);
    let noise = NoiseGenerator::new(3.0, 1234);
    let mut source = NoisySine::new(sine, noise, 120.0);

    assert!((source.amplitude_max() - 6.0).abs() < 1e-12);

    for _ in 0..5_000 {
        let sample = source.next_sample();
        assert!(sample.abs() <= source.amplitude_max() + 1e-12);
    }
}
