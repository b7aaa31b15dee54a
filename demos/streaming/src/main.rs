//! Host-side rendition of the firmware control loop.
//!
//! Generates a noisy sine, denoises it sample by sample, and prints the
//! quantized stream the way the device would write it to its serial channel:
//! one integer per line. A short comparison table first shows what the
//! filter does to individual readings.

use nl_means::signal::{NoiseGenerator, NoisySine, SineGenerator};
use nl_means::{NlMeansFilter, NlmConfig, Quantizer};

const SINE_AMPLITUDE: f64 = 3.0;
const SINE_FREQUENCY_HZ: f64 = 1.0;
const NOISE_AMPLITUDE: f64 = 3.0;
const SAMPLE_RATE_HZ: f64 = 120.0;
const NOISE_SEED: u64 = 0x5EED;

fn main() {
    let config = NlmConfig::default();
    let mut filter = NlMeansFilter::new(config).expect("Valid config");

    let sine = SineGenerator::new(SINE_AMPLITUDE, SINE_FREQUENCY_HZ);
    let noise = NoiseGenerator::new(NOISE_AMPLITUDE, NOISE_SEED);
    let mut source = NoisySine::new(sine, noise, SAMPLE_RATE_HZ);

    let quantizer = Quantizer::new(source.amplitude_max());

    println!("=== nl-means streaming demo ===");
    println!(
        "window = {}, template = {}, h = {}, warm-up = {} samples\n",
        config.window_size,
        config.template_size,
        config.h,
        config.full_size()
    );

    // Warm the filter up before showing the comparison table
    for _ in 0..config.full_size() {
        filter.apply(source.next_sample());
    }

    println!("Raw      → Filtered (quantized raw → quantized filtered)");
    for _ in 0..10 {
        let raw = source.next_sample();
        let filtered = filter.apply(raw);
        let raw_q: u16 = quantizer.to_discrete(raw);
        let out_q: u16 = quantizer.to_discrete(filtered);
        println!("{:8.4} → {:8.4} ({:4} → {:4})", raw, filtered, raw_q, out_q);
    }

    // The serial stream itself, as the device emits it
    println!("\n--- quantized output stream ---");
    for _ in 0..240 {
        let filtered = filter.apply(source.next_sample());
        let discrete: u16 = quantizer.to_discrete(filtered);
        println!("{}", discrete);
    }
}
