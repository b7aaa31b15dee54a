#![no_std]

mod config;
mod filter;
pub mod history;
pub mod quantize;
#[cfg(feature = "signal-gen")]
pub mod signal;
pub mod trace;

pub use config::{ConfigError, NlmConfig, MAX_FULL_SIZE};
pub use filter::NlMeansFilter;
pub use history::SampleHistory;
pub use quantize::Quantizer;
pub use trace::{FilterTrace, NoTrace};
