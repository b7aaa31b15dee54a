use crate::config::{ConfigError, NlmConfig};
use crate::history::SampleHistory;
use crate::trace::{FilterTrace, NoTrace};

/// Streaming one-dimensional non-local-means filter.
///
/// Consumes one sample per call and emits one denoised sample at the same
/// rate. Each output is a weighted average over `window_size` candidate
/// positions in the recent history, where a candidate's weight is a Gaussian
/// similarity between its local template average and the current template
/// average.
///
/// Warm-up policy: until the history holds `full_size` real samples, input is
/// passed through unchanged; the first filtered output is produced on the
/// push that fills the window.
pub struct NlMeansFilter {
    config: NlmConfig,
    history: SampleHistory,
    kernel_scale: f64,
    center_index: usize,
    half_template: usize,
}

impl NlMeansFilter {
    pub fn new(config: NlmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            history: SampleHistory::new(config.full_size()),
            kernel_scale: config.kernel_scale(),
            center_index: config.center_index(),
            half_template: config.half_template(),
        })
    }

    pub fn config(&self) -> &NlmConfig {
        &self.config
    }

    /// True once enough samples have arrived for full filtering.
    pub fn is_warm(&self) -> bool {
        self.history.is_warm()
    }

    /// Consume one sample and produce one output sample.
    pub fn apply(&mut self, sample_in: f64) -> f64 {
        self.apply_traced(sample_in, &mut NoTrace)
    }

    /// Like [`apply`](Self::apply), reporting intermediate values through
    /// `trace`. Tracing never affects the result.
    pub fn apply_traced<T: FilterTrace>(&mut self, sample_in: f64, trace: &mut T) -> f64 {
        self.history.push(sample_in);

        if !self.history.is_warm() {
            return sample_in;
        }

        let center_average = self.local_average(self.center_index);

        let mut total_weight = 0.0;
        let mut weighted_sum = 0.0;

        // Walk candidate templates backward from the newest sample. The
        // candidate's local average only selects its weight; the value that
        // contributes to the output is the single sample at its center.
        for step in 0..self.config.window_size {
            let sample_index = self.history.capacity() - 1 - step - self.half_template;

            let local_average = self.local_average(sample_index);
            let diff = local_average - center_average;
            let weight = kernel_weight(self.kernel_scale, diff);

            trace.window_step(step, local_average, weight);

            total_weight += weight;
            weighted_sum += weight * self.history.get(sample_index);
        }

        // All weights underflowed to zero; fall back to the raw sample
        // rather than emitting NaN downstream.
        let sample_out = if total_weight == 0.0 {
            sample_in
        } else {
            weighted_sum / total_weight
        };

        trace.result(center_average, total_weight, sample_out);
        sample_out
    }

    /// Discard all history and start a fresh warm-up.
    pub fn reset(&mut self) {
        self.history.reset();
    }

    /// Mean of the template centered at `center`. Bounds are guaranteed by
    /// config validation.
    fn local_average(&self, center: usize) -> f64 {
        let mut sum = 0.0;
        for index in center - self.half_template..=center + self.half_template {
            sum += self.history.get(index);
        }
        sum / self.config.template_size as f64
    }
}

/// Gaussian similarity kernel: `exp(kernel_scale * diff²)` with
/// `kernel_scale = -1/h²`. Identical averages weigh 1, dissimilar ones decay
/// toward 0.
#[inline]
fn kernel_weight(kernel_scale: f64, diff: f64) -> f64 {
    libm::exp(kernel_scale * diff * diff)
}
