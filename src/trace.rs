//! Observability hook for filter internals.
//!
//! Replaces conditional debug printing with an injectable callback: the
//! engine reports its intermediate values through a [`FilterTrace`] and never
//! changes its numeric behavior based on who is listening.

/// Receiver for per-sample filter internals.
///
/// All methods default to no-ops, so implementors pick only the events they
/// care about.
pub trait FilterTrace {
    /// One candidate window was weighed: its position in the walk (0 is the
    /// newest template), its local average, and the similarity weight it
    /// received.
    fn window_step(&mut self, _step: usize, _local_average: f64, _weight: f64) {}

    /// The sample computation finished.
    fn result(&mut self, _center_average: f64, _total_weight: f64, _sample_out: f64) {}
}

/// Trace sink that discards everything. Zero-sized, compiles away.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl FilterTrace for NoTrace {}
