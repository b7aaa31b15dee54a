use heapless::Vec;

use crate::config::MAX_FULL_SIZE;

/// Sliding window over the most recent samples.
///
/// Ring buffer with a head index instead of shifting the whole array on every
/// push. Slot count is fixed at construction; slots beyond `filled` hold zero
/// placeholders until the window has seen enough samples.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    buffer: Vec<f64, MAX_FULL_SIZE>,
    head: usize,
    filled: usize,
}

impl SampleHistory {
    /// Create a history holding `capacity` samples.
    ///
    /// capacity must be > 0 and <= MAX_FULL_SIZE
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0 && capacity <= MAX_FULL_SIZE);

        let mut buffer = Vec::new();
        for _ in 0..capacity.min(MAX_FULL_SIZE) {
            let _ = buffer.push(0.0);
        }

        Self {
            buffer,
            head: 0,
            filled: 0,
        }
    }

    /// Append a sample, evicting the oldest one once the window is full.
    pub fn push(&mut self, sample: f64) {
        if self.filled < self.buffer.len() {
            self.buffer[self.filled] = sample;
            self.filled += 1;
        } else {
            self.buffer[self.head] = sample;
            self.head = (self.head + 1) % self.buffer.len();
        }
    }

    /// Sample at logical position `index`: 0 is the oldest, `capacity() - 1`
    /// the newest.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        debug_assert!(index < self.buffer.len());
        self.buffer[(self.head + index) % self.buffer.len()]
    }

    /// The most recently pushed sample. Zero placeholder before the first push.
    pub fn latest(&self) -> f64 {
        if self.filled == 0 {
            return 0.0;
        }
        self.get(self.filled.min(self.buffer.len()) - 1)
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of real samples currently held, capped at `capacity()`.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// True once every slot holds a real sample. Never reverts to false
    /// except through `reset()`.
    pub fn is_warm(&self) -> bool {
        self.filled == self.buffer.len()
    }

    /// Clear back to the initial all-placeholder state.
    pub fn reset(&mut self) {
        self.head = 0;
        self.filled = 0;
        for slot in self.buffer.iter_mut() {
            *slot = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cold_with_placeholders() {
        let history = SampleHistory::new(4);
        assert_eq!(history.capacity(), 4);
        assert_eq!(history.filled(), 0);
        assert!(!history.is_warm());
        for i in 0..4 {
            assert_eq!(history.get(i), 0.0);
        }
    }

    #[test]
    fn fills_in_arrival_order() {
        let mut history = SampleHistory::new(3);

        history.push(1.0);
        history.push(2.0);
        assert_eq!(history.filled(), 2);
        assert!(!history.is_warm());

        history.push(3.0);
        assert!(history.is_warm());
        assert_eq!(history.get(0), 1.0);
        assert_eq!(history.get(1), 2.0);
        assert_eq!(history.get(2), 3.0);
    }

    #[test]
    fn evicts_oldest_once_warm() {
        let mut history = SampleHistory::new(3);

        for sample in [1.0, 2.0, 3.0, 4.0, 5.0] {
            history.push(sample);
        }

        // Last three pushes survive, in arrival order
        assert_eq!(history.get(0), 3.0);
        assert_eq!(history.get(1), 4.0);
        assert_eq!(history.get(2), 5.0);
        assert_eq!(history.latest(), 5.0);
    }

    #[test]
    fn fifo_holds_after_many_wraps() {
        let mut history = SampleHistory::new(4);

        for n in 0..100 {
            history.push(n as f64);
        }

        for i in 0..4 {
            assert_eq!(history.get(i), (96 + i) as f64);
        }
        assert_eq!(history.filled(), 4);
    }

    #[test]
    fn latest_tracks_partial_fill() {
        let mut history = SampleHistory::new(5);
        assert_eq!(history.latest(), 0.0);

        history.push(7.0);
        assert_eq!(history.latest(), 7.0);

        history.push(9.0);
        assert_eq!(history.latest(), 9.0);
    }

    #[test]
    fn reset_returns_to_cold() {
        let mut history = SampleHistory::new(3);
        for sample in [1.0, 2.0, 3.0, 4.0] {
            history.push(sample);
        }
        assert!(history.is_warm());

        history.reset();
        assert_eq!(history.filled(), 0);
        assert!(!history.is_warm());
        assert_eq!(history.get(0), 0.0);

        // Refills cleanly after reset
        history.push(8.0);
        assert_eq!(history.get(0), 8.0);
        assert_eq!(history.latest(), 8.0);
    }
}
