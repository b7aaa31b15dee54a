/// Hard cap on history capacity. Bounds the RAM cost of a filter instance
/// (MAX_FULL_SIZE * 8 bytes for the sample buffer).
pub const MAX_FULL_SIZE: usize = 64;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidWindowSize,
    InvalidTemplateSize,
    InvalidBandwidth,
    CapacityExceeded,
    TemplateOutOfBounds,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidWindowSize => write!(f, "window_size must be at least 1"),
            ConfigError::InvalidTemplateSize => {
                write!(f, "template_size must be odd and at least 1")
            }
            ConfigError::InvalidBandwidth => write!(f, "h must be finite and greater than zero"),
            ConfigError::CapacityExceeded => write!(
                f,
                "window_size + template_size - 1 exceeds MAX_FULL_SIZE ({})",
                MAX_FULL_SIZE
            ),
            ConfigError::TemplateOutOfBounds => {
                write!(f, "template reach exceeds the history bounds")
            }
        }
    }
}

/// Non-local-means filter parameters.
///
/// Fixed for the lifetime of a filter instance. `h` is the similarity
/// bandwidth: smaller values keep the filter conservative, larger values
/// smooth more aggressively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NlmConfig {
    /// Number of candidate sub-windows compared against the current template.
    pub window_size: usize,
    /// Width of the local-average template. Must be odd.
    pub template_size: usize,
    /// Similarity kernel bandwidth.
    pub h: f64,
}

impl Default for NlmConfig {
    /// Parameters of the original Arduino firmware.
    fn default() -> Self {
        Self {
            window_size: 21,
            template_size: 7,
            h: 0.005,
        }
    }
}

impl NlmConfig {
    /// Total history capacity needed to fit `window_size` fully-populated
    /// templates alongside the center template.
    pub const fn full_size(&self) -> usize {
        self.window_size + self.template_size - 1
    }

    /// Index of the current template position within the history.
    pub const fn center_index(&self) -> usize {
        self.full_size() / 2
    }

    /// Samples on either side of a template center.
    pub const fn half_template(&self) -> usize {
        self.template_size / 2
    }

    /// Precomputed `-1 / h²` exponent scale for the Gaussian kernel.
    pub fn kernel_scale(&self) -> f64 {
        -1.0 / (self.h * self.h)
    }

    /// Validate the configuration once at startup.
    ///
    /// A filter is never constructed from an invalid configuration:
    /// out-of-bounds template reads would corrupt the computation at
    /// runtime, so construction fails fast instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < 1 {
            return Err(ConfigError::InvalidWindowSize);
        }

        if self.template_size < 1 || self.template_size % 2 == 0 {
            return Err(ConfigError::InvalidTemplateSize);
        }

        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(ConfigError::InvalidBandwidth);
        }

        if self.full_size() > MAX_FULL_SIZE {
            return Err(ConfigError::CapacityExceeded);
        }

        // Every template access must stay inside the history: the center
        // template plus each candidate sub-window walked backward from the
        // newest sample.
        let full = self.full_size() as isize;
        let half = self.half_template() as isize;

        let center = self.center_index() as isize;
        if center - half < 0 || center + half >= full {
            return Err(ConfigError::TemplateOutOfBounds);
        }

        for i in 0..self.window_size as isize {
            let sample_index = full - 1 - i - half;
            if sample_index - half < 0 || sample_index + half >= full {
                return Err(ConfigError::TemplateOutOfBounds);
            }
        }

        Ok(())
    }
}
