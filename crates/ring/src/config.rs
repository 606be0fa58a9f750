use crate::error::RingError;

/// Default weight multiplier applied to even states right after the anchor.
const DEFAULT_ANCHOR_ATTRACTION: f64 = 10.0;

/// Configuration for ring partitioning.
///
/// Defaults: repeats forbidden, unbounded attempts, no anchor, anchor
/// attraction 10.
#[derive(Debug, Clone)]
pub struct RingConfig {
    allow_repeats: bool,
    max_attempts: Option<usize>,
    anchor: Option<usize>,
    anchor_attraction: f64,
}

impl RingConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            allow_repeats: false,
            max_attempts: None,
            anchor: None,
            anchor_attraction: DEFAULT_ANCHOR_ATTRACTION,
        }
    }

    /// Allow equal states on adjacent ring slots (wraparound included).
    pub fn with_allow_repeats(mut self, allow_repeats: bool) -> Self {
        self.allow_repeats = allow_repeats;
        self
    }

    /// Bound the number of partition attempts; `None` retries forever.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Bias the draw after visits to this state.
    pub fn with_anchor(mut self, anchor: usize) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Weight multiplier applied to even states right after the anchor.
    pub fn with_anchor_attraction(mut self, anchor_attraction: f64) -> Self {
        self.anchor_attraction = anchor_attraction;
        self
    }

    /// Whether adjacent ring slots may hold equal states.
    pub fn allow_repeats(&self) -> bool {
        self.allow_repeats
    }

    /// Attempt budget, `None` meaning unbounded.
    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Anchor state index, if any.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Anchor attraction multiplier.
    pub fn anchor_attraction(&self) -> f64 {
        self.anchor_attraction
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), RingError> {
        if !self.anchor_attraction.is_finite() || self.anchor_attraction <= 0.0 {
            return Err(RingError::InvalidAttraction {
                value: self.anchor_attraction,
            });
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new()
    }
}
