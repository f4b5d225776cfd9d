pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 9;

/// Inclusive range a favorite number has to fall into.
///
/// The ordering of `min` and `max` is not checked. With `min > max` no value
/// is ever contained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX)
    }
}
