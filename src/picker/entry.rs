use dioxus::logger::tracing::debug;

use super::{bounds::Bounds, coerce::coerce_number};

/// What the user has typed into the picker so far.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Entry {
    pub value: f64,
    /// Set by the first input event and never cleared.
    pub entered: bool,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the coerced `raw` text and marks the entry as entered.
    pub fn enter(&mut self, raw: &str) {
        self.value = coerce_number(raw);
        self.entered = true;
        debug!("Entered {raw:?} as {}", self.value);
    }

    /// An untouched entry is valid whatever its value.
    pub fn is_valid(&self, bounds: Bounds) -> bool {
        !self.entered || bounds.contains(self.value)
    }

    /// Text for the `value` attribute of the input. A number field accepts
    /// neither NaN nor the infinities, so those render empty.
    pub fn display_value(&self) -> String {
        match self.value.is_finite() {
            true => self.value.to_string(),
            false => String::new(),
        }
    }
}
