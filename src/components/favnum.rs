use dioxus::prelude::*;

use crate::components::{InvalidAlert, NumberInput};
use crate::picker::{
    bounds::{Bounds, DEFAULT_MAX, DEFAULT_MIN},
    entry::Entry,
};

pub const FIELD_ID: &str = "favorite-number";

/// Favorite number picker.
///
/// Shows an alert once something outside `min..=max` has been entered.
/// Nothing is checked before the first input event.
#[component]
pub fn FavNum(
    #[props(default = DEFAULT_MIN)] min: i64,
    #[props(default = DEFAULT_MAX)] max: i64,
) -> Element {
    let entry = use_signal(Entry::new);
    rsx! {
        FavNumField { bounds: Bounds::new(min, max), entry }
    }
}

/// Label, input and alert for an entry owned by the caller.
#[component]
pub fn FavNumField(bounds: Bounds, entry: Signal<Entry>) -> Element {
    let is_valid = entry.read().is_valid(bounds);
    rsx! {
        div { class: "favnum",
            label { r#for: FIELD_ID, "Favorite Number" }
            NumberInput { id: FIELD_ID, entry, max: bounds.max }
            if !is_valid {
                InvalidAlert {}
            }
        }
    }
}
