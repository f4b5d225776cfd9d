use dioxus::{logger::tracing::debug, prelude::*};

use crate::picker::entry::Entry;

#[component]
pub fn NumberInput(#[props(into)] id: String, entry: Signal<Entry>, max: i64) -> Element {
    let mut entry = entry;
    let value = entry.read().display_value();
    rsx!(
        input {
            id,
            r#type: "number",
            value,
            max: "{max}",
            oninput: move |event| {
                debug!("Setting new value {event:?}");
                entry.write().enter(&event.value());
            },
        }
    )
}
