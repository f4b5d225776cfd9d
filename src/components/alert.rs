use dioxus::prelude::*;

pub const INVALID_MESSAGE: &str = "The number is invalid";

#[component]
pub fn InvalidAlert() -> Element {
    rsx!(
        div { class: "alert", role: "alert", {INVALID_MESSAGE} }
    )
}
