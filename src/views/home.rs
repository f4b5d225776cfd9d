use dioxus::prelude::*;

use crate::components;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { id: "home",
            header { "Pick your favorite number" }
            components::FavNum {}
        }
    }
}
