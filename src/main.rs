use dioxus::{logger::tracing::debug, prelude::*};

use fav_num::route::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    debug!("Starting favorite number picker");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
