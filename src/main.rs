#![allow(non_snake_case)]

use dioxus::prelude::*;

use theme::ThemeProvider;
use views::Home;

mod components;
mod logging;
mod models;
mod theme;
mod views;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const PROFILE_PICTURE: Asset = asset!("/assets/profile_picture.svg");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("chatcard=debug")),
            )
            .init();
    }

    log_info!("starting chatcard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        script { src: "https://cdn.tailwindcss.com" }

        ThemeProvider { Home {} }
    }
}
