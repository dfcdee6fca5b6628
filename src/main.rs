use dioxus::prelude::*;

mod app;
mod chart;
mod components;
mod shared;
mod state;
mod utils;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(any(feature = "desktop", feature = "mobile"))]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() {
    #[cfg(any(feature = "desktop", feature = "mobile"))]
    init_tracing();

    dioxus::launch(app::App);
}
