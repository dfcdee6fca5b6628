use dioxus::prelude::*;

use crate::components::{DeviceGrid, EnergySummaryCard, UsageChartView};
use crate::state::DashboardState;
use crate::TAILWIND_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // Single state container for the whole view; every section reads and
    // writes through this signal, Dioxus re-renders the dependents.
    let mut state = use_context_provider(|| Signal::new(DashboardState::seed()));
    let dark = state.read().dark_mode();

    let page_class = if dark {
        "min-h-screen bg-gray-900 text-white p-6 space-y-6"
    } else {
        "min-h-screen bg-gray-100 text-gray-900 p-6 space-y-6"
    };
    let theme_color = if dark { "#111827" } else { "#f3f4f6" };
    let color_scheme = if dark { "dark" } else { "light" };

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "{theme_color}" }
        document::Meta { name: "color-scheme", content: "{color_scheme}" }
        // Page container
        div { class: "{page_class}",
            div { class: "flex justify-between items-center mb-6 max-w-5xl mx-auto",
                h1 { class: "text-3xl font-bold", "EcoTrack Dashboard" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700",
                    onclick: move |_| state.write().toggle_theme(),
                    if dark { "☀️ Light Mode" } else { "🌙 Dark Mode" }
                }
            }
            // Centered summary card (max-w-xl)
            div { class: "w-full max-w-xl mx-auto",
                EnergySummaryCard {}
            }
            // Full-width chart section
            div { class: "w-full max-w-5xl mx-auto",
                UsageChartView {}
            }
            DeviceGrid {}
        }
    }
}
