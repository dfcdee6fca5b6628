use dioxus::prelude::*;

use crate::components::Gauge;
use crate::state::DashboardState;
use crate::utils::format::format_kilowatt_hours;

#[allow(non_snake_case)]
#[component]
pub fn EnergySummaryCard() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let st = state.read();
    let dark = st.dark_mode();
    let active = st.active_count();
    let total = st.devices().len();
    let draw = st.active_usage_kwh();
    let capacity = st.total_usage_kwh();

    let card_class = if dark {
        "w-full rounded-2xl bg-gray-800 shadow-md p-8 space-y-6"
    } else {
        "w-full rounded-2xl bg-white shadow-md p-8 space-y-6"
    };
    let track_class = if dark { "text-gray-700" } else { "text-gray-200" };
    let muted_class = if dark { "text-gray-400" } else { "text-gray-500" };

    rsx! {
        // Card
        div { class: "{card_class}",
            h2 { class: "text-2xl font-semibold tracking-tight", "Current Draw" }
            div { class: "flex flex-col items-center gap-3",
                Gauge {
                    value: draw,
                    max: capacity,
                    size: 220,
                    stroke: 14,
                    track_class: track_class.to_string(),
                    progress_class: "text-indigo-500".to_string(),
                    div { class: "text-4xl font-bold text-indigo-500 tabular-nums", "{format_kilowatt_hours(draw)}" }
                }
                div { class: "text-lg", "{active} of {total} devices on" }
                div { class: "text-xs {muted_class}", "{format_kilowatt_hours(capacity)} connected in total" }
            }
        }
    }
}
