use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::state::DashboardState;
use crate::utils::format::format_kilowatt_hours;

#[allow(non_snake_case)]
#[component]
pub fn DeviceGrid() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let st = state.read();
    let dark = st.dark_mode();
    let devices = st.devices().to_vec();

    let card_class = if dark {
        "bg-gray-800 p-4 rounded-xl shadow flex justify-between items-center"
    } else {
        "bg-white p-4 rounded-xl shadow flex justify-between items-center"
    };
    let usage_class = if dark { "text-sm text-gray-400" } else { "text-sm text-gray-500" };

    rsx! {
        div { class: "max-w-4xl mx-auto",
            h2 { class: "text-xl font-semibold mb-4", "Devices" }
            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                {
                    devices.iter().enumerate().map(|(i, device)| {
                        let button_class = if device.status {
                            "px-3 py-1 rounded-full text-sm font-medium bg-green-500 text-white"
                        } else {
                            "px-3 py-1 rounded-full text-sm font-medium bg-gray-300 text-gray-800"
                        };
                        rsx! {
                            div { key: "{device.name}", class: "{card_class}",
                                div {
                                    h3 { class: "text-lg font-bold", "{device.name}" }
                                    p { class: "{usage_class}", "Usage: {format_kilowatt_hours(device.usage_kwh)}" }
                                }
                                button {
                                    class: "{button_class}",
                                    onclick: move |_| {
                                        if let Err(err) = state.write().toggle_device(i) {
                                            warn!("device toggle rejected: {err}");
                                        }
                                    },
                                    if device.status { "On" } else { "Off" }
                                }
                            }
                        }
                    })
                }
            }
        }
    }
}
