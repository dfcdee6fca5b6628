use dioxus::prelude::*;

use crate::chart::{
    line_path, max_value, plot_points, weekly_series, ChartConfig, LegendPosition, DAY_LABELS,
};
use crate::state::DashboardState;
use crate::utils::format::format_kilowatt_hours;

#[allow(non_snake_case)]
#[component]
pub fn UsageChartView() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let dark = state.read().dark_mode();

    let series = weekly_series();
    let config = ChartConfig::default();
    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    // Visual params
    let height = 180.0f32;
    let padding = 28.0f32;
    let width = 560.0f32;
    let points = plot_points(&series.values, width, height, padding);
    let path_d = line_path(&points, series.tension);
    let peak = max_value(&series.values);
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    let card_class = if dark {
        "rounded-2xl bg-gray-800 shadow-md p-6 space-y-3"
    } else {
        "rounded-2xl bg-white shadow-md p-6 space-y-3"
    };
    let muted_class = if dark { "text-gray-400" } else { "text-gray-500" };

    let legend = || {
        rsx! {
            div { class: "flex items-center gap-2 {muted_class} text-sm",
                span { class: "inline-block w-3 h-3 rounded-full", style: "background:{series.background_color}" }
                "{series.label}"
            }
        }
    };

    rsx! {
        div { class: "{card_class}",
            div { class: "flex items-end justify-between",
                h2 { class: "text-lg font-medium", "{config.title}" }
                div { class: "text-xs {muted_class}", "Peak: {format_kilowatt_hours(peak)}" }
            }
            if config.legend_position == LegendPosition::Top { {legend()} }
            div { class: "w-full overflow-x-auto",
                svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{(height + padding*2.0).to_string()}",
                    // Baseline
                    line { x1: "{padding}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#9ca3af", stroke_width: "1" }
                    // Series line
                    path { d: "{path_d}", fill: "none", stroke: "{series.border_color}", stroke_width: "2.5", stroke_linecap: "round" }
                    // Point markers
                    {
                        points.iter().enumerate().map(|(i, (x, y))| {
                            rsx!{ circle {
                                key: "{i}", cx: "{x}", cy: "{y}", r: "4", fill: "{series.background_color}",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }}
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) => {
                                let (x, y) = points[i];
                                let day_label = DAY_LABELS[i];
                                let value_label = format_kilowatt_hours(series.values[i]);
                                let cw = 7.0f32; // approx char width at 11px
                                let content_w = (day_label.len().max(value_label.len()) as f32) * cw + 12.0;
                                let tip_w = content_w.max(12.0).min(width - padding * 2.0);
                                let tip_h = 36.0f32; // two lines
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 10.0 - tip_h).max(6.0);
                                rsx!{ g { key: "tooltip",
                                    line { x1: "{x}", y1: "{y}", x2: "{x}", y2: "{tip_y + tip_h}", stroke: "{series.border_color}", stroke_width: "1" }
                                    rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#111827", stroke: "#4b5563", stroke_width: "1" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "text-[11px]", fill: "#d1d5db", "{day_label}" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "text-[11px]", fill: "#f9fafb", "{value_label}" }
                                }}
                            }
                            None => rsx!{ Fragment {} }
                        }
                    }
                    // Day labels along the baseline, nudged to sit under the markers
                    {
                        points.iter().enumerate().map(|(i, (x, _))| {
                            let label_x = x - (DAY_LABELS[i].len() as f32) * 3.0;
                            rsx!{ text { key: "day-{i}", x: "{label_x}", y: "{height + padding + 16.0}", class: "{muted_class} fill-current text-[10px]", "{DAY_LABELS[i]}" } }
                        })
                    }
                }
            }
            if config.legend_position == LegendPosition::Bottom { {legend()} }
        }
    }
}
