use dioxus::prelude::*;

use crate::chart::arc_path;

// Arc sweep, degrees. The 90-degree rotation below leaves the gap at the
// bottom of the dial.
const START_ANGLE: f32 = 45.0;
const STOP_ANGLE: f32 = 315.0;
const ANGLE_OFFSET: f32 = 90.0;

#[allow(non_snake_case)]
#[component]
pub fn Gauge(
    value: f32,
    max: f32,
    size: i32,
    stroke: i32,
    track_class: String,
    progress_class: String,
    children: Element,
) -> Element {
    let frac = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let end_angle = START_ANGLE + (STOP_ANGLE - START_ANGLE) * frac;

    let c = (size as f32) / 2.0;
    let r = c - (stroke as f32) / 2.0 - 1.0; // small padding

    let track_d = arc_path(c, c, r, START_ANGLE + ANGLE_OFFSET, STOP_ANGLE + ANGLE_OFFSET);
    let progress_d = arc_path(c, c, r, START_ANGLE + ANGLE_OFFSET, end_angle + ANGLE_OFFSET);

    let size_attr = size.to_string();
    let view_box = format!("0 0 {size} {size}");
    let stroke_width = stroke.to_string();
    let container_style = format!("width:{size}px;height:{size}px");

    rsx! {
        div { class: "relative", style: "{container_style}",
            svg { width: "{size_attr}", height: "{size_attr}", view_box: "{view_box}",
                // Track
                path { class: "{track_class}", d: "{track_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke_width}", stroke_linecap: "round" }
                // Progress
                path { class: "{progress_class}", d: "{progress_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke_width}", stroke_linecap: "round" }
            }
            // Center content
            div { class: "absolute inset-0 grid place-items-center", {children} }
        }
    }
}
