use serde::{Deserialize, Serialize};

pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One rendered data series: the weekly values plus its display
/// configuration. Everything the chart view draws comes through here;
/// nothing else knows about colors or smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: [f32; 7],
    #[serde(rename = "borderColor")]
    pub border_color: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    pub tension: f32,
}

/// Mock weekly consumption, one value per entry of [`DAY_LABELS`].
pub fn weekly_series() -> ChartSeries {
    ChartSeries {
        label: "Energy Consumption (kWh)".to_string(),
        values: [12.0, 19.0, 9.0, 14.0, 16.0, 11.0, 13.0],
        border_color: "#4f46e5".to_string(),
        background_color: "#6366f1".to_string(),
        tension: 0.3,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    #[serde(rename = "legendPosition")]
    pub legend_position: LegendPosition,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Weekly Energy Usage".to_string(),
            legend_position: LegendPosition::Top,
        }
    }
}

// --- plot geometry ---
//
// The views hand these helpers a logical plot rect (width/height plus a
// uniform padding) and get back SVG coordinates or path strings.

pub fn max_value(values: &[f32]) -> f32 {
    values.iter().cloned().fold(1.0f32, f32::max)
}

pub fn point_x(i: usize, n: usize, width: f32, padding: f32) -> f32 {
    if n < 2 {
        return width / 2.0;
    }
    padding + (i as f32) * (width - padding * 2.0) / ((n - 1) as f32)
}

pub fn point_y(value: f32, max: f32, height: f32, padding: f32) -> f32 {
    let max = max.max(f32::EPSILON);
    let v = value.clamp(0.0, max);
    padding + height - (v / max) * height
}

pub fn plot_points(values: &[f32], width: f32, height: f32, padding: f32) -> Vec<(f32, f32)> {
    let max = max_value(values);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            (
                point_x(i, values.len(), width, padding),
                point_y(*v, max, height, padding),
            )
        })
        .collect()
}

/// Path through `points`, smoothed with cardinal-spline control points
/// scaled by `tension`. Tension 0 degenerates to straight segments.
pub fn line_path(points: &[(f32, f32)], tension: f32) -> String {
    let Some(((x0, y0), rest)) = points.split_first() else {
        return String::new();
    };
    let mut d = format!("M {x0:.3} {y0:.3}");
    if tension <= 0.0 {
        for (x, y) in rest {
            d.push_str(&format!(" L {x:.3} {y:.3}"));
        }
        return d;
    }
    let k = tension / 3.0;
    let n = points.len();
    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        let c1 = (p1.0 + (p2.0 - p0.0) * k, p1.1 + (p2.1 - p0.1) * k);
        let c2 = (p2.0 - (p3.0 - p1.0) * k, p2.1 - (p3.1 - p1.1) * k);
        d.push_str(&format!(
            " C {:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        ));
    }
    d
}

pub fn polar(cx: f32, cy: f32, r: f32, angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

pub fn arc_path(cx: f32, cy: f32, r: f32, a0: f32, a1: f32) -> String {
    let (x0, y0) = polar(cx, cy, r, a0);
    let (x1, y1) = polar(cx, cy, r, a1);
    let delta = (a1 - a0).abs();
    let large_arc = if delta >= 180.0 { 1 } else { 0 };
    let sweep = if a1 >= a0 { 1 } else { 0 };
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} {sweep} {x1:.3} {y1:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_series_literals() {
        let series = weekly_series();
        assert_eq!(series.values, [12.0, 19.0, 9.0, 14.0, 16.0, 11.0, 13.0]);
        assert_eq!(series.label, "Energy Consumption (kWh)");
        assert_eq!(series.border_color, "#4f46e5");
        assert_eq!(series.background_color, "#6366f1");
        assert_eq!(DAY_LABELS.len(), series.values.len());
        assert_eq!(DAY_LABELS[0], "Mon");
        assert_eq!(DAY_LABELS[6], "Sun");
    }

    #[test]
    fn series_round_trips_through_rendering_configuration() {
        let series = weekly_series();
        let json = serde_json::to_string(&series).unwrap();
        let back: ChartSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);

        let config = ChartConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""legendPosition":"top""#));
        let back: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn default_config_titles_the_chart() {
        let config = ChartConfig::default();
        assert_eq!(config.title, "Weekly Energy Usage");
        assert_eq!(config.legend_position, LegendPosition::Top);
    }

    #[test]
    fn point_y_is_monotonic_and_bounded() {
        let (max, height, padding) = (19.0, 180.0, 28.0);
        assert!(point_y(19.0, max, height, padding) < point_y(12.0, max, height, padding));
        assert_eq!(point_y(max, max, height, padding), padding);
        assert_eq!(point_y(0.0, max, height, padding), padding + height);
        // out-of-rect values clamp instead of escaping the plot
        assert_eq!(point_y(40.0, max, height, padding), padding);
        assert_eq!(point_y(-3.0, max, height, padding), padding + height);
    }

    #[test]
    fn plot_points_span_the_padded_width() {
        let series = weekly_series();
        let pts = plot_points(&series.values, 560.0, 180.0, 28.0);
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[0].0, 28.0);
        assert_eq!(pts[6].0, 560.0 - 28.0);
        for w in pts.windows(2) {
            assert!(w[1].0 > w[0].0);
        }
    }

    #[test]
    fn line_path_passes_through_every_point() {
        let pts = plot_points(&weekly_series().values, 560.0, 180.0, 28.0);
        let d = line_path(&pts, 0.3);
        assert!(d.starts_with(&format!("M {:.3} {:.3}", pts[0].0, pts[0].1)));
        assert_eq!(d.matches(" C ").count(), pts.len() - 1);
        for (x, y) in &pts[1..] {
            assert!(d.ends_with(&format!("{x:.3} {y:.3}")) || d.contains(&format!("{x:.3} {y:.3}")));
        }
        let straight = line_path(&pts, 0.0);
        assert_eq!(straight.matches(" L ").count(), pts.len() - 1);
    }

    #[test]
    fn arc_path_flags_large_arcs() {
        let long = arc_path(110.0, 110.0, 100.0, 135.0, 405.0);
        assert!(long.contains(" A 100.000 100.000 0 1 1 "));
        let short = arc_path(110.0, 110.0, 100.0, 135.0, 180.0);
        assert!(short.contains(" A 100.000 100.000 0 0 1 "));
    }
}
