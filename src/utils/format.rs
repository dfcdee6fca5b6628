pub fn format_kilowatt_hours(kwh: f32) -> String {
    let kwh = kwh as f64;
    if kwh.abs() >= 1_000.0 {
        let mwh = kwh / 1_000.0;
        if (mwh.fract()).abs() < f64::EPSILON || (mwh * 10.0).round() % 10.0 == 0.0 {
            format!("{} MWh", mwh.round() as i32)
        } else {
            format!("{:.1} MWh", mwh)
        }
    } else if (kwh.fract()).abs() < f64::EPSILON || (kwh * 10.0).round() % 10.0 == 0.0 {
        format!("{} kWh", kwh.round() as i32)
    } else {
        format!("{:.1} kWh", kwh)
    }
}
