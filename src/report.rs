//! Presentation rounding and message composition.
//!
//! Values are rounded for display only — no clamping and no plausibility
//! checks, an implausible reading goes out as-is. Temperature and the two
//! pressures show one decimal; humidity shows a whole number.

use crate::model::Reading;

/// Rounds to one decimal place for presentation.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds the outbound status text, or `None` when temperature or
/// humidity is missing — a partial message is never produced.
///
/// Segments, joined by single spaces:
///   `<location> Temp: <t>C Umid: <h>% [QFE: <p>hPa] [QNH: <p>hPa]`
///
/// Each pressure segment appears only when its field was matched AND its
/// rounded value is non-zero. A genuine 0.0 reading is therefore dropped
/// like a missing sensor; observable behavior, kept as-is.
pub fn compose(location: &str, reading: &Reading) -> Option<String> {
    let temperature = reading.temperature?;
    let humidity = reading.humidity?;

    let mut parts = vec![
        location.to_string(),
        format!("Temp: {:.1}C", round1(temperature)),
        format!("Umid: {}%", humidity.round() as i64),
    ];

    if let Some(qfe) = reading.station_pressure {
        let qfe = round1(qfe);
        if qfe != 0.0 {
            parts.push(format!("QFE: {:.1}hPa", qfe));
        }
    }

    if let Some(qnh) = reading.sea_level_pressure {
        let qnh = round1(qnh);
        if qnh != 0.0 {
            parts.push(format!("QNH: {:.1}hPa", qnh));
        }
    }

    Some(parts.join(" "))
}
