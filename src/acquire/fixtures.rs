//! Test fixtures: representative payloads from both acquisition modes.
//!
//! Structurally complete but truncated to the minimum needed to exercise
//! the extractor. The page fixture reflects the HTML the node renders at
//! `/?page=wx`; the console fixture reflects a `--wx` exchange on the
//! serial console, including the command echo and frame separators that
//! the extractor must ignore.

/// Status page with all four fields present. Values use the decimal comma
/// and the `&deg;` entity the firmware actually emits.
pub(crate) fn wx_page() -> &'static str {
    r#"<html>
<head><title>MeshCom</title></head>
<body>
<h2>Weather</h2>
<table>
<tr><td>Temperature</td><td>21,4 &deg;C</td></tr>
<tr><td>Humidity</td><td>55 %rH</td></tr>
<tr><td>QFE</td><td>988,6 hPa</td></tr>
<tr><td>QNH</td><td>1013,2 hPa</td></tr>
</table>
</body>
</html>"#
}

/// Status page without a humidity row: the run must end with nothing to
/// send even though the other three fields are fine.
pub(crate) fn wx_page_no_humidity() -> &'static str {
    r#"<html><body><table>
<tr><td>Temperature</td><td>21,4 &deg;C</td></tr>
<tr><td>QFE</td><td>988,6 hPa</td></tr>
<tr><td>QNH</td><td>1013,2 hPa</td></tr>
</table></body></html>"#
}

/// Status page where the sensor reports no temperature value. The label
/// row is present, so the extractor must trace a parse error rather than
/// treat the row as absent silently.
pub(crate) fn wx_page_unparsable_temperature() -> &'static str {
    r#"<html><body><table>
<tr><td>Temperature</td><td>N/A</td></tr>
<tr><td>Humidity</td><td>55 %rH</td></tr>
</table></body></html>"#
}

/// A `--wx` console exchange: command echo, readings, a zero station
/// pressure (excluded by the composer's zero rule), and a separator line.
pub(crate) fn console_transcript() -> Vec<String> {
    [
        "--wx",
        "...TEMP: 15.9 C off 0.000",
        "...HUM: 49.4 %rH",
        "QFE: 0.0 hPa",
        "----------",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A chatty console that repeats the temperature: the later line must win.
pub(crate) fn console_transcript_repeated_temperature() -> Vec<String> {
    [
        "--wx",
        "TEMP: 15.9 C",
        "HUM: 49.4 %rH",
        "TEMP: 16.2 C",
        "----------",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
