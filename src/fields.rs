//! Field specification table for tolerant label/value extraction.
//!
//! Each telemetry field carries its label spellings and unit tokens for
//! the two input shapes: a strict two-column table row on the rendered
//! status page, and a loose labeled token anywhere on a console line.
//! The table is data driven — a new field or unit spelling is an entry
//! here, not new control flow — and compiles once per run into reusable
//! matchers.

use crate::model::Field;
use regex::Regex;

/// Raw (uncompiled) specification for one field. All pattern pieces are
/// regex fragments; alternations must not contain capture groups.
struct FieldSpec {
    field: Field,
    /// Label cell text on the status page row.
    page_label: &'static str,
    /// Unit tokens accepted (not required) after the page value.
    page_unit: &'static str,
    /// Label tokens accepted on a console line.
    line_labels: &'static str,
    /// Unit tokens accepted (not required) after the console value.
    line_unit: &'static str,
}

const TABLE: &[FieldSpec] = &[
    FieldSpec {
        field: Field::Temperature,
        page_label: "Temperature",
        page_unit: r"&deg;\s*C|°\s*C|C",
        line_labels: "TEMP|TEMPERATURE|T",
        line_unit: r"°\s*C|C",
    },
    FieldSpec {
        field: Field::Humidity,
        page_label: "Humidity",
        page_unit: r"%\s*rH|%",
        line_labels: "HUM|HUMIDITY|RH|RELATIVE_HUMIDITY",
        line_unit: "%rH|%|rH",
    },
    FieldSpec {
        field: Field::StationPressure,
        page_label: "QFE",
        page_unit: "hPa",
        line_labels: "QFE|PRESS|PRESSURE",
        line_unit: "hPa",
    },
    FieldSpec {
        field: Field::SeaLevelPressure,
        page_label: "QNH",
        page_unit: "hPa",
        line_labels: "QNH",
        line_unit: "hPa",
    },
];

/// Payload alternation: prefer a signed decimal with either separator,
/// otherwise take the next bare token so an unparsable payload still
/// surfaces in the diagnostic trace instead of vanishing. Separator
/// characters are excluded from the token so a label with no payload at
/// all does not match its own punctuation.
const PAYLOAD: &str = r"[+-]?\d+(?:[.,]\d+)?|[^\s<>&:=]+";

/// One field's compiled matchers.
pub struct CompiledSpec {
    pub field: Field,
    /// Strict variant: anchored to a label cell / value cell table row.
    pub page_re: Regex,
    /// Loose variant: bare label token anywhere on a line, with `:`/`=`
    /// separators allowed.
    pub line_re: Regex,
}

/// The compiled specification table. Build once per run and reuse for
/// every unit of the record.
pub struct FieldTable {
    specs: Vec<CompiledSpec>,
}

impl FieldTable {
    pub fn new() -> Self {
        let specs = TABLE
            .iter()
            .map(|spec| CompiledSpec {
                field: spec.field,
                page_re: Regex::new(&format!(
                    r"(?i)<tr>\s*<td>\s*{}\s*</td>\s*<td>\s*({})(?:\s*(?:{}))?",
                    spec.page_label, PAYLOAD, spec.page_unit
                ))
                .expect("page pattern is valid"),
                line_re: Regex::new(&format!(
                    r"(?i)\b(?:{})\b[\s:=]*({})(?:\s*(?:{}))?",
                    spec.line_labels, PAYLOAD, spec.line_unit
                ))
                .expect("line pattern is valid"),
            })
            .collect();

        Self { specs }
    }

    pub fn specs(&self) -> &[CompiledSpec] {
        &self.specs
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(table: &FieldTable, field: Field) -> &CompiledSpec {
        table
            .specs()
            .iter()
            .find(|s| s.field == field)
            .expect("field present in table")
    }

    fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
        re.captures(text).map(|c| c.get(1).unwrap().as_str())
    }

    // --- page (table row) variant -------------------------------------------

    #[test]
    fn test_page_row_with_decimal_comma_and_entity_unit() {
        let table = FieldTable::new();
        let row = "<tr><td>Temperature</td><td>21,4 &deg;C</td></tr>";
        assert_eq!(capture(&spec(&table, Field::Temperature).page_re, row), Some("21,4"));
    }

    #[test]
    fn test_page_row_is_case_insensitive() {
        let table = FieldTable::new();
        let row = "<TR><TD>HUMIDITY</TD><TD>55 %rH</TD></TR>";
        assert_eq!(capture(&spec(&table, Field::Humidity).page_re, row), Some("55"));
    }

    #[test]
    fn test_page_row_tolerates_whitespace_and_newlines() {
        let table = FieldTable::new();
        let row = "<tr>\n  <td> QNH </td>\n  <td> 1013,2 hPa </td>\n</tr>";
        assert_eq!(
            capture(&spec(&table, Field::SeaLevelPressure).page_re, row),
            Some("1013,2")
        );
    }

    #[test]
    fn test_page_unit_is_optional() {
        let table = FieldTable::new();
        let row = "<tr><td>QFE</td><td>988.6</td></tr>";
        assert_eq!(
            capture(&spec(&table, Field::StationPressure).page_re, row),
            Some("988.6")
        );
    }

    #[test]
    fn test_page_non_numeric_payload_is_still_captured() {
        // The extractor decides parsed-vs-error; the pattern must hand it
        // the payload either way.
        let table = FieldTable::new();
        let row = "<tr><td>Temperature</td><td>N/A</td></tr>";
        assert_eq!(capture(&spec(&table, Field::Temperature).page_re, row), Some("N/A"));
    }

    #[test]
    fn test_page_label_elsewhere_does_not_match() {
        let table = FieldTable::new();
        let text = "<p>Temperature trends are shown below</p>";
        assert!(spec(&table, Field::Temperature).page_re.captures(text).is_none());
    }

    // --- line (console) variant ---------------------------------------------

    #[test]
    fn test_line_label_with_colon_and_unit() {
        let table = FieldTable::new();
        let line = "...TEMP: 15.9 C off 0.000";
        assert_eq!(capture(&spec(&table, Field::Temperature).line_re, line), Some("15.9"));
    }

    #[test]
    fn test_line_label_synonyms() {
        let table = FieldTable::new();
        let hum = spec(&table, Field::Humidity);
        assert_eq!(capture(&hum.line_re, "HUM: 49.4 %rH"), Some("49.4"));
        assert_eq!(capture(&hum.line_re, "rh = 51"), Some("51"));
        assert_eq!(capture(&hum.line_re, "RELATIVE_HUMIDITY 48,7 %"), Some("48,7"));
    }

    #[test]
    fn test_line_signed_value_without_unit() {
        let table = FieldTable::new();
        assert_eq!(
            capture(&spec(&table, Field::Temperature).line_re, "t=-3,5"),
            Some("-3,5")
        );
    }

    #[test]
    fn test_line_label_prefix_does_not_shadow_longer_label() {
        // TEMPERATURE must not stop matching because TEMP is listed first.
        let table = FieldTable::new();
        assert_eq!(
            capture(&spec(&table, Field::Temperature).line_re, "TEMPERATURE: 16.2"),
            Some("16.2")
        );
    }

    #[test]
    fn test_line_label_without_payload_does_not_match() {
        let table = FieldTable::new();
        assert!(spec(&table, Field::Temperature).line_re.captures("TEMP:").is_none());
    }

    #[test]
    fn test_line_pressure_labels() {
        let table = FieldTable::new();
        assert_eq!(
            capture(&spec(&table, Field::StationPressure).line_re, "PRESS: 988.6 hPa"),
            Some("988.6")
        );
        assert_eq!(
            capture(&spec(&table, Field::SeaLevelPressure).line_re, "QNH: 1013.2 hPa"),
            Some("1013.2")
        );
    }
}
