//! Extraction pass and occurrence resolution.
//!
//! Scanning walks every unit of a `RawRecord` against the field table:
//! the whole page as one unit, or each console line in order. Successful
//! parses become `FieldMatch`es; every labeled attempt, parsable or not,
//! lands in the diagnostic trace in encounter order. Resolution then picks
//! the latest occurrence per field.

use crate::fields::{CompiledSpec, FieldTable};
use crate::model::{Field, FieldMatch, RawRecord, Reading, TraceEvent, TraceOutcome};

/// Output of one extraction pass: successful matches plus the parallel
/// diagnostic trace. The trace never feeds back into control flow.
#[derive(Debug, Default)]
pub struct Extraction {
    pub matches: Vec<FieldMatch>,
    pub trace: Vec<TraceEvent>,
}

/// Scans a record with every matcher of the table.
pub fn scan_record(table: &FieldTable, record: &RawRecord) -> Extraction {
    let mut out = Extraction::default();

    match record {
        RawRecord::Page(html) => {
            for spec in table.specs() {
                scan_unit(spec, &spec.page_re, 0, html, &mut out);
            }
        }
        RawRecord::Lines(lines) => {
            for (index, line) in lines.iter().enumerate() {
                for spec in table.specs() {
                    scan_unit(spec, &spec.line_re, index, line, &mut out);
                }
            }
        }
    }

    out
}

fn scan_unit(
    spec: &CompiledSpec,
    re: &regex::Regex,
    index: usize,
    text: &str,
    out: &mut Extraction,
) {
    let Some(caps) = re.captures(text) else {
        return;
    };
    let payload = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    match parse_value(payload) {
        Some(value) => {
            out.trace.push(TraceEvent {
                line_index: index,
                field: spec.field,
                payload: payload.to_string(),
                outcome: TraceOutcome::Parsed(value),
            });
            out.matches.push(FieldMatch {
                field: spec.field,
                line_index: index,
                matched: payload.to_string(),
                value,
            });
        }
        None => {
            out.trace.push(TraceEvent {
                line_index: index,
                field: spec.field,
                payload: payload.to_string(),
                outcome: TraceOutcome::ParseError,
            });
        }
    }
}

/// Normalizes the decimal separator to `.`, then parses.
pub fn parse_value(payload: &str) -> Option<f64> {
    payload.replace(',', ".").parse().ok()
}

/// Collapses the match list to one value per field: the occurrence with
/// the greatest line index wins, encoding "most recent measurement wins"
/// for chatty console output. Selection is by line index, not by position
/// in the match list. Fields with no successful match stay absent.
pub fn resolve_latest(matches: &[FieldMatch]) -> Reading {
    let mut reading = Reading::default();

    for field in Field::ALL {
        let best = matches
            .iter()
            .filter(|m| m.field == field)
            .max_by_key(|m| m.line_index);
        if let Some(m) = best {
            reading.set(field, m.value);
        }
    }

    reading
}
