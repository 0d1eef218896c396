//! Shared data types for the telemetry-to-mesh pipeline.
//!
//! Everything here is created fresh per run and discarded after dispatch;
//! no state survives between invocations.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Telemetry input
// ---------------------------------------------------------------------------

/// One run's freshly acquired, unparsed telemetry text.
#[derive(Debug, Clone)]
pub enum RawRecord {
    /// The rendered status page, scanned as a single unit (line index 0).
    Page(String),
    /// Console lines collected after a serial query, in arrival order.
    Lines(Vec<String>),
}

/// The four fields the bridge knows how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Temperature,
    Humidity,
    /// Station-level pressure (QFE).
    StationPressure,
    /// Sea-level pressure (QNH).
    SeaLevelPressure,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Temperature,
        Field::Humidity,
        Field::StationPressure,
        Field::SeaLevelPressure,
    ];

    /// Short tag used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Field::Temperature => "TEMP",
            Field::Humidity => "HUM",
            Field::StationPressure => "QFE",
            Field::SeaLevelPressure => "QNH",
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction output
// ---------------------------------------------------------------------------

/// One successful label+value occurrence within a RawRecord.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub field: Field,
    /// 0 for page input, the line number for console input.
    pub line_index: usize,
    /// The payload text as matched, before separator normalization.
    pub matched: String,
    pub value: f64,
}

/// Outcome of a single extraction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOutcome {
    Parsed(f64),
    /// The label matched but its payload was not a number.
    ParseError,
}

/// One entry of the diagnostic trace. The trace is observational only:
/// downstream stages never consult it.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub line_index: usize,
    pub field: Field,
    pub payload: String,
    pub outcome: TraceOutcome,
}

/// Resolved values for one run. A field stays `None` unless a successful
/// match populated it; parse failures never become values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub station_pressure: Option<f64>,
    pub sea_level_pressure: Option<f64>,
}

impl Reading {
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::Temperature => self.temperature = Some(value),
            Field::Humidity => self.humidity = Some(value),
            Field::StationPressure => self.station_pressure = Some(value),
            Field::SeaLevelPressure => self.sea_level_pressure = Some(value),
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
            Field::StationPressure => self.station_pressure,
            Field::SeaLevelPressure => self.sea_level_pressure,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch input and run outcome
// ---------------------------------------------------------------------------

/// The composed status text plus its MeshCom destination. Built once per
/// run and consumed exactly once by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub text: String,
    pub destination: String,
}

/// What a run reports back to its caller. Both variants are normal
/// termination; transport failures degrade to `NotSent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Sent,
    NotSent,
}

impl RunOutcome {
    pub fn sent(self) -> bool {
        matches!(self, RunOutcome::Sent)
    }
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// The telemetry source could not be read. Always aborts the run before
/// extraction is attempted.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("serial i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The single send attempt failed. Never retried.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("send failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("envelope encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Umbrella error for a pipeline run; the runner converts any of these
/// into a logged `NotSent` outcome.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Acquire(#[from] AcquireError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
