//! One-shot pipeline runs, one per acquisition mode.
//!
//! A run is fully sequential and blocking: acquire, extract, resolve,
//! compose, dispatch. Any failure along the way degrades to `NotSent`
//! with a logged reason; the process never aborts on a transport error.

use tracing::{debug, info, warn};

use chrono::Utc;

use crate::acquire::{console, page};
use crate::config::Config;
use crate::dispatch;
use crate::extract::{resolve_latest, scan_record};
use crate::fields::FieldTable;
use crate::model::{
    AcquireError, OutboundMessage, PipelineError, RawRecord, RunOutcome, TraceOutcome,
};
use crate::report::compose;

/// Page mode: fetch the node's status page over HTTP, reply over UDP.
pub fn run_page(config: &Config) -> RunOutcome {
    match try_run_page(config) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "run ended without send");
            RunOutcome::NotSent
        }
    }
}

/// Console mode: query the node over the serial console and send the
/// message back on the same open port.
pub fn run_console(config: &Config) -> RunOutcome {
    match try_run_console(config) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "run ended without send");
            RunOutcome::NotSent
        }
    }
}

fn try_run_page(config: &Config) -> Result<RunOutcome, PipelineError> {
    let url = page::build_wx_url(&config.node.host);
    info!(url = %url, "reading weather page");

    let client = reqwest::blocking::Client::builder()
        .timeout(config.node.http_timeout())
        .build()
        .map_err(AcquireError::from)?;
    let record = page::fetch_page(&client, &url)?;

    finish(config, record, |message| {
        let bytes = dispatch::udp::send_datagram(
            message,
            &config.node.host,
            config.node.udp_port,
            config.node.udp_timeout(),
        )?;
        info!(
            bytes,
            host = %config.node.host,
            port = config.node.udp_port,
            "datagram sent"
        );
        Ok(())
    })
}

fn try_run_console(config: &Config) -> Result<RunOutcome, PipelineError> {
    let serial = &config.serial;
    info!(port = %serial.port, baud = serial.baud_rate, "opening serial console");

    let mut port = serialport::new(&serial.port, serial.baud_rate)
        .timeout(serial.read_timeout())
        .open()
        .map_err(AcquireError::from)?;

    // Stale bytes from before the query would pollute the transcript.
    let _ = port.clear(serialport::ClearBuffer::All);

    let timing = console::QueryTiming {
        response_window: serial.response_window(),
        read_delay: serial.read_delay(),
        settle: serial.settle(),
    };
    let record = console::query_telemetry(&mut *port, &timing)?;

    finish(config, record, |message| {
        dispatch::serial::send_frame(&mut *port, message)?;
        info!(port = %serial.port, "frame written");
        Ok(())
    })
}

/// Shared tail of both modes: extraction through dispatch.
fn finish<F>(config: &Config, record: RawRecord, send: F) -> Result<RunOutcome, PipelineError>
where
    F: FnOnce(&OutboundMessage) -> Result<(), PipelineError>,
{
    let table = FieldTable::new();
    let extraction = scan_record(&table, &record);

    for event in &extraction.trace {
        match event.outcome {
            TraceOutcome::Parsed(value) => debug!(
                field = event.field.name(),
                line = event.line_index,
                payload = %event.payload,
                value,
                "matched"
            ),
            TraceOutcome::ParseError => debug!(
                field = event.field.name(),
                line = event.line_index,
                payload = %event.payload,
                "parse error"
            ),
        }
    }

    let reading = resolve_latest(&extraction.matches);

    let Some(text) = compose(&config.station.location, &reading) else {
        warn!(
            temperature = ?reading.temperature,
            humidity = ?reading.humidity,
            "required readings missing, nothing to send"
        );
        return Ok(RunOutcome::NotSent);
    };

    let message = OutboundMessage {
        text,
        destination: config.station.destination.clone(),
    };
    send(&message)?;

    info!(sent_at = %Utc::now(), message = %message.text, "status message dispatched");
    Ok(RunOutcome::Sent)
}
