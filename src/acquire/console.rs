//! Serial console acquisition.
//!
//! Sends the firmware query `--wx` and collects every console line that
//! arrives inside the response window. The caller owns port opening, baud
//! configuration, and buffer flushing; the same handle is reused later for
//! the outbound frame, so this module only borrows it.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::{AcquireError, RawRecord};

/// Firmware command that makes the node print its weather readings.
pub const WX_QUERY: &str = "--wx\n";

/// Read-loop pacing, usually taken from `SerialConfig`.
#[derive(Debug, Clone)]
pub struct QueryTiming {
    /// Total time to keep collecting lines after the query.
    pub response_window: Duration,
    /// Pause between empty read attempts.
    pub read_delay: Duration,
    /// Pause after writing the query before the first read.
    pub settle: Duration,
}

/// Writes the query and collects decoded, trimmed, non-empty lines until
/// the response window closes (or the channel reports end-of-stream).
/// Bytes that are not valid UTF-8 are decoded lossily, matching what the
/// node's console can actually emit.
pub fn query_telemetry<P>(port: &mut P, timing: &QueryTiming) -> Result<RawRecord, AcquireError>
where
    P: Read + Write + ?Sized,
{
    port.write_all(WX_QUERY.as_bytes())?;
    port.flush()?;

    thread::sleep(timing.settle);

    let mut reader = BufReader::new(port);
    let mut collected = Vec::new();
    let mut buf = Vec::new();
    let start = Instant::now();

    while start.elapsed() < timing.response_window {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break, // end of stream
            Ok(_) => {
                let text = String::from_utf8_lossy(&buf).trim().to_string();
                if !text.is_empty() {
                    debug!(line = %text, "rx");
                    collected.push(text);
                }
                buf.clear();
            }
            // A timed-out read keeps any partial line in `buf`; the next
            // successful read completes it.
            Err(e) if e.kind() == io::ErrorKind::TimedOut => thread::sleep(timing.read_delay),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => thread::sleep(timing.read_delay),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(RawRecord::Lines(collected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Fake serial port: canned rx bytes, captured tx bytes.
    struct FakePort {
        rx: Cursor<Vec<u8>>,
        tx: Vec<u8>,
    }

    impl FakePort {
        fn new(rx: &str) -> Self {
            Self {
                rx: Cursor::new(rx.as_bytes().to_vec()),
                tx: Vec::new(),
            }
        }
    }

    impl Read for FakePort {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.rx.read(buf)
        }
    }

    impl Write for FakePort {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.tx.write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn timing() -> QueryTiming {
        QueryTiming {
            response_window: Duration::from_millis(200),
            read_delay: Duration::from_millis(1),
            settle: Duration::from_millis(0),
        }
    }

    #[test]
    fn test_query_is_written_before_reading() {
        let mut port = FakePort::new("");
        query_telemetry(&mut port, &timing()).expect("query succeeds");
        assert_eq!(port.tx, b"--wx\n");
    }

    #[test]
    fn test_lines_are_trimmed_and_empties_dropped() {
        let mut port = FakePort::new("--wx\r\n\r\n  TEMP: 15.9 C  \r\nHUM: 49.4 %rH\r\n");
        let record = query_telemetry(&mut port, &timing()).expect("query succeeds");

        let RawRecord::Lines(lines) = record else {
            panic!("console acquisition must yield lines");
        };
        assert_eq!(lines, vec!["--wx", "TEMP: 15.9 C", "HUM: 49.4 %rH"]);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut port = FakePort {
            rx: Cursor::new(b"TEMP: 15.9 \xff C\n".to_vec()),
            tx: Vec::new(),
        };
        let record = query_telemetry(&mut port, &timing()).expect("query succeeds");

        let RawRecord::Lines(lines) = record else {
            panic!("console acquisition must yield lines");
        };
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("TEMP: 15.9"));
    }

    #[test]
    fn test_trailing_line_without_newline_is_kept() {
        let mut port = FakePort::new("TEMP: 15.9 C\nHUM: 49.4");
        let record = query_telemetry(&mut port, &timing()).expect("query succeeds");

        let RawRecord::Lines(lines) = record else {
            panic!("console acquisition must yield lines");
        };
        assert_eq!(lines, vec!["TEMP: 15.9 C", "HUM: 49.4"]);
    }
}
