//! meshwx_service: weather telemetry to MeshCom message bridge.
//!
//! Reads temperature, humidity, and optionally two pressure figures from a
//! MeshCom node's own telemetry — the rendered status page over HTTP, or
//! the serial console after a `--wx` query — and hands a compact status
//! message back to the node for the mesh. One shot per invocation,
//! fire-and-forget.
//!
//! # Module structure
//!
//! ```text
//! meshwx_service
//! ├── model    — shared data types (RawRecord, FieldMatch, Reading, …)
//! ├── config   — operator configuration loader (meshwx.toml)
//! ├── fields   — data-driven field specification table (labels, units)
//! ├── extract  — extraction pass + latest-occurrence resolution
//! ├── report   — presentation rounding and message composition
//! ├── acquire
//! │   ├── page    — sensor status page fetch (HTTP)
//! │   ├── console — serial console query (--wx) and line collection
//! │   └── fixtures (test only) — representative page and console payloads
//! ├── dispatch
//! │   ├── udp     — MeshCom JSON datagram
//! │   └── serial  — MeshCom command frame on the open console
//! └── runner   — one-shot pipeline wiring per acquisition mode
//! ```

pub mod acquire;
pub mod config;
pub mod dispatch;
pub mod extract;
pub mod fields;
pub mod model;
pub mod report;
pub mod runner;
