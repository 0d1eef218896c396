//! MeshCom UDP dispatch.
//!
//! The node accepts one JSON datagram per message:
//!
//!   { "type": "msg", "dst": "<callsign>", "msg": "<text>" }
//!
//! Host and port are operator configuration, not part of the payload.

use serde::Serialize;
use std::net::UdpSocket;
use std::time::Duration;

use crate::model::{DispatchError, OutboundMessage};

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    dst: &'a str,
    msg: &'a str,
}

/// Encodes the message into the node's datagram envelope.
pub fn encode_envelope(message: &OutboundMessage) -> Result<Vec<u8>, DispatchError> {
    let envelope = Envelope {
        kind: "msg",
        dst: &message.destination,
        msg: &message.text,
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Sends the message as a single best-effort datagram. Returns the number
/// of bytes handed to the network.
pub fn send_datagram(
    message: &OutboundMessage,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<usize, DispatchError> {
    let payload = encode_envelope(message)?;

    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_write_timeout(Some(timeout))?;
    let sent = socket.send_to(&payload, (host, port))?;

    Ok(sent)
}
