//! MeshCom serial dispatch.
//!
//! Messages go out as one command frame on the already-open console:
//!
//!   ::{<callsign>} <text>\n
//!
//! The port was opened and configured by the acquisition side; this module
//! only writes to it.

use std::io::Write;

use crate::model::{DispatchError, OutboundMessage};

/// Builds the command frame for the node's console.
pub fn build_frame(message: &OutboundMessage) -> String {
    format!("::{{{}}} {}\n", message.destination, message.text)
}

/// Writes the frame to the open channel. Single attempt, no retry.
pub fn send_frame<W>(channel: &mut W, message: &OutboundMessage) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
{
    channel.write_all(build_frame(message).as_bytes())?;
    channel.flush()?;
    Ok(())
}
