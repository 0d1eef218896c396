//! Dispatch: single-attempt delivery of the composed message.
//!
//! Both transports are fire-and-forget. One send, bounded by a short
//! timeout, no retry, no queueing; the caller only learns whether the
//! attempt succeeded.

pub mod serial;
pub mod udp;
