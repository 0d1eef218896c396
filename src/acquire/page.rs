//! Status page acquisition over HTTP.
//!
//! The sensor node renders its current readings as an HTML table at
//! `http://<host>/?page=wx`. One bounded GET per run; the whole body is
//! the record. Any transport failure or non-success status surfaces as an
//! `AcquireError` and the run ends before extraction.

use crate::model::{AcquireError, RawRecord};

/// Builds the weather page URL for the configured node host.
pub fn build_wx_url(host: &str) -> String {
    format!("http://{}/?page=wx", host)
}

/// Fetches the status page as one text blob. The caller supplies a client
/// already configured with the acquisition timeout.
pub fn fetch_page(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<RawRecord, AcquireError> {
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(AcquireError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text()?;
    Ok(RawRecord::Page(body))
}
