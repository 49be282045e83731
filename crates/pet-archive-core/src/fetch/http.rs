//! Blocking HTTP GET via libcurl.

use std::time::Duration;
use url::Url;

use super::FetchError;

/// HTTP transfer limits. `None` leaves curl's default (no limit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// Performs a GET and returns the body as UTF-8 text.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub(crate) fn get_text(url: &Url, opts: &HttpOptions) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(secs) = opts.connect_timeout_secs {
        easy.connect_timeout(Duration::from_secs(secs))?;
    }
    if let Some(secs) = opts.timeout_secs {
        easy.timeout(Duration::from_secs(secs))?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    decode_body(url, body)
}

fn decode_body(url: &Url, body: Vec<u8>) -> Result<String, FetchError> {
    String::from_utf8(body).map_err(|source| FetchError::Utf8 {
        url: url.to_string(),
        source,
    })
}
