//! HTTP client wrapper for retrieving document text.
//!
//! Retrieval is a collaborator of the parser, not part of it: everything
//! that can go wrong here surfaces as an [`EulexError`], while parsing the
//! retrieved text never fails.

use std::io::Read;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{
    validate_url, HTTP_TIMEOUT_SECS, MAX_RETRIES, RETRY_BASE_DELAY_MS, USER_AGENT,
};
use crate::error::{EulexError, Result};

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx
/// responses). Client errors (4xx) are returned immediately.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Maximum accepted body size in bytes
pub fn download_bytes(client: &Client, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let mut response = response.error_for_status()?;

                // Reject early when the server announces an oversized body
                if let Some(length) = response.content_length() {
                    if length > max_size {
                        return Err(EulexError::ResponseTooLarge {
                            size: length,
                            limit: max_size,
                        });
                    }
                }

                return read_limited(&mut response, max_size);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(EulexError::Http(e));
            }
        }
    }

    Err(EulexError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Read a body of at most `max_size` bytes.
///
/// Reads one byte past the limit so an oversized body is detected without
/// buffering it, also when the server sent no `Content-Length`.
pub fn read_limited(body: &mut impl Read, max_size: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    body.take(max_size.saturating_add(1)).read_to_end(&mut bytes)?;

    let size = bytes.len() as u64;
    if size > max_size {
        return Err(EulexError::ResponseTooLarge {
            size,
            limit: max_size,
        });
    }
    Ok(bytes)
}

/// Decode a response body as UTF-8, replacing invalid sequences.
pub fn bytes_to_string(bytes: &[u8], what: &str) -> String {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(what, "Response is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Retrieve the plain text of a document.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - Absolute http(s) URL of the document
/// * `max_size` - Maximum accepted body size in bytes
///
/// # Errors
/// `InvalidUrl` for malformed URLs, `Retrieval` when the request fails, and
/// `RetriesExhausted` / `ResponseTooLarge` as reported by [`download_bytes`].
pub fn fetch_text(client: &Client, url: &str, max_size: u64) -> Result<String> {
    validate_url(url)?;

    let bytes = download_bytes(client, url, max_size).map_err(|e| {
        if let EulexError::Http(source) = e {
            EulexError::Retrieval {
                url: url.to_string(),
                source,
            }
        } else {
            e
        }
    })?;

    tracing::debug!(url, bytes = bytes.len(), "Retrieved document");
    Ok(bytes_to_string(&bytes, url))
}
