//! Blocking HTTP access to raw dictionary pages.

use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{Result, WordpartsError};

const USER_AGENT: &str = concat!("wordparts/", env!("CARGO_PKG_VERSION"));

/// Attempts per page before giving up on transient failures.
const MAX_ATTEMPTS: u32 = 3;

/// First backoff delay; doubled on every further attempt.
const BACKOFF_BASE_MS: u64 = 500;

/// Create the shared client used for page fetches.
pub fn create_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?)
}

/// Outcome of a single request.
enum Attempt {
    /// Final answer: page text, or `None` for a missing page.
    Done(Option<String>),
    /// Transient failure worth another try.
    Transient(String),
}

/// Delay before attempt number `attempt` (0-based). The first attempt is
/// not delayed.
fn backoff_delay(attempt: u32) -> Duration {
    match attempt {
        0 => Duration::ZERO,
        n => Duration::from_millis(BACKOFF_BASE_MS << (n - 1)),
    }
}

/// Fetch a page as text, treating 404 as "no such page".
///
/// Connection errors, timeouts and 5xx responses are retried with
/// exponential backoff; other 4xx responses fail immediately.
///
/// # Returns
/// * `Ok(Some(text))` for a successful response
/// * `Ok(None)` if the server answered 404
pub fn download_text(client: &Client, url: &str, max_size: u64) -> Result<Option<String>> {
    let mut last_failure = String::from("no attempt made");

    for attempt in 0..MAX_ATTEMPTS {
        let delay = backoff_delay(attempt);
        if !delay.is_zero() {
            tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "Backing off");
            thread::sleep(delay);
        }

        match try_once(client, url, max_size)? {
            Attempt::Done(text) => return Ok(text),
            Attempt::Transient(reason) => {
                tracing::warn!(
                    url,
                    reason = %reason,
                    attempt = attempt + 1,
                    max_attempts = MAX_ATTEMPTS,
                    "Transient fetch failure"
                );
                last_failure = reason;
            }
        }
    }

    Err(WordpartsError::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
        message: last_failure,
    })
}

fn try_once(client: &Client, url: &str, max_size: u64) -> Result<Attempt> {
    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(e) if e.is_connect() || e.is_timeout() => {
            return Ok(Attempt::Transient(e.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let status = response.status();
    if status.is_server_error() {
        return Ok(Attempt::Transient(format!("server error {status}")));
    }
    if status == StatusCode::NOT_FOUND {
        return Ok(Attempt::Done(None));
    }

    let text = read_capped(response.error_for_status()?, url, max_size)?;
    Ok(Attempt::Done(Some(text)))
}

/// Read a response body, rejecting bodies over `max_size` bytes.
fn read_capped(response: Response, url: &str, max_size: u64) -> Result<String> {
    let too_large = |size| WordpartsError::ResponseTooLarge {
        size,
        limit: max_size,
    };

    if let Some(declared) = response.content_length().filter(|&len| len > max_size) {
        return Err(too_large(declared));
    }
    let bytes = response.bytes()?;
    let size = bytes.len() as u64;
    if size > max_size {
        return Err(too_large(size));
    }
    Ok(bytes_to_string(&bytes, url))
}

/// Decode a response body as UTF-8, replacing invalid sequences.
pub fn bytes_to_string(bytes: &[u8], what: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(
                source = what,
                error = %e,
                "Body is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        assert!(create_client().is_ok());
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::ZERO);
        assert_eq!(backoff_delay(1), Duration::from_millis(500));
        assert_eq!(backoff_delay(2), Duration::from_millis(1000));
    }

    #[test]
    fn test_bytes_to_string_valid() {
        assert_eq!(bytes_to_string(b"==English==", "test"), "==English==");
    }

    #[test]
    fn test_bytes_to_string_lossy() {
        let text = bytes_to_string(&[b'c', 0xff, b't'], "test");
        assert_eq!(text, "c\u{fffd}t");
    }
}
