use campus_core::{CampusError, CampusResult};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Build the HTTP client shared by page fetchers.
pub fn create_http_client(request_timeout: Duration) -> CampusResult<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .map_err(|e| CampusError::Internal(format!("Failed to create HTTP client: {e}")))
}

/// Map a transport-level failure onto the client error type.
pub(crate) fn connection_error(err: reqwest::Error) -> CampusError {
    if err.is_timeout() {
        CampusError::Connection(format!("request timed out: {err}"))
    } else {
        CampusError::Connection(err.to_string())
    }
}
