use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Page {page} is out of range")]
    PageOutOfRange { page: u32 },

    #[error("Backend responded with HTTP {status}")]
    Backend { status: u16 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampusError {
    /// True for failures reported by the backend itself, as opposed to
    /// transport or decoding problems on our side.
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, Self::PageOutOfRange { .. } | Self::Backend { .. })
    }
}
