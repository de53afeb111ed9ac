pub mod fetcher;
pub mod http;

pub use fetcher::*;
pub use http::*;
