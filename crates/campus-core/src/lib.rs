pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod selection;
pub mod traits;

pub use config::ClientConfig;
pub use error::CampusError;
pub use pagination::{PageIndexing, PageInfo, PageQuery, PageResponse};
pub use result::CampusResult;
pub use selection::Choice;
pub use traits::{CurrentLocation, Navigator, PageFetcher, StaticLocation};
