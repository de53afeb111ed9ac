use crate::pagination::{PageQuery, PageResponse};
use crate::CampusResult;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Source of paged list results, usually a REST endpoint.
///
/// Implementations report every non-success response as an error; callers
/// never see a partially decoded page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    type Item: Send + 'static;

    async fn fetch_page(&self, query: &PageQuery) -> CampusResult<PageResponse<Self::Item>>;
}

#[async_trait]
impl<F: PageFetcher> PageFetcher for Arc<F> {
    type Item = F::Item;

    async fn fetch_page(&self, query: &PageQuery) -> CampusResult<PageResponse<Self::Item>> {
        self.as_ref().fetch_page(query).await
    }
}

/// Browser-side navigation performed by views.
pub trait Navigator: Send + Sync {
    /// Leave the current page for `url`.
    fn redirect(&self, url: &str);

    /// Record `url` in session history without leaving the page.
    fn push_history(&self, url: &str);
}

/// Accessor for the URL of the page a view is rendered on.
pub trait CurrentLocation: Send + Sync {
    fn current_url(&self) -> &Url;
}

/// A fixed location, for contexts without a live page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation(pub Url);

impl StaticLocation {
    pub fn parse(url: &str) -> CampusResult<Self> {
        Url::parse(url)
            .map(Self)
            .map_err(|e| crate::CampusError::InvalidUrl(format!("{url}: {e}")))
    }
}

impl CurrentLocation for StaticLocation {
    fn current_url(&self) -> &Url {
        &self.0
    }
}
