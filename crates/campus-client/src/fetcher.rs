use crate::http::{connection_error, create_http_client};
use async_trait::async_trait;
use campus_core::{CampusError, CampusResult, PageFetcher, PageQuery, PageResponse};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use url::Url;

/// Fetches pages of `T` from a REST list endpoint with `GET` requests.
///
/// Sends `page`, `page_size` and the query's extra parameters, and expects
/// `{count, current_page, num_pages, start, results}` back. A 404 is treated
/// as a page out of range; any other non-2xx status is a backend error.
pub struct HttpPageFetcher<T> {
    client: Client,
    endpoint: Url,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageFetcher<T> {
    pub fn new(endpoint: &str, request_timeout: Duration) -> CampusResult<Self> {
        Self::with_client(create_http_client(request_timeout)?, endpoint)
    }

    /// Use an existing client, e.g. one that carries session cookies.
    pub fn with_client(client: Client, endpoint: &str) -> CampusResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| CampusError::InvalidUrl(format!("{endpoint}: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            _item: PhantomData,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl<T> Clone for HttpPageFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T> PageFetcher for HttpPageFetcher<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn fetch_page(&self, query: &PageQuery) -> CampusResult<PageResponse<T>> {
        tracing::debug!(
            endpoint = %self.endpoint,
            page = query.page,
            page_size = query.page_size,
            "GET page"
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query.to_pairs())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Page response status");

        if status == StatusCode::NOT_FOUND {
            return Err(CampusError::PageOutOfRange { page: query.page });
        }
        if !status.is_success() {
            return Err(CampusError::Backend {
                status: status.as_u16(),
            });
        }

        response.json::<PageResponse<T>>().await.map_err(|e| {
            if e.is_decode() {
                CampusError::Serialization(format!("Malformed page response: {e}"))
            } else {
                connection_error(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_endpoint() {
        let result = HttpPageFetcher::<String>::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(CampusError::InvalidUrl(_))));
    }

    #[test]
    fn test_keeps_endpoint() {
        let fetcher =
            HttpPageFetcher::<String>::new("http://localhost:8000/api/team/v0/teams/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(fetcher.endpoint().path(), "/api/team/v0/teams/");
        assert_eq!(fetcher.clone().endpoint(), fetcher.endpoint());
    }
}
