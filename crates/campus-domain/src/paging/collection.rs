use super::events::PagingEvent;
use super::fields::FieldRegistry;
use super::query::QueryOptions;
use super::sort::SortDirection;
use campus_core::{CampusError, CampusResult, PageFetcher, PageIndexing, PageInfo, PageResponse};
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Page size, sort and filter selection sent with a request.
struct RequestState {
    per_page: u32,
    sort_field: Option<String>,
    direction: SortDirection,
    filter_field: Option<String>,
}

/// A list of items fetched one page at a time from a paged API.
///
/// Pages are one-indexed on this interface whatever the backend uses.
/// State only changes once a fetch has succeeded: a failed fetch, or a
/// page change dropped before completion, leaves the current page, the
/// totals, the items, the page size and the sort and filter selection
/// exactly as they were. Because page changes take `&mut self`, at most one
/// request is in flight per collection; a caller that wants a newer request
/// to win simply drops the older future.
pub struct PagingCollection<F: PageFetcher> {
    fetcher: F,
    indexing: PageIndexing,
    per_page: u32,
    /// Page number in the backend's indexing.
    current_page: u32,
    total_count: u64,
    total_pages: u32,
    start: u64,
    items: Vec<F::Item>,
    sort_field: Option<String>,
    sort_direction: SortDirection,
    filter_field: Option<String>,
    sortable_fields: FieldRegistry,
    filterable_fields: FieldRegistry,
    query_options: QueryOptions,
    events: broadcast::Sender<PagingEvent>,
}

impl<F: PageFetcher> PagingCollection<F> {
    pub fn new(fetcher: F, indexing: PageIndexing, per_page: u32) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            fetcher,
            indexing,
            per_page,
            current_page: indexing.first_raw(),
            total_count: 0,
            total_pages: 0,
            start: 0,
            items: Vec::new(),
            sort_field: None,
            sort_direction: SortDirection::default(),
            filter_field: None,
            sortable_fields: FieldRegistry::new(),
            filterable_fields: FieldRegistry::new(),
            query_options: QueryOptions::default(),
            events,
        }
    }

    pub fn with_query_options(mut self, options: QueryOptions) -> Self {
        self.query_options = options;
        self
    }

    /// Initial sort selection, applied to the first fetch.
    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(key.into());
        self.sort_direction = direction;
        self
    }

    /// Subscribe to page change and error notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<PagingEvent> {
        self.events.subscribe()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn items(&self) -> &[F::Item] {
        &self.items
    }

    pub fn is_zero_indexed(&self) -> bool {
        self.indexing.is_zero_based()
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Offset of the first item of the current page in the full result set.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Current page as the backend numbers it.
    pub fn raw_page(&self) -> u32 {
        self.current_page
    }

    /// Current page counted from one.
    pub fn current_one_indexed_page(&self) -> u32 {
        self.indexing.to_one_indexed(self.current_page)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_one_indexed_page().saturating_add(1) <= self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_one_indexed_page() >= 2
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(
            self.current_one_indexed_page(),
            self.total_pages,
            self.total_count,
            self.start,
            self.per_page,
        )
    }

    /// Fetch the given one-indexed page and replace the items with it.
    ///
    /// On failure the previous page and items are kept and an error event is
    /// sent; the error is also returned.
    pub async fn set_page(&mut self, page: u32) -> CampusResult<()> {
        let request = self.request_state();
        self.load(page, request).await
    }

    /// Fetch the current page again.
    pub async fn refresh(&mut self) -> CampusResult<()> {
        self.set_page(self.current_one_indexed_page()).await
    }

    /// Move to the next page if there is one.
    ///
    /// Returns `Ok(false)` without issuing a request on the last page.
    pub async fn next_page(&mut self) -> CampusResult<bool> {
        if !self.has_next_page() {
            return Ok(false);
        }
        self.set_page(self.current_one_indexed_page() + 1).await?;
        Ok(true)
    }

    /// Move to the previous page if there is one.
    ///
    /// Returns `Ok(false)` without issuing a request on the first page.
    pub async fn previous_page(&mut self) -> CampusResult<bool> {
        if !self.has_previous_page() {
            return Ok(false);
        }
        self.set_page(self.current_one_indexed_page() - 1).await?;
        Ok(true)
    }

    /// Change the page size and go back to the first page.
    ///
    /// The new size only takes effect once the first page has been fetched.
    pub async fn set_per_page(&mut self, per_page: u32) -> CampusResult<()> {
        if per_page == 0 {
            return Err(CampusError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }
        let request = RequestState {
            per_page,
            ..self.request_state()
        };
        self.load(1, request).await
    }

    pub fn register_sortable_field(
        &mut self,
        key: impl Into<String>,
        display_name: impl Into<String>,
    ) {
        self.sortable_fields.register(key, display_name);
    }

    pub fn register_filterable_field(
        &mut self,
        key: impl Into<String>,
        display_name: impl Into<String>,
    ) {
        self.filterable_fields.register(key, display_name);
    }

    pub fn sortable_fields(&self) -> &FieldRegistry {
        &self.sortable_fields
    }

    pub fn filterable_fields(&self) -> &FieldRegistry {
        &self.filterable_fields
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn filter_field(&self) -> Option<&str> {
        self.filter_field.as_deref()
    }

    /// Display name of the field currently sorted on.
    pub fn sort_display_name(&self) -> Option<&str> {
        self.sort_field
            .as_deref()
            .and_then(|key| self.sortable_fields.display_name(key))
    }

    /// Display name of the field currently filtered on.
    pub fn filter_display_name(&self) -> Option<&str> {
        self.filter_field
            .as_deref()
            .and_then(|key| self.filterable_fields.display_name(key))
    }

    /// Sort on `key` and go back to the first page.
    ///
    /// With `toggle_direction`, choosing the field already sorted on flips
    /// the direction and choosing a different field resets it to descending.
    /// If the fetch fails the previous sort field and direction are kept.
    pub async fn set_sort_field(
        &mut self,
        key: impl Into<String>,
        toggle_direction: bool,
    ) -> CampusResult<()> {
        let key = key.into();
        let mut request = self.request_state();
        if toggle_direction {
            request.direction = if request.sort_field.as_deref() == Some(key.as_str()) {
                request.direction.flip()
            } else {
                SortDirection::Descending
            };
        }
        request.sort_field = Some(key);
        self.load(1, request).await
    }

    pub async fn set_sort_direction(&mut self, direction: SortDirection) -> CampusResult<()> {
        let request = RequestState {
            direction,
            ..self.request_state()
        };
        self.load(1, request).await
    }

    pub async fn set_filter_field(&mut self, key: impl Into<String>) -> CampusResult<()> {
        let request = RequestState {
            filter_field: Some(key.into()),
            ..self.request_state()
        };
        self.load(1, request).await
    }

    fn request_state(&self) -> RequestState {
        RequestState {
            per_page: self.per_page,
            sort_field: self.sort_field.clone(),
            direction: self.sort_direction,
            filter_field: self.filter_field.clone(),
        }
    }

    /// Fetch `page` with `request`, committing both only once the fetch has
    /// succeeded.
    async fn load(&mut self, page: u32, request: RequestState) -> CampusResult<()> {
        if page == 0 {
            let err = CampusError::PageOutOfRange { page };
            self.notify_error(page, &err);
            return Err(err);
        }

        let raw_page = self.indexing.to_raw(page);
        let query = self.query_options.build(
            raw_page,
            request.per_page,
            request.sort_field.as_deref(),
            request.direction,
            request.filter_field.as_deref(),
        );

        tracing::debug!(page, raw_page, per_page = request.per_page, "Requesting page");

        match self.fetcher.fetch_page(&query).await {
            Ok(response) => {
                self.per_page = request.per_page;
                self.sort_field = request.sort_field;
                self.sort_direction = request.direction;
                self.filter_field = request.filter_field;
                self.apply(response);
                let _ = self.events.send(PagingEvent::PageChanged {
                    page: self.current_one_indexed_page(),
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    page,
                    kept_page = self.current_one_indexed_page(),
                    "Failed to change page: {}",
                    err
                );
                self.notify_error(page, &err);
                Err(err)
            }
        }
    }

    fn apply(&mut self, response: PageResponse<F::Item>) {
        tracing::debug!(
            count = response.count,
            current_page = response.current_page,
            num_pages = response.num_pages,
            start = response.start,
            results = response.results.len(),
            "Applying page response"
        );
        self.total_count = response.count;
        self.current_page = response.current_page;
        self.total_pages = response.num_pages;
        self.start = response.start;
        self.items = response.results;
    }

    fn notify_error(&self, page: u32, err: &CampusError) {
        let _ = self.events.send(PagingEvent::Error {
            page,
            reason: err.to_string(),
        });
    }
}
