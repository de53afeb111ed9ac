/// Notifications emitted by a [`PagingCollection`](super::PagingCollection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagingEvent {
    /// The item set was replaced with the given one-indexed page.
    PageChanged { page: u32 },
    /// Fetching the given one-indexed page failed; nothing was replaced.
    Error { page: u32, reason: String },
}
