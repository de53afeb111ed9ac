use super::sort::SortDirection;
use campus_core::PageQuery;

const DEFAULT_SORT_PARAM: &str = "sort_order";

/// Names of the query parameters a backend expects beyond `page` and
/// `page_size`.
///
/// By default only the sort field is sent, as `sort_order`. Sort direction
/// and filter field stay client-side unless a parameter name is configured
/// for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub sort_param: Option<String>,
    pub direction_param: Option<String>,
    pub filter_param: Option<String>,
    /// Parameters sent unchanged with every request.
    pub extra: Vec<(String, String)>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            sort_param: Some(DEFAULT_SORT_PARAM.to_string()),
            direction_param: None,
            filter_param: None,
            extra: Vec::new(),
        }
    }
}

impl QueryOptions {
    /// For backends that do not support sort ordering.
    pub fn without_sort(mut self) -> Self {
        self.sort_param = None;
        self
    }

    pub fn with_sort_param(mut self, key: impl Into<String>) -> Self {
        self.sort_param = Some(key.into());
        self
    }

    pub fn with_direction_param(mut self, key: impl Into<String>) -> Self {
        self.direction_param = Some(key.into());
        self
    }

    pub fn with_filter_param(mut self, key: impl Into<String>) -> Self {
        self.filter_param = Some(key.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    pub(crate) fn build(
        &self,
        raw_page: u32,
        per_page: u32,
        sort_field: Option<&str>,
        direction: SortDirection,
        filter_field: Option<&str>,
    ) -> PageQuery {
        let mut query = PageQuery::new(raw_page, per_page);

        if let (Some(key), Some(field)) = (&self.sort_param, sort_field) {
            query = query.with_param(key.as_str(), field);
        }
        if let Some(key) = &self.direction_param {
            query = query.with_param(key.as_str(), direction.as_str());
        }
        if let (Some(key), Some(field)) = (&self.filter_param, filter_field) {
            query = query.with_param(key.as_str(), field);
        }
        for (key, value) in &self.extra {
            query = query.with_param(key.as_str(), value.as_str());
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sends_sort_field_only() {
        let query = QueryOptions::default().build(
            2,
            5,
            Some("test_field"),
            SortDirection::Ascending,
            Some("topic"),
        );

        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 5);
        assert_eq!(query.param("sort_order"), Some("test_field"));
        assert_eq!(query.params.len(), 1);
    }

    #[test]
    fn test_unset_sort_field_is_omitted() {
        let query = QueryOptions::default().build(1, 10, None, SortDirection::Descending, None);
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_without_sort() {
        let query = QueryOptions::default().without_sort().build(
            1,
            10,
            Some("name"),
            SortDirection::Descending,
            None,
        );
        assert_eq!(query.param("sort_order"), None);
    }

    #[test]
    fn test_configured_direction_filter_and_extra() {
        let options = QueryOptions::default()
            .with_sort_param("order_by")
            .with_direction_param("direction")
            .with_filter_param("topic_id")
            .with_extra("course_id", "course-v1:edX+DemoX+Demo");

        let query = options.build(
            0,
            10,
            Some("name"),
            SortDirection::Ascending,
            Some("topic-1"),
        );

        assert_eq!(query.param("order_by"), Some("name"));
        assert_eq!(query.param("direction"), Some("ascending"));
        assert_eq!(query.param("topic_id"), Some("topic-1"));
        assert_eq!(query.param("course_id"), Some("course-v1:edX+DemoX+Demo"));
        assert_eq!(query.param("sort_order"), None);
    }
}
