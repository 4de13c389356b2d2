//! Pagination and filter parameters for list requests.

/// Default page size used by [`ListQuery::new`].
pub const DEFAULT_LIMIT: u32 = 100;

/// Query parameters for a `list` call.
///
/// Serialized as `skip`, `limit`, then each filter in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    /// Number of records to skip
    pub skip: u32,
    /// Maximum number of records to return
    pub limit: u32,
    /// Extra `key=value` filters, passed through verbatim
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    /// First page with the default limit and no filters.
    pub fn new() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
            filters: Vec::new(),
        }
    }

    /// Sets the pagination window.
    pub fn page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }

    /// Adds a filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// All query pairs in wire order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("skip".to_string(), self.skip.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        pairs.extend(self.filters.iter().cloned());
        pairs
    }

    /// Stable cache key fragment, e.g. `skip=0&limit=100&status=open`.
    pub fn cache_key(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new()
    }
}
