use serde::Deserialize;

/// Offset pagination shared by the list endpoints.
///
/// Missing values fall back to `skip = 0` and `limit = 10`; `limit` is
/// clamped to `MAX_LIMIT` so a single request cannot scan a whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    skip: i64,
    #[serde(default = "Pagination::default_limit")]
    limit: i64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    fn default_limit() -> i64 {
        Self::DEFAULT_LIMIT
    }

    /// Number of rows to skip, never negative.
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// Number of rows to return, within `0..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, Self::MAX_LIMIT)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}
