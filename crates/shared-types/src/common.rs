use serde::{Deserialize, Serialize};

/// Envelope the RideShare API wraps every response in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Pagination metadata as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default, alias = "totalPage")]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    ListQuery::DEFAULT_LIMIT
}

impl PageMeta {
    /// Build metadata from a total count, deriving the page count.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit as u64) as u32;
        Self {
            page: page.max(1),
            limit,
            total,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// A page of list results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Wrap a list the backend returned without metadata as a single page.
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        let limit = (data.len() as u32).max(1);
        Self {
            data,
            meta: PageMeta::new(1, limit, total),
        }
    }
}

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub blocked: Option<bool>,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: Self::DEFAULT_LIMIT,
            ..Default::default()
        }
    }

    /// Query-string pairs in a stable order. Page is at least 1, limit is
    /// clamped into `1..=MAX_LIMIT`, and blank filters are left out.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let limit = if self.limit == 0 {
            Self::DEFAULT_LIMIT
        } else {
            self.limit.min(Self::MAX_LIMIT)
        };
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", limit.to_string()),
        ];

        let text_filters = [
            ("searchTerm", &self.search),
            ("role", &self.role),
            ("status", &self.status),
        ];
        for (key, value) in text_filters {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }
        if let Some(blocked) = self.blocked {
            pairs.push(("isBlocked", blocked.to_string()));
        }
        pairs
    }
}
