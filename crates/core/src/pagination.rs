//! Page arithmetic for server-paginated lists.
//!
//! The current page and page size live in the URL query string
//! (`?page=2&limit=10`). Nothing is cached between pages.

use url::form_urlencoded;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// `ceil(total / limit)`; zero for an empty list.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        PageQuery {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageQuery {
    /// Page and limit are both raised to at least 1.
    pub fn new(page: u32, limit: u32) -> Self {
        PageQuery {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Reads `page` and `limit` from a query string; missing or malformed
    /// values fall back to the defaults. A leading `?` is accepted.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = PageQuery::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    if let Ok(page) = value.parse::<u32>() {
                        parsed.page = page.max(1);
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse::<u32>() {
                        parsed.limit = limit.max(1);
                    }
                }
                _ => {}
            }
        }
        parsed
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string())
            .finish()
    }

    pub fn as_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Pulls the page back into `[1, total_pages]`. An empty list still has
    /// page 1.
    pub fn clamp(self, total_pages: u32) -> Self {
        PageQuery {
            page: self.page.clamp(1, total_pages.max(1)),
            limit: self.limit,
        }
    }
}

/// Where a paginated view currently is, and what its controls may request
/// next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub query: PageQuery,
    /// Total reported by the last response; `None` before the first fetch.
    pub total: Option<u64>,
}

impl PageState {
    pub fn new(query: PageQuery) -> Self {
        PageState { query, total: None }
    }

    pub fn total_pages(&self) -> u32 {
        self.total
            .map(|total| total_pages(total, self.query.limit))
            .unwrap_or(0)
    }

    pub fn record_total(&mut self, total: u64) {
        self.total = Some(total);
    }

    pub fn has_next(&self) -> bool {
        self.query.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.query.page > 1
    }

    pub fn next(&self) -> Option<PageQuery> {
        self.has_next().then(|| PageQuery {
            page: self.query.page + 1,
            ..self.query
        })
    }

    /// Steps back one page, or to the last page when the current one lies
    /// past the known total.
    pub fn prev(&self) -> Option<PageQuery> {
        self.has_prev().then(|| {
            self.within_known(PageQuery {
                page: self.query.page - 1,
                ..self.query
            })
        })
    }

    /// The current page again, pulled back into range once a total is known.
    pub fn reload(&self) -> PageQuery {
        self.within_known(self.query)
    }

    pub fn goto(&self, page: u32) -> PageQuery {
        PageQuery {
            page,
            ..self.query
        }
        .clamp(self.total_pages())
    }

    fn within_known(&self, query: PageQuery) -> PageQuery {
        match self.total {
            Some(_) => query.clamp(self.total_pages()),
            None => query,
        }
    }

    /// A new page size restarts from the first page.
    pub fn set_limit(&self, limit: u32) -> PageQuery {
        PageQuery::new(DEFAULT_PAGE, limit)
    }
}
