//! A server-paginated list as shown on screen.
//!
//! Every navigation fetches the requested page; nothing is cached between
//! pages. The query only advances once the fetch succeeded, so a failed
//! fetch keeps the previous page and its items.

use std::future::Future;

use carelink_core::{
    envelope::Paginated,
    errors::CareResult,
    pagination::{PageQuery, PageState},
};
use tracing::debug;

use crate::notify::{Notifier, toast_failure};

/// A request to move a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Reload,
    Next,
    Prev,
    Goto(u32),
    Limit(u32),
}

#[derive(Debug, Clone)]
pub struct PagedList<T> {
    state: PageState,
    items: Vec<T>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new(PageQuery::default())
    }
}

impl<T> PagedList<T> {
    pub fn new(query: PageQuery) -> Self {
        Self {
            state: PageState::new(query),
            items: Vec::new(),
        }
    }

    /// Starts from `?page=&limit=` as found in the location bar.
    pub fn from_query_str(query: &str) -> Self {
        Self::new(PageQuery::from_query_str(query))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn query(&self) -> PageQuery {
        self.state.query
    }

    pub fn query_string(&self) -> String {
        self.state.query.to_query_string()
    }

    /// Page the navigation would request, or `None` when the controls have
    /// nowhere to go.
    pub fn target(&self, nav: PageNav) -> Option<PageQuery> {
        match nav {
            PageNav::Reload => Some(self.state.reload()),
            PageNav::Next => self.state.next(),
            PageNav::Prev => self.state.prev(),
            PageNav::Goto(page) => Some(self.state.goto(page)),
            PageNav::Limit(limit) => Some(self.state.set_limit(limit)),
        }
    }

    /// Fetches the page `nav` points at. Returns `true` when the list now
    /// shows that page.
    pub async fn navigate<F, Fut>(&mut self, nav: PageNav, notifier: &dyn Notifier, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = CareResult<Paginated<T>>>,
    {
        let Some(query) = self.target(nav) else {
            debug!("No page to move to for {:?}", nav);
            return false;
        };
        match toast_failure(notifier, "Loading page", fetch(query).await) {
            Some(page) => {
                self.state.query = query;
                self.state.record_total(page.total);
                self.items = page.items;
                true
            }
            None => false,
        }
    }

    pub async fn load<F, Fut>(&mut self, notifier: &dyn Notifier, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = CareResult<Paginated<T>>>,
    {
        self.navigate(PageNav::Reload, notifier, fetch).await
    }

    pub async fn next<F, Fut>(&mut self, notifier: &dyn Notifier, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = CareResult<Paginated<T>>>,
    {
        self.navigate(PageNav::Next, notifier, fetch).await
    }

    pub async fn prev<F, Fut>(&mut self, notifier: &dyn Notifier, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = CareResult<Paginated<T>>>,
    {
        self.navigate(PageNav::Prev, notifier, fetch).await
    }

    pub async fn goto<F, Fut>(&mut self, page: u32, notifier: &dyn Notifier, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = CareResult<Paginated<T>>>,
    {
        self.navigate(PageNav::Goto(page), notifier, fetch).await
    }

    pub async fn set_limit<F, Fut>(&mut self, limit: u32, notifier: &dyn Notifier, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = CareResult<Paginated<T>>>,
    {
        self.navigate(PageNav::Limit(limit), notifier, fetch).await
    }

    /// Swaps in a record the server returned after mutating it.
    pub fn replace(&mut self, matches: impl Fn(&T) -> bool, record: T) -> bool {
        match self.items.iter_mut().find(|item| matches(item)) {
            Some(item) => {
                *item = record;
                true
            }
            None => false,
        }
    }
}
