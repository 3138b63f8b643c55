mod common;

use std::sync::Mutex;

use carelink_app::pagination::{PageNav, PagedList};
use carelink_core::{
    envelope::Paginated,
    errors::{CareError, CareResult},
    pagination::PageQuery,
};
use common::Toasts;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// A server with `total` numbered records.
struct FakeServer {
    total: u64,
    requested: Mutex<Vec<PageQuery>>,
}

impl FakeServer {
    fn new(total: u64) -> Self {
        Self {
            total,
            requested: Mutex::new(Vec::new()),
        }
    }

    async fn page(&self, query: PageQuery) -> CareResult<Paginated<u64>> {
        self.requested.lock().unwrap().push(query);
        let start = u64::from(query.page - 1) * u64::from(query.limit);
        let end = (start + u64::from(query.limit)).min(self.total);
        Ok(Paginated {
            items: (start..end).collect(),
            total: self.total,
        })
    }

    fn requested(&self) -> Vec<PageQuery> {
        self.requested.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_load_records_total_and_items() {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::new(PageQuery::new(1, 10));

    assert!(list.load(&toasts, |query| server.page(query)).await);

    assert_eq!(list.items(), (0..10).collect::<Vec<_>>().as_slice());
    assert_eq!(list.state().total_pages(), 3);
    assert_eq!(list.query_string(), "page=1&limit=10");
}

#[tokio::test]
async fn test_every_navigation_fetches_again() {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::new(PageQuery::new(1, 10));

    list.load(&toasts, |query| server.page(query)).await;
    list.next(&toasts, |query| server.page(query)).await;
    list.prev(&toasts, |query| server.page(query)).await;

    // Back to page 1 is fetched again, not served from a cache.
    assert_eq!(
        server.requested(),
        vec![
            PageQuery::new(1, 10),
            PageQuery::new(2, 10),
            PageQuery::new(1, 10)
        ]
    );
}

#[tokio::test]
async fn test_controls_stop_at_the_ends() {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::new(PageQuery::new(3, 10));
    list.load(&toasts, |query| server.page(query)).await;

    assert!(!list.next(&toasts, |query| server.page(query)).await);
    assert_eq!(list.items(), &[20, 21, 22]);

    list.goto(1, &toasts, |query| server.page(query)).await;
    assert!(!list.prev(&toasts, |query| server.page(query)).await);

    assert_eq!(server.requested().len(), 2);
}

#[rstest]
#[case(0, 1)]
#[case(2, 2)]
#[case(99, 3)]
#[tokio::test]
async fn test_goto_is_clamped_to_known_pages(#[case] page: u32, #[case] expected: u32) {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::new(PageQuery::new(1, 10));
    list.load(&toasts, |query| server.page(query)).await;

    list.goto(page, &toasts, |query| server.page(query)).await;

    assert_eq!(list.query().page, expected);
}

#[tokio::test]
async fn test_changing_limit_restarts_at_first_page() {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::from_query_str("?page=2&limit=10");
    list.load(&toasts, |query| server.page(query)).await;

    list.set_limit(5, &toasts, |query| server.page(query)).await;

    assert_eq!(list.query(), PageQuery::new(1, 5));
    assert_eq!(list.state().total_pages(), 5);
    assert_eq!(list.items(), &[0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_empty_list_still_shows_page_one() {
    let server = FakeServer::new(0);
    let toasts = Toasts::default();
    let mut list: PagedList<u64> = PagedList::default();

    assert!(list.load(&toasts, |query| server.page(query)).await);

    assert!(list.items().is_empty());
    assert_eq!(list.state().total_pages(), 0);
    assert_eq!(list.query().page, 1);
    assert!(!list.state().has_next());
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_page() {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::new(PageQuery::new(1, 10));
    list.load(&toasts, |query| server.page(query)).await;

    let moved = list
        .navigate(PageNav::Next, &toasts, |_| async {
            Err::<Paginated<u64>, _>(CareError::Transport("connection reset".to_string()))
        })
        .await;

    assert!(!moved);
    assert_eq!(list.query().page, 1);
    assert_eq!(list.items().len(), 10);
    assert_eq!(toasts.failures(), vec!["Could not reach the server, please try again"]);
}

#[test]
fn test_target_without_total_only_allows_first_page() {
    let list: PagedList<u64> = PagedList::from_query_str("page=4&limit=20");

    assert_eq!(list.target(PageNav::Reload), Some(PageQuery::new(4, 20)));
    assert_eq!(list.target(PageNav::Next), None);
    assert_eq!(list.target(PageNav::Goto(7)), Some(PageQuery::new(1, 20)));
}

#[tokio::test]
async fn test_prev_from_a_page_past_the_end_lands_on_the_last_page() {
    let server = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::from_query_str("?page=9&limit=10");
    list.load(&toasts, |query| server.page(query)).await;

    assert!(list.prev(&toasts, |query| server.page(query)).await);

    assert_eq!(server.requested(), vec![PageQuery::new(9, 10), PageQuery::new(3, 10)]);
    assert_eq!(list.items(), &[20, 21, 22]);
}

#[tokio::test]
async fn test_reload_after_the_total_shrinks_returns_into_range() {
    let full = FakeServer::new(23);
    let toasts = Toasts::default();
    let mut list = PagedList::new(PageQuery::new(3, 10));
    list.load(&toasts, |query| full.page(query)).await;

    let shrunk = FakeServer::new(12);
    list.load(&toasts, |query| shrunk.page(query)).await;
    list.load(&toasts, |query| shrunk.page(query)).await;

    assert_eq!(shrunk.requested(), vec![PageQuery::new(3, 10), PageQuery::new(2, 10)]);
    assert_eq!(list.query().page, 2);
    assert_eq!(list.items(), &[10, 11]);
}
