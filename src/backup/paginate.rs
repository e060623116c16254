//! Cursor-based pagination over newest-first collections.
//!
//! A [`PageSource`] fetches one page given an upper bound on ids.
//! [`Pager`] walks a source lazily, one page per call, using the id of the
//! last item of each page minus one as the next bound. Ids are assumed dense
//! and strictly decreasing; the walk does not detect duplicates or gaps.

use async_trait::async_trait;

use crate::api::{MastodonApi, Status};
use crate::error::Result;

/// Parameters for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Upper bound on item ids, derived from the previous page.
    pub max_id: Option<u64>,
    /// Upper bound on the number of items returned.
    pub limit: u32,
}

/// A remote collection that can be fetched one page at a time.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    /// Fetch a single page, newest first.
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Self::Item>>;

    /// Numeric id of an item, used to derive the next cursor.
    fn item_id(item: &Self::Item) -> Result<u64>;

    /// Default page size for unbounded fetches.
    fn page_size(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    Before(u64),
    Done,
}

/// Lazy page producer. Build a new one to restart from the newest page.
pub struct Pager<'a, S: PageSource> {
    source: &'a S,
    cursor: Cursor,
    pages_fetched: usize,
}

impl<'a, S: PageSource> Pager<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            cursor: Cursor::Start,
            pages_fetched: 0,
        }
    }

    /// Number of requests issued so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch the next page, or `None` once the collection is exhausted.
    ///
    /// An empty page ends the walk and is not returned.
    pub async fn next_page(&mut self) -> Result<Option<Vec<S::Item>>> {
        let max_id = match self.cursor {
            Cursor::Done => return Ok(None),
            Cursor::Start => None,
            Cursor::Before(id) => Some(id),
        };

        let page = self
            .source
            .fetch_page(PageRequest {
                max_id,
                limit: self.source.page_size(),
            })
            .await;
        self.pages_fetched += 1;

        let page = match page {
            Ok(page) => page,
            Err(e) => {
                self.cursor = Cursor::Done;
                return Err(e);
            }
        };

        let last = match page.last() {
            Some(last) => last,
            None => {
                self.cursor = Cursor::Done;
                return Ok(None);
            }
        };

        let last_id = S::item_id(last).inspect_err(|_| self.cursor = Cursor::Done)?;
        self.cursor = match last_id.checked_sub(1) {
            Some(next) => Cursor::Before(next),
            // Nothing can sort below id 0
            None => Cursor::Done,
        };
        tracing::debug!(
            "Page {} returned {} items, next max_id {:?}",
            self.pages_fetched,
            page.len(),
            self.cursor
        );

        Ok(Some(page))
    }
}

/// Fetch a whole collection, or only its newest `limit` items.
///
/// With a limit, exactly one request is made and whatever it returns is
/// the result. Without one, pages are accumulated in arrival order until an
/// empty page. Any error aborts the fetch.
pub async fn fetch_collection<S: PageSource>(
    source: &S,
    limit: Option<u32>,
) -> Result<Vec<S::Item>> {
    if let Some(limit) = limit {
        return source
            .fetch_page(PageRequest {
                max_id: None,
                limit,
            })
            .await;
    }

    let mut pager = Pager::new(source);
    let mut items = Vec::new();
    while let Some(page) = pager.next_page().await? {
        items.extend(page);
    }

    tracing::debug!(
        "Fetched {} items in {} requests",
        items.len(),
        pager.pages_fetched()
    );

    Ok(items)
}

/// Statuses posted by one account.
pub struct AccountStatuses<'a> {
    pub api: &'a MastodonApi,
    pub account_id: &'a str,
    pub page_size: u32,
}

#[async_trait]
impl PageSource for AccountStatuses<'_> {
    type Item = Status;

    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Status>> {
        self.api
            .account_statuses(self.account_id, request.max_id, request.limit)
            .await
    }

    fn item_id(item: &Status) -> Result<u64> {
        item.numeric_id()
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    /// In-memory collection with ids `n..=1`, newest first.
    struct FakeSource {
        ids: Vec<u64>,
        page_size: u32,
        fail_on_request: Option<usize>,
        requests: Mutex<Vec<PageRequest>>,
    }

    impl FakeSource {
        fn new(n: u64, page_size: u32) -> Self {
            Self {
                ids: (1..=n).rev().collect(),
                page_size,
                fail_on_request: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<PageRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for FakeSource {
        type Item = u64;

        async fn fetch_page(&self, request: PageRequest) -> Result<Vec<u64>> {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            if self.fail_on_request == Some(requests.len()) {
                return Err(Error::Api("HTTP 500".into()));
            }

            Ok(self
                .ids
                .iter()
                .copied()
                .filter(|id| request.max_id.map_or(true, |max| *id <= max))
                .take(request.limit as usize)
                .collect())
        }

        fn item_id(item: &u64) -> Result<u64> {
            Ok(*item)
        }

        fn page_size(&self) -> u32 {
            self.page_size
        }
    }

    #[tokio::test]
    async fn test_fetches_everything_without_duplicates() {
        let source = FakeSource::new(95, 20);

        let items = fetch_collection(&source, None).await.unwrap();

        assert_eq!(items.len(), 95);
        assert_eq!(items.first(), Some(&95));
        assert_eq!(items.last(), Some(&1));
        assert!(items.windows(2).all(|w| w[0] > w[1]));
        // 5 non-empty pages plus the terminating empty one
        assert_eq!(source.requests().len(), 6);
    }

    #[tokio::test]
    async fn test_cursor_is_last_id_minus_one() {
        let source = FakeSource::new(50, 20);
        let mut pager = Pager::new(&source);

        let first = pager.next_page().await.unwrap().unwrap();
        assert_eq!(first.last(), Some(&31));
        pager.next_page().await.unwrap().unwrap();

        let requests = source.requests();
        assert_eq!(requests[0].max_id, None);
        assert_eq!(requests[1].max_id, Some(30));
        assert_eq!(requests[1].limit, 20);
    }

    #[tokio::test]
    async fn test_limit_issues_single_request() {
        let source = FakeSource::new(100, 20);

        let items = fetch_collection(&source, Some(7)).await.unwrap();

        assert_eq!(items, vec![100, 99, 98, 97, 96, 95, 94]);
        let requests = source.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            PageRequest {
                max_id: None,
                limit: 7
            }
        );
    }

    #[tokio::test]
    async fn test_limit_larger_than_collection() {
        let source = FakeSource::new(3, 20);

        let items = fetch_collection(&source, Some(10)).await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let source = FakeSource::new(0, 20);

        let items = fetch_collection(&source, None).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_error_mid_walk_aborts() {
        let mut source = FakeSource::new(60, 20);
        source.fail_on_request = Some(2);

        assert!(fetch_collection(&source, None).await.is_err());
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_pager_stays_exhausted() {
        let source = FakeSource::new(5, 10);
        let mut pager = Pager::new(&source);

        assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(5));
        assert!(pager.next_page().await.unwrap().is_none());
        assert!(pager.next_page().await.unwrap().is_none());
        assert_eq!(pager.pages_fetched(), 2);
    }
}
