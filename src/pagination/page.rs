//! A page of results bound to the fetcher that produced it

use super::types::{Listing, RawPage};
use crate::error::{Error, Result};
use crate::http::{Fetcher, HttpClient};
use crate::types::StringMap;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

/// One page of a list endpoint.
///
/// Pages are immutable. The fetcher is held weakly: a page never keeps the
/// client alive, and advancing a page whose client is gone fails with
/// [`Error::FetcherClosed`].
pub struct Page<T, F = HttpClient> {
    items: Vec<T>,
    ranking: Vec<T>,
    next_url: Option<String>,
    search_span_limit: Option<u64>,
    fetcher: Weak<F>,
}

impl<T, F> Page<T, F> {
    fn from_raw(raw: RawPage<T>, fetcher: Weak<F>) -> Self {
        Self {
            items: raw.items,
            ranking: raw.ranking,
            next_url: raw.next_url,
            search_span_limit: raw.search_span_limit,
            fetcher,
        }
    }

    /// Items in the order the server returned them
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Ranking works sent with recommendation queries (illusts and novels only)
    pub fn ranking(&self) -> &[T] {
        &self.ranking
    }

    /// Cursor of the next page, if there is one
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// Whether `advance` can fetch another page
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }

    pub fn search_span_limit(&self) -> Option<u64> {
        self.search_span_limit
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this page resolves its cursor through `fetcher`
    pub fn is_bound_to(&self, fetcher: &Arc<F>) -> bool {
        std::ptr::eq(self.fetcher.as_ptr(), Arc::as_ptr(fetcher))
    }

    /// Consume the page, keeping only its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Listing, F: Fetcher> Page<T, F> {
    /// Request `url` and bind the decoded page to `fetcher`
    pub async fn fetch(fetcher: &Arc<F>, url: &str, query: Option<&StringMap>) -> Result<Self> {
        let raw: RawPage<T> = fetcher.get(url, query).await?;
        debug!(
            kind = T::ITEMS_KEY,
            items = raw.items.len(),
            ranking = raw.ranking.len(),
            has_next = raw.next_url.is_some(),
            "Decoded page"
        );
        Ok(Self::from_raw(raw, Arc::downgrade(fetcher)))
    }

    /// Fetch the page behind this page's cursor.
    ///
    /// Fails with [`Error::EmptyCursor`] without any I/O when there is no
    /// cursor. Fetch and decode errors are returned as they are; `self` is
    /// left untouched either way.
    pub async fn advance(&self) -> Result<Self> {
        let next_url = self.next_url.as_deref().ok_or(Error::EmptyCursor)?;
        follow(&self.fetcher, next_url).await
    }

    /// Walk the traversal starting at this page.
    ///
    /// Yields this page first, then one page per cursor. Ends after the page
    /// without a cursor, or right after yielding the first error.
    pub fn into_pages(self) -> impl Stream<Item = Result<Self>> {
        stream::unfold(Traversal::Ready(self), |state| async move {
            match state {
                Traversal::Ready(page) => {
                    let next = Traversal::after(&page);
                    Some((Ok(page), next))
                }
                Traversal::Pending { next_url, fetcher } => {
                    match follow(&fetcher, &next_url).await {
                        Ok(page) => {
                            let next = Traversal::after(&page);
                            Some((Ok(page), next))
                        }
                        Err(e) => Some((Err(e), Traversal::Finished)),
                    }
                }
                Traversal::Finished => None,
            }
        })
    }

    /// Walk the traversal starting at this page, item by item
    pub fn into_item_stream(self) -> impl Stream<Item = Result<T>> {
        self.into_pages()
            .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<T, Error>)))
            .try_flatten()
    }

    /// Collect up to `max_pages` pages of items, starting with this page
    pub async fn collect_items(self, max_pages: usize) -> Result<Vec<T>> {
        let pages: Vec<Self> = self.into_pages().take(max_pages).try_collect().await?;
        Ok(pages.into_iter().flat_map(Page::into_items).collect())
    }
}

/// Fetch `next_url` through a weakly held fetcher, with no extra parameters
async fn follow<T: Listing, F: Fetcher>(fetcher: &Weak<F>, next_url: &str) -> Result<Page<T, F>> {
    let fetcher = fetcher.upgrade().ok_or(Error::FetcherClosed)?;
    debug!(next_url, "Advancing page");
    Page::fetch(&fetcher, next_url, None).await
}

enum Traversal<T, F> {
    Ready(Page<T, F>),
    Pending { next_url: String, fetcher: Weak<F> },
    Finished,
}

impl<T, F> Traversal<T, F> {
    fn after(page: &Page<T, F>) -> Self {
        match &page.next_url {
            Some(next_url) => Traversal::Pending {
                next_url: next_url.clone(),
                fetcher: page.fetcher.clone(),
            },
            None => Traversal::Finished,
        }
    }
}

impl<T: Clone, F> Clone for Page<T, F> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            ranking: self.ranking.clone(),
            next_url: self.next_url.clone(),
            search_span_limit: self.search_span_limit,
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Page<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("items", &self.items)
            .field("ranking", &self.ranking)
            .field("next_url", &self.next_url)
            .field("search_span_limit", &self.search_span_limit)
            .field("fetcher_alive", &(self.fetcher.strong_count() > 0))
            .finish()
    }
}
