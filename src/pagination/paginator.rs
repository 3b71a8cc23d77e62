//! Cursor paginator
//!
//! Drives sequential page fetches until the server returns an empty page,
//! flattening the pages into one lazy stream of records.

use super::types::{Direction, Identified, PageRequest, PageSource, PaginationState};
use crate::error::{Error, Result};
use crate::types::Snowflake;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use std::pin::Pin;
use tracing::{debug, warn};

/// Page size used when none is given
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Type alias for the record stream returned by a paginator
pub type PageStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// Cursor pagination settings for one run
///
/// ```rust,ignore
/// let guilds = Paginator::after(100).paginate(fetch, |g: &UserGuildData| g.id.as_u64())?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Side of the cursor to walk
    pub direction: Direction,
    /// Records requested per page
    pub page_size: u32,
    /// Initial cursor
    pub start: Snowflake,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::after(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Walk forward from the start cursor
    pub fn after(page_size: u32) -> Self {
        Self {
            direction: Direction::After,
            page_size,
            start: Snowflake::ZERO,
        }
    }

    /// Walk backward from the start cursor
    pub fn before(page_size: u32) -> Self {
        Self {
            direction: Direction::Before,
            page_size,
            start: Snowflake::ZERO,
        }
    }

    /// Set the initial cursor
    #[must_use]
    pub fn start(mut self, start: Snowflake) -> Self {
        self.start = start;
        self
    }

    /// Request for the given cursor
    pub fn request(&self, cursor: Snowflake) -> PageRequest {
        match self.direction {
            Direction::After => PageRequest::after(cursor, self.page_size),
            Direction::Before => PageRequest::before(cursor, self.page_size),
        }
    }

    /// Stream every record from `source`, using `id_of` to move the cursor
    ///
    /// Nothing is fetched until the stream is polled. Each further page is
    /// fetched only once the previous page has been fully consumed, so
    /// dropping the stream stops pagination.
    pub fn paginate<T, S, I>(self, source: S, id_of: I) -> Result<PageStream<T>>
    where
        T: Send + 'static,
        S: PageSource<T> + 'static,
        I: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize {
                size: self.page_size,
            });
        }

        let run = Run {
            paginator: self,
            source,
            id_of,
            state: PaginationState::starting_at(self.start),
        };

        let pages = stream::try_unfold(run, |mut run| async move {
            let page = run.next_page().await?;
            Ok::<_, Error>(page.map(|page| (page, run)))
        });

        Ok(pages
            .map_ok(|page| stream::iter(page.into_iter().map(Ok::<T, Error>)))
            .try_flatten()
            .boxed())
    }

    /// Stream every record of a type that knows its own ID
    pub fn paginate_identified<T, S>(self, source: S) -> Result<PageStream<T>>
    where
        T: Identified + Send + 'static,
        S: PageSource<T> + 'static,
    {
        self.paginate(source, |record: &T| record.id().as_u64())
    }
}

/// State owned by one pagination run
struct Run<S, I> {
    paginator: Paginator,
    source: S,
    id_of: I,
    state: PaginationState,
}

impl<S, I> Run<S, I> {
    /// Fetch the next page, or `None` once the server is exhausted
    async fn next_page<T>(&mut self) -> Result<Option<Vec<T>>>
    where
        S: PageSource<T>,
        I: Fn(&T) -> u64,
    {
        if self.state.done {
            return Ok(None);
        }

        let request = self.paginator.request(self.state.cursor);
        let page = match self.source.fetch_page(request).await {
            Ok(page) => page,
            Err(e) => {
                self.state.mark_done();
                debug!(
                    "Page fetch failed at {}={}: {}",
                    request.direction(),
                    request.cursor(),
                    e
                );
                return Err(e);
            }
        };
        self.state.add_page(page.len());

        let Some(last) = page.last() else {
            self.state.mark_done();
            debug!(
                "Pagination exhausted after {} pages, {} records",
                self.state.pages, self.state.total_fetched
            );
            return Ok(None);
        };

        let next = Snowflake::new((self.id_of)(last));
        if !self.paginator.direction.advances(self.state.cursor, next) {
            warn!(
                "Cursor did not move {}: {} -> {}",
                self.paginator.direction, self.state.cursor, next
            );
        }
        debug!(
            "Fetched page {} ({} records) at {}={}, next cursor {}",
            self.state.pages,
            page.len(),
            request.direction(),
            request.cursor(),
            next
        );
        self.state.set_cursor(next);

        Ok(Some(page))
    }
}

/// Stream all records after `start`, `page_size` at a time
pub fn paginate_after<T, S, I>(
    fetch: S,
    id_of: I,
    start: u64,
    page_size: u32,
) -> Result<PageStream<T>>
where
    T: Send + 'static,
    S: PageSource<T> + 'static,
    I: Fn(&T) -> u64 + Send + Sync + 'static,
{
    Paginator::after(page_size).start(Snowflake::new(start)).paginate(fetch, id_of)
}

/// Stream all records before `start`, `page_size` at a time
pub fn paginate_before<T, S, I>(
    fetch: S,
    id_of: I,
    start: u64,
    page_size: u32,
) -> Result<PageStream<T>>
where
    T: Send + 'static,
    S: PageSource<T> + 'static,
    I: Fn(&T) -> u64 + Send + Sync + 'static,
{
    Paginator::before(page_size).start(Snowflake::new(start)).paginate(fetch, id_of)
}
