//! Pagination types and traits
//!
//! Defines the request, state and source abstractions the page stream is
//! built from.

use crate::error::Result;
use crate::types::Snowflake;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

/// Which side of the cursor a page is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Records with IDs greater than the cursor, oldest first
    #[default]
    After,
    /// Records with IDs smaller than the cursor, newest first
    Before,
}

impl Direction {
    /// Query parameter name for the cursor
    pub fn param(self) -> &'static str {
        match self {
            Self::After => "after",
            Self::Before => "before",
        }
    }

    /// Whether moving the cursor from `from` to `to` goes the expected way
    pub fn advances(self, from: Snowflake, to: Snowflake) -> bool {
        match self {
            Self::After => to > from,
            Self::Before => to < from,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

/// Parameters for a single page fetch
///
/// Always renders both the cursor key and the `limit` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    direction: Direction,
    cursor: Snowflake,
    limit: u32,
}

impl PageRequest {
    /// Request the page after `cursor`
    pub fn after(cursor: Snowflake, limit: u32) -> Self {
        Self {
            direction: Direction::After,
            cursor,
            limit,
        }
    }

    /// Request the page before `cursor`
    pub fn before(cursor: Snowflake, limit: u32) -> Self {
        Self {
            direction: Direction::Before,
            cursor,
            limit,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cursor(&self) -> Snowflake {
        self.cursor
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Render as query parameters
    pub fn params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(self.direction.param().to_string(), self.cursor.to_string());
        params.insert(LIMIT_PARAM.to_string(), self.limit.to_string());
        params
    }
}

/// Tracks pagination progress during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next request
    pub cursor: Snowflake,
    /// Pages fetched so far, the terminating empty page included
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a state starting at the given cursor
    pub fn starting_at(cursor: Snowflake) -> Self {
        Self {
            cursor,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Record a fetched page of `count` records
    pub fn add_page(&mut self, count: usize) {
        self.pages += 1;
        self.total_fetched += count as u64;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: Snowflake) {
        self.cursor = cursor;
    }
}

/// Records that carry their own snowflake
pub trait Identified {
    fn id(&self) -> Snowflake;
}

/// Something that can fetch one page of records
///
/// Implemented for any `Fn(PageRequest) -> impl Future<Output = Result<Vec<T>>>`
/// so services can be plugged in with a closure.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetch the page described by `request`
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<T>>;
}

#[async_trait]
impl<T, F, Fut> PageSource<T> for F
where
    T: Send + 'static,
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
{
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<T>> {
        (self)(request).await
    }
}
