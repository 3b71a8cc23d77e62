//! Pagination module
//!
//! Supports: After cursor, Before cursor
//!
//! # Overview
//!
//! List endpoints return at most `limit` records per call. The paginator
//! repeatedly asks for the page on one side of a snowflake cursor, moving
//! the cursor to the ID of the last record it received, and stops at the
//! first empty page. Records come out as a single lazy stream in the order
//! the server returned them.
//!
//! Records are neither sorted nor deduplicated. A server that returns IDs
//! out of order can make the cursor oscillate or skip records; this is
//! logged but not corrected.

mod paginator;
mod types;

pub use paginator::{paginate_after, paginate_before, PageStream, Paginator, DEFAULT_PAGE_SIZE};
pub use types::{Direction, Identified, PageRequest, PageSource, PaginationState, LIMIT_PARAM};

#[cfg(test)]
mod tests;
