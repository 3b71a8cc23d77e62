//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use crate::types::Snowflake;
use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio_test::assert_ok;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    id: u64,
}

impl Identified for Record {
    fn id(&self) -> Snowflake {
        Snowflake::new(self.id)
    }
}

fn records(ids: &[u64]) -> Vec<Record> {
    ids.iter().map(|&id| Record { id }).collect()
}

type Fetch = Box<dyn Fn(PageRequest) -> BoxFuture<'static, Result<Vec<Record>>> + Send + Sync>;

/// Answers requests from a fixed, ID-ordered record set
#[derive(Clone, Default)]
struct FakeServer {
    records: Arc<Vec<Record>>,
    calls: Arc<Mutex<Vec<PageRequest>>>,
    fail_on_call: Option<usize>,
}

impl FakeServer {
    fn with_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            records: Arc::new(ids.into_iter().map(|id| Record { id }).collect()),
            ..Default::default()
        }
    }

    fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn serve(&self, request: PageRequest) -> Result<Vec<Record>> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(request);
        if Some(calls.len()) == self.fail_on_call {
            return Err(Error::http_status(500, "Internal Server Error"));
        }

        let cursor = request.cursor().as_u64();
        let limit = request.limit() as usize;
        let page = match request.direction() {
            Direction::After => self
                .records
                .iter()
                .filter(|r| r.id > cursor)
                .take(limit)
                .cloned()
                .collect(),
            Direction::Before => self
                .records
                .iter()
                .rev()
                .filter(|r| r.id < cursor)
                .take(limit)
                .cloned()
                .collect(),
        };
        Ok(page)
    }

    /// Size of the page `request` would get, without counting it as a call
    fn page_len(&self, request: PageRequest) -> usize {
        let cursor = request.cursor().as_u64();
        self.records
            .iter()
            .filter(|r| r.id > cursor)
            .take(request.limit() as usize)
            .count()
    }

    fn source(&self) -> Fetch {
        let server = self.clone();
        Box::new(move |request: PageRequest| {
            let server = server.clone();
            async move { server.serve(request) }.boxed()
        })
    }
}

/// Hands out a fixed script of pages, one per call
fn scripted(pages: Vec<Result<Vec<Record>>>) -> (Fetch, Arc<Mutex<Vec<PageRequest>>>) {
    let script = Arc::new(Mutex::new(VecDeque::from(pages)));
    let calls = Arc::new(Mutex::new(Vec::new()));
    let seen = calls.clone();
    let fetch: Fetch = Box::new(move |request: PageRequest| {
        seen.lock().unwrap().push(request);
        let next = script.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()));
        async move { next }.boxed()
    });
    (fetch, calls)
}

fn after(cursor: u64, limit: u32) -> PageRequest {
    PageRequest::after(Snowflake::new(cursor), limit)
}

fn before(cursor: u64, limit: u32) -> PageRequest {
    PageRequest::before(Snowflake::new(cursor), limit)
}

fn id_of(record: &Record) -> u64 {
    record.id
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_page_request_after_params() {
    let request = after(0, 100);
    let params = request.params();

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("after"), Some(&"0".to_string()));
    assert_eq!(params.get("limit"), Some(&"100".to_string()));
    assert!(!params.contains_key("before"));
}

#[test]
fn test_page_request_before_params() {
    let request = before(900, 50);

    let params = request.params();

    assert_eq!(request.direction(), Direction::Before);
    assert_eq!(params.get("before"), Some(&"900".to_string()));
    assert_eq!(params.get("limit"), Some(&"50".to_string()));
    assert!(!params.contains_key("after"));
}

#[test]
fn test_direction_advances() {
    let low = Snowflake::new(1);
    let high = Snowflake::new(2);

    assert!(Direction::After.advances(low, high));
    assert!(!Direction::After.advances(high, low));
    assert!(!Direction::After.advances(high, high));
    assert!(Direction::Before.advances(high, low));
    assert!(!Direction::Before.advances(low, high));
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::starting_at(Snowflake::new(10));
    assert_eq!(state.cursor, Snowflake::new(10));
    assert_eq!(state.pages, 0);
    assert!(!state.done);

    state.add_page(25);
    state.add_page(0);
    assert_eq!(state.pages, 2);
    assert_eq!(state.total_fetched, 25);

    state.set_cursor(Snowflake::new(35));
    assert_eq!(state.cursor, Snowflake::new(35));

    state.mark_done();
    assert!(state.done);
}

#[test]
fn test_paginator_builder() {
    let paginator = Paginator::before(50).start(Snowflake::new(77));
    assert_eq!(paginator.direction, Direction::Before);
    assert_eq!(paginator.page_size, 50);
    assert_eq!(paginator.start, Snowflake::new(77));
    assert_eq!(paginator.request(Snowflake::new(5)), before(5, 50));

    let default = Paginator::default();
    assert_eq!(default.direction, Direction::After);
    assert_eq!(default.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(default.start, Snowflake::ZERO);
}

#[test]
fn test_zero_page_size_rejected() {
    let server = FakeServer::with_ids(1..=3);
    let result = paginate_after(server.source(), id_of, 0, 0);

    assert!(matches!(result, Err(Error::InvalidPageSize { size: 0 })));
    assert!(server.calls().is_empty());
}

// ============================================================================
// Paging Protocol Tests
// ============================================================================

#[tokio::test]
async fn test_yields_concatenation_of_pages() {
    let (fetch, calls) = scripted(vec![
        Ok(records(&[1, 2, 3])),
        Ok(records(&[4, 5])),
        Ok(records(&[6])),
        Ok(Vec::new()),
    ]);

    let all: Vec<Record> = paginate_after(fetch, id_of, 0, 3)
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(all, records(&[1, 2, 3, 4, 5, 6]));
    assert_eq!(calls.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn test_cursor_follows_last_record_of_previous_page() {
    let (fetch, calls) = scripted(vec![
        Ok(records(&[10, 20, 30])),
        Ok(records(&[31, 45])),
        Ok(Vec::new()),
    ]);

    let count = paginate_after(fetch, id_of, 7, 3)
        .unwrap()
        .try_fold(0, |n, _| async move { Ok(n + 1) })
        .await
        .unwrap();
    assert_eq!(count, 5);

    let calls = calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            after(7, 3),
            after(30, 3),
            after(45, 3),
        ]
    );
}

#[tokio::test]
async fn test_empty_first_page_yields_nothing() {
    let server = FakeServer::with_ids(Vec::new());

    let all: Vec<Record> = paginate_after(server.source(), id_of, 0, 100)
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert!(all.is_empty());
    assert_eq!(server.calls(), vec![after(0, 100)]);
}

#[tokio::test]
async fn test_fetch_failure_ends_stream() {
    let server = FakeServer::with_ids(1..=10).failing_on(2);
    let mut stream = paginate_after(server.source(), id_of, 0, 4).unwrap();

    let mut seen = Vec::new();
    let mut error = None;
    while let Some(item) = stream.next().await {
        match item {
            Ok(record) => seen.push(record.id),
            Err(e) => error = Some(e),
        }
    }

    assert_eq!(seen, vec![1, 2, 3, 4]);
    let error = error.expect("expected the second fetch to fail");
    assert_eq!(error.status(), Some(500));
    // no third fetch after the failure
    assert_eq!(server.calls().len(), 2);
    assert!(stream.next().await.is_none());
    assert_eq!(server.calls().len(), 2);
}

#[tokio::test]
async fn test_failure_on_first_page() {
    let (fetch, calls) = scripted(vec![Err(Error::http_status(401, "401: Unauthorized"))]);
    let mut stream = paginate_after(fetch, id_of, 0, 100).unwrap();

    let first = stream.next().await.unwrap();
    assert!(matches!(first, Err(Error::HttpStatus { status: 401, .. })));
    assert!(stream.next().await.is_none());
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_250_records_in_pages_of_100() {
    let server = FakeServer::with_ids(1..=250);

    let all: Vec<Record> = paginate_after(server.source(), id_of, 0, 100)
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(all.len(), 250);
    assert_eq!(all.first().map(|r| r.id), Some(1));
    assert_eq!(all.last().map(|r| r.id), Some(250));

    let calls = server.calls();
    assert_eq!(
        calls,
        vec![
            after(0, 100),
            after(100, 100),
            after(200, 100),
            after(250, 100),
        ]
    );
    let sizes: Vec<usize> = calls
        .iter()
        .map(|c| server.page_len(*c))
        .collect();
    assert_eq!(sizes, vec![100, 100, 50, 0]);
}

// ============================================================================
// Laziness and Cancellation Tests
// ============================================================================

#[tokio::test]
async fn test_nothing_fetched_until_polled() {
    let server = FakeServer::with_ids(1..=5);
    let stream = paginate_after(server.source(), id_of, 0, 2).unwrap();

    assert!(server.calls().is_empty());
    drop(stream);
    assert!(server.calls().is_empty());
}

#[tokio::test]
async fn test_stopping_after_first_page_issues_no_more_fetches() {
    let server = FakeServer::with_ids(1..=250);

    let first_page: Vec<Record> = paginate_after(server.source(), id_of, 0, 100)
        .unwrap()
        .take(100)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(first_page.len(), 100);
    assert_eq!(server.calls(), vec![after(0, 100)]);
}

#[tokio::test]
async fn test_next_page_fetched_only_after_buffer_drained() {
    let server = FakeServer::with_ids(1..=6);
    let mut stream = paginate_after(server.source(), id_of, 0, 3).unwrap();

    for expected in 1..=3 {
        let record = assert_ok!(stream.next().await.unwrap());
        assert_eq!(record.id, expected);
        assert_eq!(server.calls().len(), 1);
    }

    let record = stream.next().await.unwrap().unwrap();
    assert_eq!(record.id, 4);
    assert_eq!(server.calls().len(), 2);
}

#[tokio::test]
async fn test_dropping_stream_cancels_in_flight_fetch() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let in_flight = Arc::new(());
    let gate = Arc::new(Notify::new());

    let fetch = {
        let calls = calls.clone();
        let in_flight = in_flight.clone();
        let gate = gate.clone();
        move |request: PageRequest| {
            let call = {
                let mut calls = calls.lock().unwrap();
                calls.push(request);
                calls.len()
            };
            let guard = in_flight.clone();
            let gate = gate.clone();
            async move {
                let _guard = guard;
                if call > 1 {
                    // never notified
                    gate.notified().await;
                }
                Ok::<_, Error>(records(&[1, 2]))
            }
        }
    };

    let mut stream = paginate_after(fetch, id_of, 0, 2).unwrap();
    assert_eq!(stream.next().await.unwrap().unwrap().id, 1);
    assert_eq!(stream.next().await.unwrap().unwrap().id, 2);

    let pending = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;
    assert!(pending.is_err());
    // test handle + the source closure + the parked second fetch
    assert_eq!(Arc::strong_count(&in_flight), 3);

    drop(stream);

    assert_eq!(Arc::strong_count(&in_flight), 1);
    assert_eq!(calls.lock().unwrap().clone(), vec![after(0, 2), after(2, 2)]);
}

#[tokio::test]
async fn test_independent_streams_do_not_interact() {
    let server = FakeServer::with_ids(1..=4);
    let mut a = paginate_after(server.source(), id_of, 0, 2).unwrap();
    let mut b = paginate_after(server.source(), id_of, 2, 2).unwrap();

    assert_eq!(a.next().await.unwrap().unwrap().id, 1);
    assert_eq!(b.next().await.unwrap().unwrap().id, 3);
    assert_eq!(a.next().await.unwrap().unwrap().id, 2);
    assert_eq!(a.next().await.unwrap().unwrap().id, 3);

    assert_eq!(
        server.calls(),
        vec![
            after(0, 2),
            after(2, 2),
            after(2, 2),
        ]
    );
}

// ============================================================================
// Direction and Ordering Tests
// ============================================================================

#[tokio::test]
async fn test_before_walks_toward_older_ids() {
    let server = FakeServer::with_ids(1..=5);

    let ids: Vec<u64> = paginate_before(server.source(), id_of, 100, 2)
        .unwrap()
        .map_ok(|r| r.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    assert_eq!(
        server.calls(),
        vec![
            before(100, 2),
            before(4, 2),
            before(2, 2),
            before(1, 2),
        ]
    );
}

#[tokio::test]
async fn test_paginate_identified() {
    let server = FakeServer::with_ids([3, 8, 13]);

    let ids: Vec<u64> = Paginator::after(2)
        .paginate_identified(server.source())
        .unwrap()
        .map_ok(|r| r.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec![3, 8, 13]);
    assert_eq!(server.calls().len(), 3);
}

#[tokio::test]
async fn test_out_of_order_page_is_passed_through() {
    let (fetch, calls) = scripted(vec![Ok(records(&[50, 20])), Ok(Vec::new())]);

    let ids: Vec<u64> = paginate_after(fetch, id_of, 0, 2)
        .unwrap()
        .map_ok(|r| r.id)
        .try_collect()
        .await
        .unwrap();

    // Not sorted or deduplicated; cursor takes the last record's ID
    assert_eq!(ids, vec![50, 20]);
    assert_eq!(
        calls.lock().unwrap().clone(),
        vec![after(0, 2), after(20, 2)]
    );
}

#[tokio::test]
async fn test_server_echoing_cursor_repeats_request_until_caller_stops() {
    let server = FakeServer::default();
    let calls = server.calls.clone();
    let fetch = move |request: PageRequest| {
        calls.lock().unwrap().push(request);
        async move { Ok::<_, Error>(records(&[5])) }
    };

    let ids: Vec<u64> = paginate_after(fetch, id_of, 5, 10)
        .unwrap()
        .take(3)
        .map_ok(|r| r.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec![5, 5, 5]);
    assert_eq!(server.calls(), vec![after(5, 10); 3]);
}
