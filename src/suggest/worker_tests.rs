//! Tests for the lookup worker thread

use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::test_utils::test_helpers::test_catalog;

const TIMEOUT: Duration = Duration::from_secs(5);

fn spawn_catalog_worker(
    latency_ms: u64,
) -> (
    tokio::sync::mpsc::UnboundedSender<WorkerRequest>,
    mpsc::Receiver<WorkerResponse>,
    JoinHandle<()>,
) {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let catalog = test_catalog().with_latency(Duration::from_millis(latency_ms));
    let handle = spawn_worker(Provider::Catalog(catalog), request_rx, response_tx).unwrap();
    (request_tx, response_rx, handle)
}

#[test]
fn test_worker_answers_search() {
    let (request_tx, response_rx, _handle) = spawn_catalog_worker(0);

    request_tx
        .send(WorkerRequest::Search {
            term: "milk".to_string(),
            request_id: 7,
        })
        .unwrap();

    match response_rx.recv_timeout(TIMEOUT).unwrap() {
        WorkerResponse::Suggestions { request_id, result } => {
            assert_eq!(request_id, 7);
            let items = result.unwrap();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "Milk, whole");
        }
        other => panic!("Expected suggestions, got {:?}", other),
    }
}

#[test]
fn test_worker_answers_detail_not_found() {
    let (request_tx, response_rx, _handle) = spawn_catalog_worker(0);

    request_tx
        .send(WorkerRequest::Detail {
            name: "Mystery".to_string(),
            request_id: 1,
        })
        .unwrap();

    match response_rx.recv_timeout(TIMEOUT).unwrap() {
        WorkerResponse::Detail { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(
                result.unwrap_err(),
                ProviderError::NotFound("Mystery".to_string())
            );
        }
        other => panic!("Expected detail, got {:?}", other),
    }
}

#[test]
fn test_newer_search_cancels_older() {
    let (request_tx, response_rx, _handle) = spawn_catalog_worker(200);

    request_tx
        .send(WorkerRequest::Search {
            term: "egg".to_string(),
            request_id: 1,
        })
        .unwrap();
    request_tx
        .send(WorkerRequest::Search {
            term: "milk".to_string(),
            request_id: 2,
        })
        .unwrap();

    match response_rx.recv_timeout(TIMEOUT).unwrap() {
        WorkerResponse::Suggestions { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.unwrap_err(), ProviderError::Cancelled);
        }
        other => panic!("Expected cancelled lookup, got {:?}", other),
    }

    match response_rx.recv_timeout(TIMEOUT).unwrap() {
        WorkerResponse::Suggestions { request_id, result } => {
            assert_eq!(request_id, 2);
            assert!(result.is_ok());
        }
        other => panic!("Expected suggestions, got {:?}", other),
    }
}

#[test]
fn test_search_does_not_cancel_detail() {
    let (request_tx, response_rx, _handle) = spawn_catalog_worker(50);

    request_tx
        .send(WorkerRequest::Detail {
            name: "Egg, whole".to_string(),
            request_id: 1,
        })
        .unwrap();
    request_tx
        .send(WorkerRequest::Search {
            term: "milk".to_string(),
            request_id: 1,
        })
        .unwrap();

    let mut detail_ok = false;
    for _ in 0..2 {
        if let WorkerResponse::Detail { result, .. } = response_rx.recv_timeout(TIMEOUT).unwrap() {
            detail_ok = result.is_ok();
        }
    }
    assert!(detail_ok);
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, _response_rx, handle) = spawn_catalog_worker(0);

    // Drop the sender to close the channel
    drop(request_tx);

    // Worker should exit cleanly
    handle.join().expect("Worker thread should exit cleanly");
}

#[test]
fn test_supersede_cancels_previous_token() {
    let mut slot = None;
    let first = supersede(&mut slot);
    assert!(!first.is_cancelled());

    let second = supersede(&mut slot);
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}
