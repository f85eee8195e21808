//! Lookup worker thread
//!
//! Runs provider calls on a current-thread tokio runtime in the background so the UI
//! loop never blocks on the network. Each request becomes its own task, which means
//! responses can resolve in any order; the controller sorts that out by request id.
//! A newer request of the same kind cancels the previous task to save the round trip.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::controller::{WorkerRequest, WorkerResponse};
use crate::provider::{Provider, ProviderError};

/// Spawn the lookup worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    provider: Provider,
    request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("food-lookup".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to start lookup runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(worker_loop(Arc::new(provider), request_rx, response_tx));
        })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    provider: Arc<Provider>,
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    let mut search_token: Option<CancellationToken> = None;
    let mut detail_token: Option<CancellationToken> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            WorkerRequest::Search { term, request_id } => {
                let token = supersede(&mut search_token);
                let provider = Arc::clone(&provider);
                let response_tx = response_tx.clone();

                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => Err(ProviderError::Cancelled),
                        result = provider.search(&term) => result,
                    };
                    log::debug!("Lookup {} for {:?} finished", request_id, term);
                    let _ = response_tx.send(WorkerResponse::Suggestions { request_id, result });
                });
            }
            WorkerRequest::Detail { name, request_id } => {
                let token = supersede(&mut detail_token);
                let provider = Arc::clone(&provider);
                let response_tx = response_tx.clone();

                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => Err(ProviderError::Cancelled),
                        result = provider.fetch_detail(&name) => result,
                    };
                    log::debug!("Detail {} for {:?} finished", request_id, name);
                    let _ = response_tx.send(WorkerResponse::Detail { request_id, result });
                });
            }
        }
    }

    log::debug!("Lookup worker shutting down");
}

/// Cancel the previous token in `slot` and install a fresh one
fn supersede(slot: &mut Option<CancellationToken>) -> CancellationToken {
    if let Some(previous) = slot.take() {
        previous.cancel();
    }
    let token = CancellationToken::new();
    *slot = Some(token.clone());
    token
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
