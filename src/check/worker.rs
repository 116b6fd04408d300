//! Check Worker Thread
//!
//! Runs flower checks in a background thread so the UI never blocks on the
//! network. Requests arrive over a channel, responses go back tagged with the
//! request id they answer.
//!
//! The thread owns a single-threaded tokio runtime for the async HTTP client.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::{QueryClient, QueryError, Verdict};

/// Request from the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckRequest {
    Check { flower: String, request_id: u64 },
}

/// Response to the UI thread
#[derive(Debug)]
pub enum CheckResponse {
    Verdict { request_id: u64, verdict: Verdict },
    Failed { request_id: u64, error: QueryError },
    /// The worker died; whatever is in flight will never be answered
    WorkerCrashed(String),
}

/// Spawn the check worker thread
///
/// The thread exits when `request_rx` is closed. A client that failed to
/// build is reported on every request instead of killing the thread.
pub fn spawn_worker(
    client_result: Result<QueryClient, QueryError>,
    request_rx: Receiver<CheckRequest>,
    response_tx: Sender<CheckResponse>,
) {
    std::thread::spawn(move || {
        let crash_tx = response_tx.clone();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {}", e);
                    let _ = response_tx.send(CheckResponse::WorkerCrashed(format!(
                        "Failed to start network worker: {}",
                        e
                    )));
                    return;
                }
            };

            rt.block_on(worker_loop(client_result, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Check worker thread panicked: {}", panic_msg);
            let _ = crash_tx.send(CheckResponse::WorkerCrashed(panic_msg));
        }
    });
}

/// Process requests until the channel is closed
///
/// Blocking `recv()` is fine here since this runs on a dedicated thread.
async fn worker_loop(
    client_result: Result<QueryClient, QueryError>,
    request_rx: Receiver<CheckRequest>,
    response_tx: Sender<CheckResponse>,
) {
    let client = match client_result {
        Ok(client) => Ok(client),
        Err(e) => {
            log::error!("HTTP client unavailable: {}", e);
            Err(e.to_string())
        }
    };

    while let Ok(request) = request_rx.recv() {
        match request {
            CheckRequest::Check { flower, request_id } => {
                let response = handle_check_async(&client, &flower, request_id).await;
                if response_tx.send(response).is_err() {
                    // UI thread is gone
                    break;
                }
            }
        }
    }

    log::debug!("Check worker shutting down");
}

async fn handle_check_async(
    client: &Result<QueryClient, String>,
    flower: &str,
    request_id: u64,
) -> CheckResponse {
    let client = match client {
        Ok(client) => client,
        Err(message) => {
            return CheckResponse::Failed {
                request_id,
                error: QueryError::Network {
                    message: message.clone(),
                },
            };
        }
    };

    match client.check(flower).await {
        Ok(verdict) => {
            log::debug!(
                "Request {} resolved: {} verified={}",
                request_id,
                verdict.flower,
                verdict.verified
            );
            CheckResponse::Verdict {
                request_id,
                verdict,
            }
        }
        Err(error) => {
            log::debug!("Request {} failed: {}", request_id, error);
            CheckResponse::Failed { request_id, error }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
