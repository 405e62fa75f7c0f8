//! Shutdown-triggered cleanup — accounting records must not outlive the
//! hosting process.
//!
//! Registration is process-wide and one-shot: the first call spawns a task
//! waiting for SIGINT/SIGTERM, every later call is a no-op. It is invoked
//! lazily from the first read of the store rather than at startup, so
//! invocations that never touch the store install no signal handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::store::RecordStore;

static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Returns true for exactly one caller per process.
fn claim_registration() -> bool {
    !REGISTERED.swap(true, Ordering::SeqCst)
}

/// Register the shutdown cleanup for `store`. Idempotent; must be called
/// from within a tokio runtime.
pub fn register(store: Arc<dyn RecordStore>) {
    if !claim_registration() {
        return;
    }

    tokio::spawn(async move {
        wait_for_termination().await;
        tracing::info!("termination signal received, clearing accounting records");
        if let Err(e) = store.clear() {
            tracing::error!(error = %e, "failed to clear accounting records on shutdown");
        }
        // The signal was intercepted; finish terminating the process.
        std::process::exit(0);
    });
    tracing::info!("shutdown cleanup registered for accounting records");
}

/// Resolve on SIGINT (ctrl-c) or, on unix, SIGTERM.
async fn wait_for_termination() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            // Handler could not be installed; never resolves.
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_claimed_exactly_once() {
        // First claim wins, every later claim is refused. Process-global, so
        // this is the only test allowed to touch the flag.
        assert!(claim_registration());
        assert!(!claim_registration());
        assert!(!claim_registration());
    }
}
