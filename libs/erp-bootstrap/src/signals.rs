//! Process signals driving graceful shutdown.

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Spawn a task that cancels `cancel` on the first SIGINT or SIGTERM.
pub fn cancel_on_signal(cancel: CancellationToken) {
    tokio::spawn(cancel_when_signalled(cancel));
}

/// Resolve once a termination signal has cancelled `cancel`, or as soon as
/// something else cancels it.
async fn cancel_when_signalled(cancel: CancellationToken) {
    let received = tokio::select! {
        () = cancel.cancelled() => return,
        () = interrupt() => "SIGINT",
        () = terminate() => "SIGTERM",
    };

    tracing::info!(signal = received, "shutdown signal received, draining connections");
    cancel.cancel();
}

async fn interrupt() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "SIGINT handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn idle_waiter_leaves_token_alone() {
        let cancel = CancellationToken::new();
        let waiter = tokio::spawn(cancel_when_signalled(cancel.clone()));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!cancel.is_cancelled());
        assert!(!waiter.is_finished());

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter stops once the token is cancelled")
            .unwrap();
    }
}
