// src/application/scope.rs
//
// Ties in-flight calls to the lifetime of the view that started them.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Lifetime of one view (dialog, page, table).
///
/// Results of calls run through `run` are dropped once the scope closes,
/// so a dismissed dialog never applies a stale result. A request that
/// already reached the backend may still take effect there.
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Scope closed together with this one (and on its own).
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token for work that wants to watch the scope itself.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// `Some(output)` if the scope is still open when `future` completes.
    pub async fn run<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                log::debug!("View closed, dropping in-flight result");
                None
            }
            output = future => {
                if self.token.is_cancelled() {
                    None
                } else {
                    Some(output)
                }
            }
        }
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
