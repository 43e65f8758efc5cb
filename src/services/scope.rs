use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::AppError;

/// Lifetime of one view's requests. Dropping the scope cancels it, so a
/// torn-down view's pending fetch is abandoned instead of completing late.
#[derive(Debug, Default)]
pub struct FetchScope {
    token: CancellationToken,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nested scope, cancelled together with its parent.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Runs `fut` unless the scope is cancelled first; the losing future is
    /// dropped.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("fetch abandoned by cancelled scope");
                Err(AppError::Cancelled)
            }
            result = fut => result,
        }
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
