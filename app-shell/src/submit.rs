use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;

use crate::view::ViewState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no product URL entered")]
    EmptyUrl,
    #[error("a lookup is already in progress")]
    AlreadyLoading,
}

/// Shared cancellation flag for one submit run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    fn same_run(&self, other: &CancelToken) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Loading {
        url: String,
        token: CancelToken,
    },
}

/// Lifecycle of the "track price" form: idle -> loading -> (navigate | cancelled) -> idle.
#[derive(Debug, Clone, Default)]
pub struct SubmitTask {
    phase: Phase,
}

impl SubmitTask {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Enter the loading state for `url`. Blank input and a second submit while
    /// loading are rejected.
    pub fn begin(&mut self, url: &str) -> Result<CancelToken, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::AlreadyLoading);
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(SubmitError::EmptyUrl);
        }
        let token = CancelToken::default();
        self.phase = Phase::Loading {
            url: url.to_string(),
            token: token.clone(),
        };
        tracing::debug!(url, "price lookup started");
        Ok(token)
    }

    /// Finish the run owning `token`. Returns the price-history view to open, or `None`
    /// when the run was cancelled or superseded.
    pub fn finish(&mut self, token: &CancelToken) -> Option<ViewState> {
        let Phase::Loading { url, token: current } = &self.phase else {
            return None;
        };
        if !current.same_run(token) {
            return None;
        }
        let target = (!token.is_cancelled()).then(|| ViewState::PriceHistory {
            product_url: Some(url.clone()),
        });
        self.phase = Phase::Idle;
        tracing::debug!(navigating = target.is_some(), "price lookup finished");
        target
    }

    /// Cancel the in-flight run, if any, and return to idle.
    pub fn cancel(&mut self) {
        if let Phase::Loading { token, .. } = &self.phase {
            token.cancel();
        }
        self.phase = Phase::Idle;
    }
}

/// Wait on `delay`, then report whether the run is still live.
pub async fn run_after<D>(delay: D, token: CancelToken) -> bool
where
    D: Future<Output = ()>,
{
    delay.await;
    !token.is_cancelled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_url_is_ignored() {
        let mut task = SubmitTask::default();
        assert_eq!(task.begin("   ").unwrap_err(), SubmitError::EmptyUrl);
        assert!(!task.is_loading());
    }

    #[test]
    fn duplicate_submit_while_loading_is_rejected() {
        let mut task = SubmitTask::default();
        let _token = task.begin("https://shop.example/a").unwrap();
        assert_eq!(
            task.begin("https://shop.example/b").unwrap_err(),
            SubmitError::AlreadyLoading
        );
        assert!(task.is_loading());
    }

    #[test]
    fn finish_navigates_and_resets() {
        let mut task = SubmitTask::default();
        let token = task.begin(" https://shop.example/a b ").unwrap();
        let target = task.finish(&token).unwrap();
        assert_eq!(
            target.href(),
            "/price-history?url=https%3A%2F%2Fshop.example%2Fa%20b"
        );
        assert!(!task.is_loading());
        assert_eq!(task.finish(&token), None);
    }

    #[test]
    fn cancelled_run_does_not_navigate() {
        let mut task = SubmitTask::default();
        let token = task.begin("https://shop.example/a").unwrap();
        token.cancel();
        assert_eq!(task.finish(&token), None);
        assert!(!task.is_loading());
    }

    #[test]
    fn superseded_token_is_ignored() {
        let mut task = SubmitTask::default();
        let old = task.begin("https://shop.example/a").unwrap();
        task.cancel();
        assert!(old.is_cancelled());
        let new = task.begin("https://shop.example/b").unwrap();
        assert_eq!(task.finish(&old), None);
        assert!(task.is_loading());
        assert!(task.finish(&new).is_some());
    }

    #[tokio::test]
    async fn run_after_reports_liveness() {
        let token = CancelToken::default();
        assert!(run_after(std::future::ready(()), token.clone()).await);
        token.cancel();
        assert!(!run_after(std::future::ready(()), token).await);
    }
}
