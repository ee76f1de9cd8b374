//! # Navigation Seam
//!
//! The pipeline has to send the user to the login view when the server
//! rejects the session, but routing belongs to the embedding UI. It is
//! handed a [`Navigator`] instead.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Route of the login view.
pub const LOGIN_ROUTE: &str = "/login";

/// Something that can show the login view.
pub trait Navigator: Send + Sync {
    fn navigate_to_login(&self);
}

/// Any `Fn()` closure is a navigator.
impl<F> Navigator for F
where
    F: Fn() + Send + Sync,
{
    fn navigate_to_login(&self) {
        self()
    }
}

/// Navigator for headless use: records the redirect in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to_login(&self) {
        tracing::info!(route = LOGIN_ROUTE, "Redirecting to login");
    }
}

/// Navigator that counts redirects; useful for tests and diagnostics.
#[derive(Debug, Default)]
pub struct CountingNavigator {
    redirects: AtomicUsize,
}

impl CountingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn navigate_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
        tracing::info!(route = LOGIN_ROUTE, "Redirecting to login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_closure_navigator() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let navigator = move || {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        navigator.navigate_to_login();
        navigator.navigate_to_login();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_counting_navigator() {
        let navigator = CountingNavigator::new();
        assert_eq!(navigator.redirects(), 0);
        navigator.navigate_to_login();
        assert_eq!(navigator.redirects(), 1);
    }
}
