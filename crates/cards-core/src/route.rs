//! Internal Routes and Navigation
//!
//! The landing page only ever sends users to a handful of fixed paths.
//! `Navigator` hides the router behind a trait so click handlers can be
//! exercised without a browser.

use serde::{Deserialize, Serialize};

/// Fixed internal routes referenced by the landing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Generate,
    SignIn,
    SignUp,
    /// Return page after hosted checkout
    Result,
}

impl Route {
    /// Path string for the router
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Generate => "/generate",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
            Self::Result => "/result",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Client-side route transition
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: Route) {
        (**self).navigate(route);
    }
}

/// Handler for the hero "Get started" button
pub fn get_started<N: Navigator + ?Sized>(navigator: &N) {
    tracing::debug!("Navigating to {}", Route::Generate);
    navigator.navigate(Route::Generate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::session::{CheckoutSessionId, SessionApi};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Generate.path(), "/generate");
        assert_eq!(Route::SignIn.path(), "/sign-in");
        assert_eq!(Route::SignUp.path(), "/sign-up");
        assert_eq!(Route::Home.to_string(), "/");
    }

    #[test]
    fn test_get_started_goes_to_generate() {
        let nav = RecordingNavigator::default();
        get_started(&nav);
        assert_eq!(*nav.visited.borrow(), vec![Route::Generate]);
    }

    /// Page handle that can both navigate and create checkout sessions
    #[derive(Default)]
    struct PageHandle {
        visited: RefCell<Vec<Route>>,
        session_requests: Cell<usize>,
    }

    impl Navigator for PageHandle {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }

    #[async_trait(?Send)]
    impl SessionApi for PageHandle {
        async fn create_session(&self) -> Result<CheckoutSessionId> {
            self.session_requests.set(self.session_requests.get() + 1);
            Ok(CheckoutSessionId::new("sess_123").unwrap())
        }
    }

    #[tokio::test]
    async fn test_get_started_issues_no_session_request() {
        let page = PageHandle::default();

        get_started(&page);

        assert_eq!(*page.visited.borrow(), vec![Route::Generate]);
        assert_eq!(page.session_requests.get(), 0);

        // the same handle does count requests when asked to
        page.create_session().await.unwrap();
        assert_eq!(page.session_requests.get(), 1);
    }
}
