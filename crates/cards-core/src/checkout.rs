//! Checkout Initiation
//!
//! "Choose Pro" runs a two-step sequence: create a session on the backend,
//! then hand its id to the payment SDK which leaves the page for the hosted
//! checkout. Both failure points are logged and end the flow; nothing is
//! shown to the user and nothing is retried.
//!
//! ```text
//! click ──▶ SessionApi::create_session ──▶ CheckoutRedirect::redirect_to_checkout
//!                 │ error: log, stop                 │ error: warn, stop
//! ```

use async_trait::async_trait;

use crate::error::{CheckoutError, RedirectError};
use crate::session::{CheckoutSessionId, SessionApi};

/// Payment SDK capability that sends the browser to hosted checkout
#[async_trait(?Send)]
pub trait CheckoutRedirect {
    /// Consumes the session id; a session is redirected to at most once.
    async fn redirect_to_checkout(
        &self,
        session: CheckoutSessionId,
    ) -> std::result::Result<(), RedirectError>;
}

/// How a checkout attempt ended
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Redirect was accepted by the SDK
    Redirected,
    /// No session was obtained; redirect never attempted
    SessionFailed(CheckoutError),
    /// Session obtained but the SDK refused to redirect
    RedirectFailed(RedirectError),
}

/// Runs the checkout sequence against its two collaborators.
///
/// Stateless: overlapping invocations are not coordinated and each one
/// creates its own server-side session.
pub struct CheckoutInitiator<S, R> {
    sessions: S,
    redirect: R,
}

impl<S: SessionApi, R: CheckoutRedirect> CheckoutInitiator<S, R> {
    pub const fn new(sessions: S, redirect: R) -> Self {
        Self { sessions, redirect }
    }

    /// Create one session and redirect to it
    pub async fn initiate(&self) -> CheckoutOutcome {
        let session = match self.sessions.create_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("Checkout session creation failed: {}", e);
                return CheckoutOutcome::SessionFailed(e);
            }
        };

        tracing::debug!("Redirecting to checkout session {}", session);

        match self.redirect.redirect_to_checkout(session).await {
            Ok(()) => CheckoutOutcome::Redirected,
            Err(e) => {
                tracing::warn!("Checkout redirect failed: {}", e);
                CheckoutOutcome::RedirectFailed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakeSessions {
        log: Log,
        reply: fn() -> Result<CheckoutSessionId>,
    }

    #[async_trait(?Send)]
    impl SessionApi for FakeSessions {
        async fn create_session(&self) -> Result<CheckoutSessionId> {
            self.log.borrow_mut().push("create".into());
            (self.reply)()
        }
    }

    struct FakeRedirect {
        log: Log,
        fail_with: Option<&'static str>,
    }

    #[async_trait(?Send)]
    impl CheckoutRedirect for FakeRedirect {
        async fn redirect_to_checkout(
            &self,
            session: CheckoutSessionId,
        ) -> std::result::Result<(), RedirectError> {
            self.log.borrow_mut().push(format!("redirect:{session}"));
            match self.fail_with {
                Some(msg) => Err(RedirectError(msg.into())),
                None => Ok(()),
            }
        }
    }

    fn initiator(
        reply: fn() -> Result<CheckoutSessionId>,
        fail_with: Option<&'static str>,
    ) -> (CheckoutInitiator<FakeSessions, FakeRedirect>, Log) {
        let log: Log = Rc::default();
        let init = CheckoutInitiator::new(
            FakeSessions { log: log.clone(), reply },
            FakeRedirect { log: log.clone(), fail_with },
        );
        (init, log)
    }

    fn ok_session() -> Result<CheckoutSessionId> {
        Ok(CheckoutSessionId::new("sess_123").unwrap())
    }

    fn server_error() -> Result<CheckoutSessionId> {
        Err(CheckoutError::Server {
            status: 500,
            message: "stripe down".into(),
        })
    }

    #[tokio::test]
    async fn test_redirects_with_exact_session_id() {
        let (init, log) = initiator(ok_session, None);

        let outcome = init.initiate().await;

        assert!(matches!(outcome, CheckoutOutcome::Redirected));
        assert_eq!(*log.borrow(), vec!["create", "redirect:sess_123"]);
    }

    #[tokio::test]
    async fn test_server_error_never_redirects() {
        let (init, log) = initiator(server_error, None);

        let outcome = init.initiate().await;

        assert!(matches!(
            outcome,
            CheckoutOutcome::SessionFailed(CheckoutError::Server { status: 500, .. })
        ));
        assert_eq!(*log.borrow(), vec!["create"]);
    }

    #[tokio::test]
    async fn test_redirect_error_stops_flow() {
        let (init, log) = initiator(ok_session, Some("network error"));

        let outcome = init.initiate().await;

        match outcome {
            CheckoutOutcome::RedirectFailed(e) => assert_eq!(e.to_string(), "network error"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(*log.borrow(), vec!["create", "redirect:sess_123"]);
    }

    #[tokio::test]
    async fn test_repeated_clicks_create_independent_sessions() {
        let (init, log) = initiator(ok_session, None);

        init.initiate().await;
        init.initiate().await;

        assert_eq!(
            *log.borrow(),
            vec!["create", "redirect:sess_123", "create", "redirect:sess_123"]
        );
    }

    /// Formatted log output collected in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run one checkout with a subscriber recording WARN and above
    async fn initiate_capturing(init: &CheckoutInitiator<FakeSessions, FakeRedirect>) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        init.initiate().await;

        logs.contents()
    }

    #[tokio::test]
    async fn test_server_error_is_logged_as_error() {
        let (init, _log) = initiator(server_error, None);

        let logs = initiate_capturing(&init).await;

        assert!(logs.contains("ERROR"), "logs: {logs}");
        assert!(logs.contains("Checkout session creation failed"), "logs: {logs}");
        assert!(logs.contains("stripe down"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_redirect_error_is_logged_as_warning() {
        let (init, _log) = initiator(ok_session, Some("network error"));

        let logs = initiate_capturing(&init).await;

        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("Checkout redirect failed: network error"), "logs: {logs}");
        assert!(!logs.contains("ERROR"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_successful_checkout_logs_nothing_at_warn() {
        let (init, _log) = initiator(ok_session, None);

        let logs = initiate_capturing(&init).await;

        assert!(logs.is_empty(), "logs: {logs}");
    }
}
