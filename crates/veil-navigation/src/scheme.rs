//! External-scheme dispatch
//!
//! Decides whether a navigation request stays in the rendering surface or
//! is handed to the operating system's default handler (`mailto:`,
//! `tel:`, `zoommtg:` and friends).

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crate::Result;

/// Schemes the rendering surface loads itself.
pub const DEFAULT_IN_SURFACE_SCHEMES: &[&str] =
    &["http", "https", "file", "chrome", "data", "javascript", "about"];

pub const DEFAULT_DELEGATION_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDecision {
    /// Let the surface load the target
    Allow,
    /// Cancel the in-surface navigation; the OS handler has it
    CancelAndDelegate,
}

/// Hands a URI to the operating system.
pub trait ExternalLauncher: Send + Sync {
    fn launch(&self, uri: &str) -> Result<()>;
}

pub struct SchemeDispatcher {
    allowed: Vec<String>,
    launcher: Option<Arc<dyn ExternalLauncher>>,
    timeout: Duration,
    /// Set while a launch thread is running
    in_flight: Arc<AtomicBool>,
}

impl SchemeDispatcher {
    pub fn new(allowed: Vec<String>, timeout: Duration) -> Self {
        Self {
            allowed,
            launcher: None,
            timeout,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_launcher(&mut self, launcher: Arc<dyn ExternalLauncher>) {
        self.launcher = Some(launcher);
    }

    /// Exact, case-sensitive membership test against the allow-list.
    pub fn is_in_surface(&self, scheme: &str) -> bool {
        self.allowed.iter().any(|s| s == scheme)
    }

    pub fn should_intercept(&self, target_uri: &str) -> NavigationDecision {
        let Some(scheme) = scheme_of(target_uri) else {
            return NavigationDecision::Allow;
        };

        if self.is_in_surface(scheme) {
            return NavigationDecision::Allow;
        }

        if self.delegate(target_uri) {
            tracing::info!(uri = %target_uri, scheme, "Delegated to external handler");
            NavigationDecision::CancelAndDelegate
        } else {
            NavigationDecision::Allow
        }
    }

    /// Run the launcher off-thread and wait at most `timeout` for it.
    ///
    /// A launcher still running at the deadline counts as delegated and is
    /// left to finish on its own. At most one launch runs at a time; requests
    /// arriving meanwhile are cancelled without waiting.
    fn delegate(&self, uri: &str) -> bool {
        let Some(launcher) = self.launcher.as_ref().map(Arc::clone) else {
            tracing::debug!(uri = %uri, "No external launcher available");
            return false;
        };

        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!(uri = %uri, "External handler busy, dropping request");
            return true;
        }

        let (tx, rx) = mpsc::channel();
        let owned_uri = uri.to_string();
        let in_flight = Arc::clone(&self.in_flight);
        let spawned = std::thread::Builder::new()
            .name("external-launch".to_string())
            .spawn(move || {
                let result = launcher.launch(&owned_uri);
                in_flight.store(false, Ordering::Release);
                if let Err(e) = &result {
                    tracing::warn!(uri = %owned_uri, error = %e, "External handler failed");
                }
                let _ = tx.send(result.is_ok());
            });

        if let Err(e) = spawned {
            self.in_flight.store(false, Ordering::Release);
            tracing::warn!(error = %e, "Could not spawn external launch thread");
            return false;
        }

        match rx.recv_timeout(self.timeout) {
            Ok(launched) => launched,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::debug!(uri = %uri, "External handler still pending, assuming success");
                true
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl Default for SchemeDispatcher {
    fn default() -> Self {
        Self::new(
            DEFAULT_IN_SURFACE_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            DEFAULT_DELEGATION_TIMEOUT,
        )
    }
}

/// The raw scheme of `uri` (text before the first `:`), if well-formed.
///
/// Case is preserved.
pub fn scheme_of(uri: &str) -> Option<&str> {
    let (scheme, _) = uri.trim_start().split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NavigationError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
    }

    impl ExternalLauncher for RecordingLauncher {
        fn launch(&self, uri: &str) -> Result<()> {
            self.launched.lock().push(uri.to_string());
            Ok(())
        }
    }

    struct FailingLauncher;

    impl ExternalLauncher for FailingLauncher {
        fn launch(&self, _uri: &str) -> Result<()> {
            Err(NavigationError::Delegation("no handler".to_string()))
        }
    }

    struct SlowLauncher;

    impl ExternalLauncher for SlowLauncher {
        fn launch(&self, _uri: &str) -> Result<()> {
            std::thread::sleep(Duration::from_millis(500));
            Ok(())
        }
    }

    fn dispatcher_with(launcher: Arc<dyn ExternalLauncher>) -> SchemeDispatcher {
        let mut dispatcher = SchemeDispatcher::default();
        dispatcher.set_launcher(launcher);
        dispatcher
    }

    #[test]
    fn test_web_schemes_allowed() {
        let launcher = Arc::new(RecordingLauncher::default());
        let dispatcher = dispatcher_with(launcher.clone());

        for uri in [
            "https://example.com",
            "http://example.com",
            "file:///tmp/a.html",
            "about:blank",
            "data:text/plain,hi",
            "javascript:void(0)",
            "chrome://settings",
        ] {
            assert_eq!(dispatcher.should_intercept(uri), NavigationDecision::Allow, "{uri}");
        }
        assert!(launcher.launched.lock().is_empty());
    }

    #[test]
    fn test_external_scheme_delegated() {
        let launcher = Arc::new(RecordingLauncher::default());
        let dispatcher = dispatcher_with(launcher.clone());

        assert_eq!(
            dispatcher.should_intercept("mailto:a@b.com"),
            NavigationDecision::CancelAndDelegate
        );
        assert_eq!(*launcher.launched.lock(), vec!["mailto:a@b.com"]);
    }

    #[test]
    fn test_failed_delegation_falls_through() {
        let dispatcher = dispatcher_with(Arc::new(FailingLauncher));
        assert_eq!(
            dispatcher.should_intercept("mailto:a@b.com"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_missing_launcher_falls_through() {
        let dispatcher = SchemeDispatcher::default();
        assert_eq!(
            dispatcher.should_intercept("tel:+15551234"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_slow_delegation_is_not_awaited() {
        let mut dispatcher = SchemeDispatcher::new(vec!["https".to_string()], Duration::from_millis(20));
        dispatcher.set_launcher(Arc::new(SlowLauncher));

        let started = std::time::Instant::now();
        assert_eq!(
            dispatcher.should_intercept("zoommtg://join?id=1"),
            NavigationDecision::CancelAndDelegate
        );
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    #[derive(Default)]
    struct CountingSlowLauncher {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl ExternalLauncher for CountingSlowLauncher {
        fn launch(&self, _uri: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(200));
            Ok(())
        }
    }

    #[test]
    fn test_repeated_requests_share_one_pending_launch() {
        let launcher = Arc::new(CountingSlowLauncher::default());
        let mut dispatcher =
            SchemeDispatcher::new(vec!["https".to_string()], Duration::from_millis(20));
        dispatcher.set_launcher(launcher.clone());

        for _ in 0..5 {
            assert_eq!(
                dispatcher.should_intercept("foo:x"),
                NavigationDecision::CancelAndDelegate
            );
        }
        assert_eq!(launcher.calls.load(Ordering::SeqCst), 1);

        // Once the first launch finishes, the next request launches again.
        std::thread::sleep(Duration::from_millis(300));
        assert_eq!(
            dispatcher.should_intercept("foo:x"),
            NavigationDecision::CancelAndDelegate
        );
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(launcher.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_scheme_match_is_case_sensitive() {
        // Uppercase schemes are not in the allow-list and go to the OS
        // handler. Kept deliberately; revisit if the surface should own them.
        let launcher = Arc::new(RecordingLauncher::default());
        let dispatcher = dispatcher_with(launcher.clone());

        assert!(!dispatcher.is_in_surface("HTTPS"));
        assert_eq!(
            dispatcher.should_intercept("HTTPS://example.com"),
            NavigationDecision::CancelAndDelegate
        );
        assert_eq!(*launcher.launched.lock(), vec!["HTTPS://example.com"]);
    }

    #[test]
    fn test_schemeless_targets_allowed() {
        let dispatcher = dispatcher_with(Arc::new(FailingLauncher));
        assert_eq!(dispatcher.should_intercept("/relative/path"), NavigationDecision::Allow);
        assert_eq!(dispatcher.should_intercept(""), NavigationDecision::Allow);
    }

    #[test]
    fn test_scheme_of() {
        assert_eq!(scheme_of("mailto:a@b.com"), Some("mailto"));
        assert_eq!(scheme_of("HTTPS://x"), Some("HTTPS"));
        assert_eq!(scheme_of("web+app:thing"), Some("web+app"));
        assert_eq!(scheme_of("1abc:x"), None);
        assert_eq!(scheme_of("no scheme here"), None);
        assert_eq!(scheme_of(":empty"), None);
    }
}
