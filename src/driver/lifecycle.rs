//! Per-scenario browser session lifecycle.
//!
//! [`DriverLifecycle`] brackets one scenario: [`set_up`](DriverLifecycle::set_up)
//! runs before the first step and [`tear_down`](DriverLifecycle::tear_down)
//! runs after the last one whatever the outcome. Setup failures are fatal;
//! teardown never fails.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use acceptance_suite::{Driver, DriverLifecycle, ScenarioOutcome, ScenarioStatus};
//!
//! # async fn example() -> acceptance_suite::Result<()> {
//! let driver = Driver::builder().server_url("http://localhost:4444").build()?;
//! let mut lifecycle = DriverLifecycle::new(Arc::new(driver));
//!
//! let session = lifecycle.set_up("Successful login").await?;
//! // ... run steps against `session` ...
//! lifecycle
//!     .tear_down(&ScenarioOutcome::new("Successful login", ScenarioStatus::Passed))
//!     .await;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::browser::Session;
use crate::error::{Error, Result};

// ============================================================================
// SessionProvider
// ============================================================================

/// Source of browser sessions.
#[async_trait]
pub trait SessionProvider: fmt::Debug + Send + Sync {
    /// Opens a new session.
    ///
    /// `Ok(None)` means no session is configured; errors mean one was
    /// expected but could not be opened.
    async fn acquire(&self) -> Result<Option<Arc<dyn Session>>>;
}

// ============================================================================
// Scenario Outcome
// ============================================================================

/// Final status of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Every step passed.
    Passed,
    /// A step or hook failed.
    Failed,
    /// A step was skipped (no matching definition).
    Skipped,
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
        })
    }
}

/// Outcome handed to teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Final status.
    pub status: ScenarioStatus,
}

impl ScenarioOutcome {
    /// Creates an outcome.
    #[must_use]
    pub fn new(name: impl Into<String>, status: ScenarioStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Returns `true` if the scenario failed.
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == ScenarioStatus::Failed
    }
}

// ============================================================================
// DriverLifecycle
// ============================================================================

/// Owns the browser session of one scenario.
#[derive(Debug)]
pub struct DriverLifecycle {
    /// Where sessions come from.
    provider: Arc<dyn SessionProvider>,
    /// Live session, if any.
    session: Option<Arc<dyn Session>>,
    /// Directory for failure screenshots.
    screenshot_dir: Option<PathBuf>,
}

impl DriverLifecycle {
    /// Creates a lifecycle manager with no live session.
    #[must_use]
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            provider,
            session: None,
            screenshot_dir: None,
        }
    }

    /// Captures a screenshot into `dir` when a scenario fails.
    #[must_use]
    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = Some(dir.into());
        self
    }

    /// Returns the live session, if any.
    #[inline]
    #[must_use]
    pub fn session(&self) -> Option<&Arc<dyn Session>> {
        self.session.as_ref()
    }

    /// Acquires a session before the scenario, or confirms the one held.
    ///
    /// Returns `Ok(None)` with a warning when the provider yields no session.
    ///
    /// # Errors
    ///
    /// [`Error::SetupFailed`] if the provider fails.
    pub async fn set_up(&mut self, scenario: &str) -> Result<Option<Arc<dyn Session>>> {
        info!(scenario = %scenario, "Initializing WebDriver for new test scenario");

        if let Some(session) = &self.session
            && session.is_open()
        {
            debug!("Reusing live WebDriver session");
            return Ok(Some(Arc::clone(session)));
        }

        match self.provider.acquire().await {
            Ok(Some(session)) => {
                info!(scenario = %scenario, "WebDriver successfully initialized");
                self.session = Some(Arc::clone(&session));
                Ok(Some(session))
            }
            Ok(None) => {
                warn!("WebDriver initialization returned no session - check WebDriver configuration");
                self.session = None;
                Ok(None)
            }
            Err(e) => {
                error!(error = %e, "Failed to initialize WebDriver during setup");
                Err(Error::setup_failed(e))
            }
        }
    }

    /// Releases the session after the scenario. Never fails.
    ///
    /// On failure a screenshot is captured first when a directory is
    /// configured. Calling it again, or without a session, is a no-op.
    pub async fn tear_down(&mut self, outcome: &ScenarioOutcome) {
        info!(
            scenario = %outcome.name,
            status = %outcome.status,
            "Scenario completed"
        );

        match self.session.take() {
            Some(session) => {
                if outcome.is_failed()
                    && let Some(dir) = &self.screenshot_dir
                {
                    capture_failure(session.as_ref(), dir, &outcome.name).await;
                }

                info!("Closing WebDriver session");
                match session.quit().await {
                    Ok(()) => info!("WebDriver session successfully terminated"),
                    Err(e) => error!(error = %e, "Exception occurred during WebDriver cleanup"),
                }
            }
            None => warn!("No WebDriver session during teardown - no cleanup needed"),
        }

        if outcome.is_failed() {
            warn!(
                scenario = %outcome.name,
                "Scenario failed - additional investigation may be required"
            );
        }
    }
}

// ============================================================================
// Screenshots
// ============================================================================

/// Saves a PNG of the current page; errors are logged only.
async fn capture_failure(session: &dyn Session, dir: &Path, scenario: &str) {
    let path = dir.join(format!("{}.png", screenshot_name(scenario)));

    let result = async {
        let png = session.screenshot_png().await?;
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, png).await?;
        Ok::<_, Error>(())
    }
    .await;

    match result {
        Ok(()) => info!(path = %path.display(), "Saved failure screenshot"),
        Err(e) => warn!(error = %e, "Could not capture failure screenshot"),
    }
}

/// Turns a scenario name into a file stem.
fn screenshot_name(scenario: &str) -> String {
    let stem: String = scenario
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "scenario".to_string()
    } else {
        stem.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    use crate::browser::fake::FakeBrowser;

    #[derive(Debug)]
    enum Script {
        Session(Arc<FakeBrowser>),
        Nothing,
        Fail,
    }

    #[derive(Debug)]
    struct ScriptedProvider {
        script: Script,
        calls: Mutex<usize>,
    }

    impl ScriptedProvider {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                calls: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl SessionProvider for ScriptedProvider {
        async fn acquire(&self) -> Result<Option<Arc<dyn Session>>> {
            *self.calls.lock() += 1;
            match &self.script {
                Script::Session(browser) => Ok(Some(browser.clone() as Arc<dyn Session>)),
                Script::Nothing => Ok(None),
                Script::Fail => Err(Error::config("connection refused")),
            }
        }
    }

    fn failed() -> ScenarioOutcome {
        ScenarioOutcome::new("Login with wrong password", ScenarioStatus::Failed)
    }

    #[tokio::test]
    async fn test_session_closed_after_failed_scenario() {
        let browser = FakeBrowser::new();
        let mut lifecycle =
            DriverLifecycle::new(ScriptedProvider::new(Script::Session(browser.clone())));

        let session = lifecycle.set_up("scenario").await.unwrap();
        assert!(session.is_some());

        lifecycle.tear_down(&failed()).await;

        assert_eq!(browser.quit_calls(), 1);
        assert!(!browser.is_open());
        assert!(lifecycle.session().is_none());
    }

    #[tokio::test]
    async fn test_tear_down_twice_is_noop() {
        let browser = FakeBrowser::new();
        let mut lifecycle =
            DriverLifecycle::new(ScriptedProvider::new(Script::Session(browser.clone())));
        lifecycle.set_up("scenario").await.unwrap();

        let outcome = ScenarioOutcome::new("scenario", ScenarioStatus::Passed);
        lifecycle.tear_down(&outcome).await;
        lifecycle.tear_down(&outcome).await;

        assert_eq!(browser.quit_calls(), 1);
    }

    #[tokio::test]
    async fn test_quit_failure_is_swallowed() {
        let browser = FakeBrowser::new().failing_quit();
        let mut lifecycle =
            DriverLifecycle::new(ScriptedProvider::new(Script::Session(browser.clone())));
        lifecycle.set_up("scenario").await.unwrap();

        lifecycle.tear_down(&failed()).await;

        assert_eq!(browser.quit_calls(), 1);
        assert!(lifecycle.session().is_none());
    }

    #[tokio::test]
    async fn test_missing_session_is_not_fatal() {
        let mut lifecycle = DriverLifecycle::new(ScriptedProvider::new(Script::Nothing));

        let session = lifecycle.set_up("scenario").await.unwrap();
        assert!(session.is_none());

        lifecycle.tear_down(&failed()).await;
    }

    #[tokio::test]
    async fn test_provider_error_is_fatal() {
        let mut lifecycle = DriverLifecycle::new(ScriptedProvider::new(Script::Fail));

        let err = lifecycle.set_up("scenario").await.unwrap_err();
        assert!(err.is_fatal_setup());
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_live_session_is_reused() {
        let browser = FakeBrowser::new();
        let provider = ScriptedProvider::new(Script::Session(browser));
        let mut lifecycle = DriverLifecycle::new(provider.clone());

        lifecycle.set_up("scenario").await.unwrap();
        lifecycle.set_up("scenario").await.unwrap();

        assert_eq!(*provider.calls.lock(), 1);
    }

    #[tokio::test]
    async fn test_failure_screenshot_written() {
        let dir = tempfile::tempdir().unwrap();
        let browser = FakeBrowser::new();
        let mut lifecycle =
            DriverLifecycle::new(ScriptedProvider::new(Script::Session(browser.clone())))
                .with_screenshot_dir(dir.path());
        lifecycle.set_up("scenario").await.unwrap();

        lifecycle.tear_down(&failed()).await;

        let shot = dir.path().join("login_with_wrong_password.png");
        assert!(shot.exists());
        assert_eq!(browser.actions(), vec!["screenshot".to_string()]);
    }

    #[tokio::test]
    async fn test_no_screenshot_when_passed() {
        let dir = tempfile::tempdir().unwrap();
        let browser = FakeBrowser::new();
        let mut lifecycle =
            DriverLifecycle::new(ScriptedProvider::new(Script::Session(browser.clone())))
                .with_screenshot_dir(dir.path());
        lifecycle.set_up("scenario").await.unwrap();

        lifecycle
            .tear_down(&ScenarioOutcome::new("ok", ScenarioStatus::Passed))
            .await;

        assert!(browser.actions().is_empty());
    }

    #[test]
    fn test_screenshot_name() {
        assert_eq!(screenshot_name("Login: bad/pass!"), "login__bad_pass");
        assert_eq!(screenshot_name("???"), "scenario");
    }
}
