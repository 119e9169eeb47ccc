//! Element accessors.
//!
//! A [`PageElement`] wraps one UI control of a page: a [`Locator`] bound to
//! the scenario's session plus the wait policy. Every accessor first waits
//! for the control to reach the needed condition, then acts on it. Failures
//! of any kind are reported as [`Error::ElementInteraction`] carrying the
//! original cause.
//!
//! # Example
//!
//! ```ignore
//! let username = PageElement::new(session.clone(), Locator::id("username"), wait);
//!
//! username.type_into("student").await?;
//! let banner = PageElement::new(session, Locator::id("error"), wait);
//! let text = banner.visible_text().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::selector::Locator;
use super::session::{ElementStatus, Session};

// ============================================================================
// Constants
// ============================================================================

/// Default time an accessor waits for its element.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default delay between two probes of the element.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// WaitConfig
// ============================================================================

/// Wait policy shared by all accessors of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Maximum time to wait for an element condition.
    pub timeout: Duration,
    /// Delay between probes.
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

// ============================================================================
// Condition
// ============================================================================

/// Condition an accessor waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Visible,
    Clickable,
}

impl Condition {
    fn is_met(self, status: Option<ElementStatus>) -> bool {
        match (self, status) {
            (_, None) => false,
            (Self::Visible, Some(s)) => s.displayed,
            (Self::Clickable, Some(s)) => s.is_clickable(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Clickable => "clickable",
        }
    }
}

// ============================================================================
// PageElement
// ============================================================================

/// Accessor for one UI control.
#[derive(Clone)]
pub struct PageElement {
    session: Arc<dyn Session>,
    locator: Locator,
    wait: WaitConfig,
}

impl fmt::Debug for PageElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageElement")
            .field("locator", &self.locator)
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}

impl PageElement {
    /// Binds a locator to a session.
    #[must_use]
    pub fn new(session: Arc<dyn Session>, locator: Locator, wait: WaitConfig) -> Self {
        Self {
            session,
            locator,
            wait,
        }
    }

    /// Returns this element's locator.
    #[inline]
    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }
}

// ============================================================================
// PageElement - Accessors
// ============================================================================

impl PageElement {
    /// Waits until the element is displayed.
    pub async fn wait_until_visible(&self) -> Result<()> {
        self.wait_for(Condition::Visible)
            .await
            .map_err(|e| self.wrap("wait until visible", e))
    }

    /// Waits until the element is displayed and enabled.
    pub async fn wait_until_clickable(&self) -> Result<()> {
        self.wait_for(Condition::Clickable)
            .await
            .map_err(|e| self.wrap("wait until clickable", e))
    }

    /// Waits for visibility, clears the control and types `text`.
    pub async fn type_into(&self, text: &str) -> Result<()> {
        async {
            self.wait_for(Condition::Visible).await?;
            self.session.type_into(&self.locator, text).await
        }
        .await
        .map_err(|e| self.wrap("type into", e))
    }

    /// Waits for clickability, then clicks.
    pub async fn click_on(&self) -> Result<()> {
        async {
            self.wait_for(Condition::Clickable).await?;
            self.session.click(&self.locator).await
        }
        .await
        .map_err(|e| self.wrap("click", e))
    }

    /// Waits for visibility and returns the trimmed text.
    pub async fn visible_text(&self) -> Result<String> {
        async {
            self.wait_for(Condition::Visible).await?;
            let text = self.session.text(&self.locator).await?;
            Ok::<_, Error>(text.trim().to_string())
        }
        .await
        .map_err(|e| self.wrap("read text of", e))
    }

    /// Returns `true` if the element is currently displayed, without waiting.
    pub async fn is_visible(&self) -> Result<bool> {
        let status = self
            .session
            .probe(&self.locator)
            .await
            .map_err(|e| self.wrap("probe", e))?;
        Ok(Condition::Visible.is_met(status))
    }
}

// ============================================================================
// PageElement - Internal
// ============================================================================

impl PageElement {
    /// Waits until `condition` holds or the wait times out.
    async fn wait_for(&self, condition: Condition) -> Result<()> {
        debug!(
            locator = %self.locator,
            condition = condition.as_str(),
            timeout_ms = self.wait.timeout.as_millis() as u64,
            "Waiting for element"
        );

        match timeout(self.wait.timeout, self.poll_until(condition)).await {
            Ok(result) => result,
            Err(_) => Err(Error::element_not_interactable(
                &self.locator,
                condition.as_str(),
                self.wait.timeout.as_millis() as u64,
            )),
        }
    }

    /// Probes every poll interval until `condition` holds.
    ///
    /// Not-found and driver errors count as "not ready"; the outer timeout
    /// bounds them. A closed session ends the wait at once.
    async fn poll_until(&self, condition: Condition) -> Result<()> {
        loop {
            match self.session.probe(&self.locator).await {
                Ok(status) if condition.is_met(status) => return Ok(()),
                Ok(status) => {
                    trace!(locator = %self.locator, ?status, "Element not ready");
                }
                Err(e @ (Error::ElementNotFound { .. } | Error::WebDriver(_))) => {
                    trace!(locator = %self.locator, error = %e, "Probe failed, retrying");
                }
                Err(e) => return Err(e),
            }
            sleep(self.wait.poll_interval).await;
        }
    }

    fn wrap(&self, action: &'static str, source: Error) -> Error {
        Error::element_interaction(&self.locator, action, source)
    }
}

// ============================================================================
// Tests
// ============================================================================
