//! Browser session capability.
//!
//! [`Session`] is the single "resolve locator, act on it" interface that
//! element accessors and pages compose over. [`WebDriverSession`] implements
//! it once over a W3C WebDriver session.
//!
//! A session is owned by the lifecycle manager for one scenario. Pages hold
//! shared references for their operations; after [`Session::quit`] every
//! operation fails with [`Error::SessionClosed`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use async_trait::async_trait;
use parking_lot::Mutex;
use thirtyfour::{WebDriver, WebElement};
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::selector::Locator;

// ============================================================================
// Types
// ============================================================================

/// Observed state of the first element matching a locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStatus {
    /// Element is rendered and visible.
    pub displayed: bool,
    /// Element accepts input.
    pub enabled: bool,
}

impl ElementStatus {
    /// Returns `true` if the element can be clicked.
    #[inline]
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.displayed && self.enabled
    }
}

// ============================================================================
// Session Trait
// ============================================================================

/// Operations on one live browser session.
///
/// Element operations act on the first node matching the locator and fail
/// with [`Error::ElementNotFound`] when nothing matches.
#[async_trait]
pub trait Session: fmt::Debug + Send + Sync {
    /// Navigates to a URL.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Returns the current page URL.
    async fn current_url(&self) -> Result<String>;

    /// Probes the first matching element; `None` if nothing matches.
    async fn probe(&self, locator: &Locator) -> Result<Option<ElementStatus>>;

    /// Clears the element and types `text` into it.
    async fn type_into(&self, locator: &Locator, text: &str) -> Result<()>;

    /// Clicks the element.
    async fn click(&self, locator: &Locator) -> Result<()>;

    /// Returns the element's rendered text.
    async fn text(&self, locator: &Locator) -> Result<String>;

    /// Captures the current page as PNG bytes.
    async fn screenshot_png(&self) -> Result<Vec<u8>>;

    /// Ends the session. Calling it again is a no-op.
    async fn quit(&self) -> Result<()>;

    /// Returns `false` once the session has been quit.
    fn is_open(&self) -> bool;
}

// ============================================================================
// WebDriverSession
// ============================================================================

/// [`Session`] backed by a WebDriver server.
pub struct WebDriverSession {
    /// Live driver; taken on quit.
    driver: Mutex<Option<WebDriver>>,
}

impl fmt::Debug for WebDriverSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDriverSession")
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}

impl WebDriverSession {
    /// Wraps a connected driver.
    #[must_use]
    pub fn new(driver: WebDriver) -> Self {
        Self {
            driver: Mutex::new(Some(driver)),
        }
    }

    /// Returns a handle to the live driver.
    fn driver(&self) -> Result<WebDriver> {
        self.driver.lock().clone().ok_or(Error::SessionClosed)
    }

    /// Resolves the first element matching the locator.
    async fn first(&self, locator: &Locator) -> Result<Option<WebElement>> {
        let driver = self.driver()?;
        let mut found = driver.find_all(locator.to_by()).await?;
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(found.swap_remove(0)))
    }

    /// Resolves the first element or fails with [`Error::ElementNotFound`].
    async fn require(&self, locator: &Locator) -> Result<WebElement> {
        self.first(locator)
            .await?
            .ok_or_else(|| Error::element_not_found(locator))
    }
}

#[async_trait]
impl Session for WebDriverSession {
    async fn goto(&self, url: &str) -> Result<()> {
        debug!(url = %url, "Navigating");
        self.driver()?.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let url = self.driver()?.current_url().await?;
        Ok(url.to_string())
    }

    async fn probe(&self, locator: &Locator) -> Result<Option<ElementStatus>> {
        let Some(element) = self.first(locator).await? else {
            return Ok(None);
        };

        Ok(Some(ElementStatus {
            displayed: element.is_displayed().await?,
            enabled: element.is_enabled().await?,
        }))
    }

    async fn type_into(&self, locator: &Locator, text: &str) -> Result<()> {
        debug!(locator = %locator, text_len = text.len(), "Typing text");
        let element = self.require(locator).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        debug!(locator = %locator, "Clicking element");
        self.require(locator).await?.click().await?;
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> Result<String> {
        Ok(self.require(locator).await?.text().await?)
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        Ok(self.driver()?.screenshot_as_png().await?)
    }

    async fn quit(&self) -> Result<()> {
        let driver = self.driver.lock().take();
        match driver {
            Some(driver) => {
                driver.quit().await?;
                info!("WebDriver session terminated");
            }
            None => debug!("Session already closed"),
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.driver.lock().is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
