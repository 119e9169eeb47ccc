//! WebDriver session factory.
//!
//! The [`Driver`] knows where the WebDriver server lives and which browser
//! to ask for. Each call to [`SessionProvider::acquire`] opens one new
//! browser session.
//!
//! # Example
//!
//! ```no_run
//! use acceptance_suite::{Driver, Session, SessionProvider};
//!
//! # async fn example() -> acceptance_suite::Result<()> {
//! let driver = Driver::builder()
//!     .server_url("http://localhost:4444")
//!     .build()?;
//!
//! if let Some(session) = driver.acquire().await? {
//!     session.goto("https://example.com").await?;
//!     session.quit().await?;
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tracing::{debug, info};
use url::Url;

use crate::browser::{Session, WebDriverSession};
use crate::error::Result;

use super::builder::DriverBuilder;
use super::lifecycle::SessionProvider;
use super::options::{BrowserKind, BrowserOptions};

// ============================================================================
// Driver
// ============================================================================

/// WebDriver session factory.
#[derive(Debug, Clone)]
pub struct Driver {
    /// WebDriver server; `None` when browser sessions are disabled.
    server_url: Option<Url>,
    /// Requested browser options.
    options: BrowserOptions,
}

// ============================================================================
// Driver - Public API
// ============================================================================

impl Driver {
    /// Creates a configuration builder for the driver.
    #[inline]
    #[must_use]
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    /// Returns the WebDriver server URL, if sessions are enabled.
    #[inline]
    #[must_use]
    pub fn server_url(&self) -> Option<&Url> {
        self.server_url.as_ref()
    }

    /// Returns the browser options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }
}

// ============================================================================
// Driver - Internal API
// ============================================================================

impl Driver {
    /// Creates a new driver instance.
    pub(crate) fn new(server_url: Option<Url>, options: BrowserOptions) -> Self {
        Self {
            server_url,
            options,
        }
    }

    /// Opens a new WebDriver session on `server`.
    async fn connect(&self, server: &Url) -> Result<WebDriver> {
        let headless = self.options.headless;
        let driver = match self.options.browser {
            BrowserKind::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if headless {
                    caps.set_headless()?;
                }
                WebDriver::new(server.as_str(), caps).await?
            }
            BrowserKind::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if headless {
                    caps.set_headless()?;
                }
                WebDriver::new(server.as_str(), caps).await?
            }
        };

        if self.options.maximize {
            debug!("Maximizing browser window");
            driver.maximize_window().await?;
        }

        Ok(driver)
    }
}

// ============================================================================
// Driver - SessionProvider
// ============================================================================

#[async_trait]
impl SessionProvider for Driver {
    async fn acquire(&self) -> Result<Option<Arc<dyn Session>>> {
        let Some(server) = &self.server_url else {
            debug!("WebDriver disabled, no session acquired");
            return Ok(None);
        };

        debug!(
            server = %server,
            browser = %self.options.browser,
            headless = self.options.headless,
            "Opening WebDriver session"
        );

        let driver = self.connect(server).await?;
        info!(browser = %self.options.browser, "WebDriver session opened");

        Ok(Some(Arc::new(WebDriverSession::new(driver))))
    }
}

// ============================================================================
// Tests
// ============================================================================
