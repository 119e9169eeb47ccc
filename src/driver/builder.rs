//! Builder pattern for driver configuration.
//!
//! Provides a fluent API for configuring and creating [`Driver`] instances.
//!
//! # Example
//!
//! ```
//! use acceptance_suite::{BrowserOptions, Driver};
//!
//! # fn example() -> acceptance_suite::Result<()> {
//! let driver = Driver::builder()
//!     .server_url("http://localhost:4444")
//!     .options(BrowserOptions::headless())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::error::{Error, Result};

use super::core::Driver;
use super::options::BrowserOptions;

// ============================================================================
// DriverBuilder
// ============================================================================

/// Builder for configuring a [`Driver`] instance.
///
/// Use [`Driver::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct DriverBuilder {
    /// WebDriver server URL, as given.
    server_url: Option<String>,
    /// Explicitly run without a browser.
    disabled: bool,
    /// Browser session options.
    options: BrowserOptions,
}

// ============================================================================
// DriverBuilder Implementation
// ============================================================================

impl DriverBuilder {
    /// Creates a new driver builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the WebDriver server URL (e.g. `http://localhost:4444`).
    #[inline]
    #[must_use]
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self.disabled = false;
        self
    }

    /// Builds a driver that never yields a session.
    ///
    /// Browser scenarios then start with a warning and their steps fail
    /// with [`Error::NoSession`].
    #[inline]
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.server_url = None;
        self.disabled = true;
        self
    }

    /// Sets the browser session options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: BrowserOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the driver with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if no server URL is set and the driver is not disabled
    /// - [`Error::Config`] if the server URL is not an absolute http(s) URL
    pub fn build(self) -> Result<Driver> {
        let server_url = self.validate_server_url()?;
        Ok(Driver::new(server_url, self.options))
    }
}

// ============================================================================
// Validation
// ============================================================================

impl DriverBuilder {
    /// Validates the server URL configuration.
    fn validate_server_url(&self) -> Result<Option<Url>> {
        if self.disabled {
            return Ok(None);
        }

        let raw = self.server_url.as_deref().ok_or_else(|| {
            Error::config(
                "WebDriver server URL is required. Use .server_url() to set it.\n\
                 Example: Driver::builder().server_url(\"http://localhost:4444\")",
            )
        })?;

        let url = Url::parse(raw)
            .map_err(|e| Error::config(format!("Invalid WebDriver URL '{raw}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "WebDriver URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(Some(url))
    }
}

// ============================================================================
// Tests
// ============================================================================
