//! Browser launch options.
//!
//! Provides a type-safe description of the browser session requested from
//! the WebDriver server.
//!
//! # Example
//!
//! ```
//! use acceptance_suite::{BrowserKind, BrowserOptions};
//!
//! let options = BrowserOptions::new(BrowserKind::Chrome)
//!     .with_headless()
//!     .with_maximize();
//!
//! assert!(options.is_headless());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// ============================================================================
// BrowserKind
// ============================================================================

/// Browser requested from the WebDriver server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
    /// Mozilla Firefox (geckodriver).
    #[default]
    Firefox,
    /// Google Chrome (chromedriver).
    Chrome,
}

impl BrowserKind {
    /// Returns the lowercase browser name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Firefox => "firefox",
            Self::Chrome => "chrome",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firefox" | "gecko" => Ok(Self::Firefox),
            "chrome" | "chromium" => Ok(Self::Chrome),
            other => Err(Error::config(format!(
                "Unknown browser '{other}'. Expected 'firefox' or 'chrome'."
            ))),
        }
    }
}

// ============================================================================
// BrowserOptions
// ============================================================================

/// Browser session options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Browser to launch.
    pub browser: BrowserKind,

    /// Run without a visible window.
    pub headless: bool,

    /// Maximize the window once the session starts.
    pub maximize: bool,
}

// ============================================================================
// Constructors
// ============================================================================

impl BrowserOptions {
    /// Creates options for the given browser with default settings.
    #[inline]
    #[must_use]
    pub const fn new(browser: BrowserKind) -> Self {
        Self {
            browser,
            headless: false,
            maximize: false,
        }
    }

    /// Creates headless Firefox options.
    #[inline]
    #[must_use]
    pub fn headless() -> Self {
        Self {
            headless: true,
            ..Default::default()
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl BrowserOptions {
    /// Enables headless mode.
    #[inline]
    #[must_use]
    pub fn with_headless(mut self) -> Self {
        self.headless = true;
        self
    }

    /// Maximizes the window after the session starts.
    #[inline]
    #[must_use]
    pub fn with_maximize(mut self) -> Self {
        self.maximize = true;
        self
    }

    /// Returns `true` if headless mode is enabled.
    #[inline]
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.headless
    }
}

// ============================================================================
// Tests
// ============================================================================
