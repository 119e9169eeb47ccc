//! Element locator strategies.
//!
//! A [`Locator`] names one DOM node the way a page object declares it.
//! It is resolved lazily against the live session on every access, and
//! when several nodes match only the first one is considered.
//!
//! # Example
//!
//! ```
//! use acceptance_suite::Locator;
//!
//! let username = Locator::id("username");
//! let header = Locator::xpath("//div[contains(@class,'post-header')]");
//!
//! assert_eq!(username.to_string(), "id=username");
//! assert_eq!(header.strategy(), "xpath");
//! ```

use std::fmt;

use thirtyfour::By;

// ============================================================================
// Locator Enum
// ============================================================================

/// Element locator strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Element `id` attribute.
    Id(String),

    /// XPath expression.
    ///
    /// # Example
    /// ```ignore
    /// Locator::XPath("//div[contains(@class,'post-content')]//a".into())
    /// ```
    XPath(String),

    /// CSS selector.
    Css(String),
}

impl Locator {
    /// Creates an id locator.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates an XPath locator.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a CSS locator.
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Returns the strategy name.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::XPath(_) => "xpath",
            Self::Css(_) => "css",
        }
    }

    /// Returns the locator value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Id(v) | Self::XPath(v) | Self::Css(v) => v,
        }
    }

    /// Converts to the WebDriver client's selector.
    #[must_use]
    pub fn to_by(&self) -> By {
        match self {
            Self::Id(v) => By::Id(v.clone()),
            Self::XPath(v) => By::XPath(v.clone()),
            Self::Css(v) => By::Css(v.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy(), self.value())
    }
}

// ============================================================================
// Tests
// ============================================================================
