//! Error types for the acceptance suite.
//!
//! Every fallible operation returns [`Result<T>`] which uses [`Error`].
//! Step bindings surface these errors to the runner, which marks the
//! scenario failed and moves on to the next one.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`], [`Error::TemplateRead`], [`Error::InvalidTemplate`] |
//! | Lifecycle | [`Error::SetupFailed`], [`Error::NoSession`], [`Error::SessionClosed`] |
//! | Element | [`Error::ElementInteraction`], [`Error::ElementNotInteractable`], [`Error::ElementNotFound`] |
//! | Verification | [`Error::Assertion`], [`Error::UnexpectedStatus`] |
//! | Scenario | [`Error::InvalidTable`], [`Error::StepOrder`], [`Error::MissingObjectId`], [`Error::ObjectIdReassigned`] |
//! | External | [`Error::WebDriver`], [`Error::Http`], [`Error::Io`], [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;
use thirtyfour::error::WebDriverError;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when the suite configuration is missing or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Request template could not be read.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        /// Path of the template file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: IoError,
    },

    /// Request template parsed but is not a JSON object.
    #[error("Invalid template {path}: {message}")]
    InvalidTemplate {
        /// Path of the template file.
        path: PathBuf,
        /// Description of the problem.
        message: String,
    },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================
    /// Browser session could not be acquired before the scenario.
    ///
    /// Fatal: the scenario is aborted before any step runs.
    #[error("WebDriver setup failed: {source}")]
    SetupFailed {
        /// Cause reported by the session provider.
        #[source]
        source: Box<Error>,
    },

    /// A browser step ran but setup produced no session.
    #[error("No browser session available for this scenario")]
    NoSession,

    /// The session was used after teardown.
    #[error("Browser session already closed")]
    SessionClosed,

    // ========================================================================
    // Element Errors
    // ========================================================================
    /// An element accessor failed.
    ///
    /// Single reported kind for every accessor failure; the original cause
    /// is kept as the source.
    #[error("Element interaction failed: {action} on {locator}: {source}")]
    ElementInteraction {
        /// Locator of the element.
        locator: String,
        /// Action being performed (e.g. "type into").
        action: &'static str,
        /// Original cause.
        #[source]
        source: Box<Error>,
    },

    /// Element did not reach the awaited condition within the wait timeout.
    #[error("Element {locator} not {condition} after {timeout_ms}ms")]
    ElementNotInteractable {
        /// Locator of the element.
        locator: String,
        /// Awaited condition ("visible", "clickable").
        condition: &'static str,
        /// Milliseconds waited.
        timeout_ms: u64,
    },

    /// Element vanished between the wait and the action.
    #[error("Element not found: {locator}")]
    ElementNotFound {
        /// Locator of the element.
        locator: String,
    },

    // ========================================================================
    // Verification Errors
    // ========================================================================
    /// Expected value mismatch.
    #[error("Assertion failed: {check}: expected {expected}, got {actual}")]
    Assertion {
        /// Name of the check that failed.
        check: String,
        /// Expected value, debug-formatted.
        expected: String,
        /// Actual value, debug-formatted.
        actual: String,
    },

    /// HTTP response carried an unexpected status code.
    #[error("{method} {url} returned {actual}, expected {expected}")]
    UnexpectedStatus {
        /// HTTP method.
        method: String,
        /// Request URL.
        url: String,
        /// Expected status code.
        expected: u16,
        /// Actual status code.
        actual: u16,
    },

    // ========================================================================
    // Scenario Errors
    // ========================================================================
    /// Gherkin data table has an unusable shape.
    #[error("Invalid data table: {message}")]
    InvalidTable {
        /// Description of the problem.
        message: String,
    },

    /// A step ran in a state that does not allow it.
    #[error("Step '{step}' cannot run in state {state}")]
    StepOrder {
        /// Step that was attempted.
        step: &'static str,
        /// Current flow state.
        state: String,
    },

    /// An object step ran before any object was created.
    #[error("No object has been created in this scenario")]
    MissingObjectId,

    /// A second, different object id was recorded.
    #[error("Object id already recorded as {current}, refusing {attempted}")]
    ObjectIdReassigned {
        /// Id recorded first.
        current: String,
        /// Id that was rejected.
        attempted: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// WebDriver error.
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] WebDriverError),

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a template read error.
    #[inline]
    pub fn template_read(path: impl Into<PathBuf>, source: IoError) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid template error.
    #[inline]
    pub fn invalid_template(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wraps a provider failure as a setup failure.
    #[inline]
    pub fn setup_failed(source: Error) -> Self {
        Self::SetupFailed {
            source: Box::new(source),
        }
    }

    /// Wraps an accessor failure with the element and action.
    #[inline]
    pub fn element_interaction(
        locator: impl ToString,
        action: &'static str,
        source: Error,
    ) -> Self {
        Self::ElementInteraction {
            locator: locator.to_string(),
            action,
            source: Box::new(source),
        }
    }

    /// Creates an element not interactable error.
    #[inline]
    pub fn element_not_interactable(
        locator: impl ToString,
        condition: &'static str,
        timeout_ms: u64,
    ) -> Self {
        Self::ElementNotInteractable {
            locator: locator.to_string(),
            condition,
            timeout_ms,
        }
    }

    /// Creates an element not found error.
    #[inline]
    pub fn element_not_found(locator: impl ToString) -> Self {
        Self::ElementNotFound {
            locator: locator.to_string(),
        }
    }

    /// Creates an assertion error.
    #[inline]
    pub fn assertion(
        check: impl Into<String>,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        Self::Assertion {
            check: check.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// Creates an unexpected status error.
    #[inline]
    pub fn unexpected_status(
        method: impl ToString,
        url: impl ToString,
        expected: u16,
        actual: u16,
    ) -> Self {
        Self::UnexpectedStatus {
            method: method.to_string(),
            url: url.to_string(),
            expected,
            actual,
        }
    }

    /// Creates an invalid table error.
    #[inline]
    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }

    /// Creates a step order error.
    #[inline]
    pub fn step_order(step: &'static str, state: impl ToString) -> Self {
        Self::StepOrder {
            step,
            state: state.to_string(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is an expectation mismatch.
    #[inline]
    #[must_use]
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion { .. } | Self::UnexpectedStatus { .. })
    }

    /// Returns `true` if this is an element error.
    #[inline]
    #[must_use]
    pub fn is_element_error(&self) -> bool {
        matches!(
            self,
            Self::ElementInteraction { .. }
                | Self::ElementNotInteractable { .. }
                | Self::ElementNotFound { .. }
        )
    }

    /// Returns `true` if this error aborts the scenario before its first step.
    #[inline]
    #[must_use]
    pub fn is_fatal_setup(&self) -> bool {
        matches!(self, Self::SetupFailed { .. })
    }

    /// Returns `true` if this is a wait timeout, including wrapped ones.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::ElementNotInteractable { .. } => true,
            Self::ElementInteraction { source, .. } => source.is_timeout(),
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
