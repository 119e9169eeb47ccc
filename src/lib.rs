//! Acceptance suite - login flow and object-store checks.
//!
//! This library holds the logic behind a Gherkin acceptance suite: a
//! WebDriver-backed login flow built on page abstractions, and a create,
//! update, delete round trip against a disposable object-store API. The
//! cucumber glue lives in `tests/acceptance` and only forwards to the step
//! bindings in [`steps`].
//!
//! # Architecture
//!
//! - Each scenario owns a [`DriverLifecycle`], a [`ScenarioContext`] and at
//!   most one browser [`Session`]
//! - Pages hold [`PageElement`] accessors bound to that session
//! - Every accessor waits, acts, and reports failures as
//!   [`Error::ElementInteraction`]
//! - Teardown always runs and never fails
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use acceptance_suite::{
//!     DriverLifecycle, LoginSteps, Result, ScenarioContext, ScenarioOutcome, ScenarioStatus,
//!     SuiteConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SuiteConfig::from_env()?;
//!     let mut lifecycle = DriverLifecycle::new(Arc::new(config.driver()?));
//!     let mut ctx = ScenarioContext::new();
//!
//!     let session = lifecycle.set_up("Successful login").await?;
//!     let steps = LoginSteps::bind(session, &config)?;
//!     steps.open_login_page(&mut ctx).await?;
//!
//!     lifecycle
//!         .tear_down(&ScenarioOutcome::new("Successful login", ScenarioStatus::Passed))
//!         .await;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Object-store HTTP client and payloads |
//! | [`browser`] | Sessions, locators and element accessors |
//! | [`config`] | Suite configuration |
//! | [`driver`] | Session factory and scenario lifecycle |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`expect`] | Assertion helpers |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`json`] | JSON request templates |
//! | [`pages`] | Login and landing pages |
//! | [`steps`] | Scenario step bindings |

// ============================================================================
// Modules
// ============================================================================

/// Object-store HTTP access.
pub mod api;

/// Browser sessions and element accessors.
///
/// - [`Session`] - One live browser session
/// - [`Locator`] - Element locator
/// - [`PageElement`] - Waiting accessor for one control
pub mod browser;

/// Suite configuration.
pub mod config;

/// Session factory and scenario lifecycle.
///
/// Use [`Driver::builder()`] to create a configured driver instance.
pub mod driver;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Assertion helpers.
pub mod expect;

/// Type-safe identifiers.
pub mod identifiers;

/// JSON request templates.
pub mod json;

/// Page abstractions.
pub mod pages;

/// Scenario step bindings.
pub mod steps;

// ============================================================================
// Re-exports
// ============================================================================

// API types
pub use api::{ApiResponse, ExpectedObject, ObjectRecord, ObjectsClient};

// Browser types
pub use browser::{ElementStatus, Locator, PageElement, Session, WaitConfig, WebDriverSession};

// Configuration
pub use config::{SuiteConfig, SuiteConfigBuilder};

// Driver types
pub use driver::{
    BrowserKind, BrowserOptions, Driver, DriverBuilder, DriverLifecycle, ScenarioOutcome,
    ScenarioStatus, SessionProvider,
};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{ObjectId, ScenarioId};

// Page types
pub use pages::{LandingPage, LoginPage};

// Step types
pub use steps::{CredentialsTable, FlowState, LoginSteps, ObjectSteps, ScenarioContext};
