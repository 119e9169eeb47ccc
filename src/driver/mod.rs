//! WebDriver session management.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Driver`] | Factory for browser sessions |
//! | [`DriverBuilder`] | Fluent configuration builder |
//! | [`BrowserOptions`] | Browser session options |
//! | [`DriverLifecycle`] | Per-scenario setup and teardown |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use acceptance_suite::{BrowserOptions, Driver, DriverLifecycle, Result};
//!
//! # async fn example() -> Result<()> {
//! let driver = Driver::builder()
//!     .server_url("http://localhost:4444")
//!     .options(BrowserOptions::headless())
//!     .build()?;
//!
//! let mut lifecycle = DriverLifecycle::new(Arc::new(driver));
//! let session = lifecycle.set_up("example").await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for driver configuration.
pub mod builder;

/// Core driver implementation.
pub mod core;

/// Scenario setup and teardown.
pub mod lifecycle;

/// Browser kind and session options.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::DriverBuilder;
pub use core::Driver;
pub use lifecycle::{DriverLifecycle, ScenarioOutcome, ScenarioStatus, SessionProvider};
pub use options::{BrowserKind, BrowserOptions};
