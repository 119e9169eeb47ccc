//! Browser access layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Session`] | Capability over one live browser session |
//! | [`WebDriverSession`] | [`Session`] backed by a WebDriver server |
//! | [`Locator`] | Element locator (id, XPath, CSS) |
//! | [`PageElement`] | Waiting accessor for one UI control |

// ============================================================================
// Submodules
// ============================================================================

/// Element accessors and wait policy.
pub mod element;

/// Element locator strategies.
pub mod selector;

/// Session capability and its WebDriver implementation.
pub mod session;

#[cfg(test)]
pub(crate) mod fake;

// ============================================================================
// Re-exports
// ============================================================================

pub use element::{PageElement, WaitConfig};
pub use selector::Locator;
pub use session::{ElementStatus, Session, WebDriverSession};
