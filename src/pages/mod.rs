//! Page abstractions.
//!
//! Each page groups the [`PageElement`](crate::browser::PageElement)
//! accessors of one logical screen and is built by injecting the scenario's
//! session.
//!
//! | Type | Screen |
//! |------|--------|
//! | [`LoginPage`] | Username/password form with error banner |
//! | [`LandingPage`] | Confirmation page shown after a successful login |

// ============================================================================
// Submodules
// ============================================================================

/// Landing page after login.
pub mod landing;

/// Login form.
pub mod login;

// ============================================================================
// Re-exports
// ============================================================================

pub use landing::LandingPage;
pub use login::LoginPage;
