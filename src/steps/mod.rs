//! Scenario step bindings.
//!
//! Gherkin phrases map onto these methods one to one; the cucumber glue in
//! `tests/acceptance` only parses arguments and forwards.
//!
//! | Phrase | Method |
//! |--------|--------|
//! | `I am on the Login page` | [`LoginSteps::open_login_page`] |
//! | `I login with the following credentials:` | [`LoginSteps::login_with_credentials`] |
//! | `I should be redirected to the landing page` | [`LoginSteps::verify_landing_page`] |
//! | `I should see the error message "..."` | [`LoginSteps::verify_error_message`] |
//! | `I create a new object` | [`ObjectSteps::create_object`] |
//! | `I update the object name to "..."` | [`ObjectSteps::update_object_name`] |
//! | `I delete the object` | [`ObjectSteps::delete_object`] |

// ============================================================================
// Submodules
// ============================================================================

/// Scenario-scoped state and data tables.
pub mod context;

/// Login flow.
pub mod login;

/// Object store round trip.
pub mod objects;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::{CredentialsTable, FlowState, ScenarioContext};
pub use login::LoginSteps;
pub use objects::ObjectSteps;
