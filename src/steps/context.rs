//! Per-scenario state.
//!
//! One [`ScenarioContext`] is created when a scenario starts and dropped
//! when it ends. Step handlers receive it by `&mut`; nothing in it is shared
//! between scenarios.

// ============================================================================
// Imports
// ============================================================================

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::{ObjectId, ScenarioId};

// ============================================================================
// FlowState
// ============================================================================

/// Position in the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing done yet.
    #[default]
    Start,
    /// The login page is open.
    OnLoginPage,
    /// Credentials have been submitted.
    Submitted,
    /// The terminal check ran.
    Verified,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "Start",
            Self::OnLoginPage => "OnLoginPage",
            Self::Submitted => "Submitted",
            Self::Verified => "Verified",
        })
    }
}

// ============================================================================
// ScenarioContext
// ============================================================================

/// Mutable state carried between the steps of one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    id: ScenarioId,
    username: String,
    object_id: Option<ObjectId>,
    state: FlowState,
}

impl Default for ScenarioContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioContext {
    /// Creates an empty context with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ScenarioId::next(),
            username: String::new(),
            object_id: None,
            state: FlowState::Start,
        }
    }

    /// Returns the scenario id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    /// Returns the username entered on the login form, or `""`.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Remembers the username entered on the login form.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Returns the current login flow state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Fails unless the flow is in `expected`.
    pub(crate) fn require_state(&self, step: &'static str, expected: FlowState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::step_order(step, self.state))
        }
    }

    /// Moves the flow to `next`.
    pub(crate) fn advance(&mut self, next: FlowState) {
        debug!(scenario = %self.id, from = %self.state, to = %next, "Login flow transition");
        self.state = next;
    }

    /// Returns the recorded object id.
    ///
    /// # Errors
    ///
    /// [`Error::MissingObjectId`] if no object was created yet.
    pub fn object_id(&self) -> Result<&ObjectId> {
        self.object_id.as_ref().ok_or(Error::MissingObjectId)
    }

    /// Records the id of the created object.
    ///
    /// Recording the same id again is accepted; a different one is not.
    ///
    /// # Errors
    ///
    /// [`Error::ObjectIdReassigned`] if a different id is already recorded.
    pub fn record_object_id(&mut self, id: ObjectId) -> Result<()> {
        match &self.object_id {
            Some(current) if *current != id => Err(Error::ObjectIdReassigned {
                current: current.to_string(),
                attempted: id.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                debug!(scenario = %self.id, object_id = %id, "Recorded object id");
                self.object_id = Some(id);
                Ok(())
            }
        }
    }
}

// ============================================================================
// CredentialsTable
// ============================================================================

/// Key used for the username row.
pub const USERNAME_KEY: &str = "Username";

/// Key used for the password row.
pub const PASSWORD_KEY: &str = "Password";

/// Username and password read from a two-column `| key | value |` table.
///
/// Missing rows and empty cells both read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsTable {
    entries: HashMap<String, String>,
}

impl CredentialsTable {
    /// Builds the table from raw rows.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTable`] if a row has more than two cells or a key repeats.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self> {
        let mut entries = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            if row.len() > 2 {
                return Err(Error::invalid_table(format!(
                    "row {} has {} cells, expected key and value",
                    index + 1,
                    row.len()
                )));
            }
            let Some(key) = row.first() else {
                continue;
            };
            let key = key.trim().to_string();
            let value = row.get(1).cloned().unwrap_or_default();

            if entries.insert(key.clone(), value).is_some() {
                return Err(Error::invalid_table(format!("duplicate key '{key}'")));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the value for `key`, or `""`.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Returns the username, or `""`.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        self.get(USERNAME_KEY)
    }

    /// Returns the password, or `""`.
    #[inline]
    #[must_use]
    pub fn password(&self) -> &str {
        self.get(PASSWORD_KEY)
    }
}

// ============================================================================
// Tests
// ============================================================================
