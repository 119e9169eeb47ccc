//! Object-store payloads and the values the suite expects back.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::expect::ensure_eq;

// ============================================================================
// Constants
// ============================================================================

/// Name sent by the create request template.
pub const TEMPLATE_NAME: &str = "Test Object Name";

/// Name the update step expects in responses.
pub const UPDATED_NAME: &str = "Test Object Updated Name";

// ============================================================================
// ObjectRecord
// ============================================================================

/// An object as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Object name.
    pub name: String,
    /// Attribute bag.
    pub data: ObjectData,
}

/// Attributes of an [`ObjectRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    pub year: i64,
    pub price: f64,
    #[serde(rename = "CPU model")]
    pub cpu_model: String,
    #[serde(rename = "Hard disk size")]
    pub hard_disk_size: String,
}

/// Body of a successful DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletionNotice {
    pub message: String,
}

impl DeletionNotice {
    /// Message the store returns after deleting `id`.
    #[must_use]
    pub fn expected_for(id: &str) -> String {
        format!("Object with id = {id} has been deleted.")
    }
}

// ============================================================================
// ExpectedObject
// ============================================================================

/// Field values a fetched object must carry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedObject {
    pub name: String,
    pub year: i64,
    pub price: f64,
    pub cpu_model: String,
    pub hard_disk_size: String,
}

impl Default for ExpectedObject {
    fn default() -> Self {
        Self {
            name: TEMPLATE_NAME.to_string(),
            year: 2019,
            price: 1849.99,
            cpu_model: "Intel Core i9".to_string(),
            hard_disk_size: "1 TB".to_string(),
        }
    }
}

impl ExpectedObject {
    /// Same attributes, different name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks every field of `record`, naming the first one that differs.
    ///
    /// # Errors
    ///
    /// [`Error::Assertion`](crate::error::Error::Assertion) on the first mismatch.
    pub fn verify(&self, record: &ObjectRecord) -> Result<()> {
        ensure_eq("object name", &self.name, &record.name)?;
        ensure_eq("data.year", self.year, record.data.year)?;
        ensure_eq("data.price", self.price, record.data.price)?;
        ensure_eq("data.CPU model", &self.cpu_model, &record.data.cpu_model)?;
        ensure_eq(
            "data.Hard disk size",
            &self.hard_disk_size,
            &record.data.hard_disk_size,
        )
    }
}
