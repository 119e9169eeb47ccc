//! Object create/update/delete steps.
//!
//! The three steps run in order within one scenario and share the object id
//! recorded in the [`ScenarioContext`] by the create step. Each step checks
//! its own response, then re-reads the object to confirm the store's state.
//! A failed step leaves the object behind; the sandbox is disposable.

// ============================================================================
// Imports
// ============================================================================

use std::path::PathBuf;

use serde_json::Value;
use tracing::{info, warn};

use crate::api::{
    DeletionNotice, ExpectedObject, ObjectRecord, ObjectsClient, TEMPLATE_NAME, UPDATED_NAME,
};
use crate::config::SuiteConfig;
use crate::error::{Error, Result};
use crate::expect::ensure_eq;
use crate::identifiers::ObjectId;
use crate::json;

use super::context::ScenarioContext;

// ============================================================================
// ObjectSteps
// ============================================================================

/// HTTP steps over the object store.
#[derive(Debug, Clone)]
pub struct ObjectSteps {
    client: ObjectsClient,
    template_path: PathBuf,
}

impl ObjectSteps {
    /// Creates the steps from a client and the request body template.
    #[must_use]
    pub fn new(client: ObjectsClient, template_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            template_path: template_path.into(),
        }
    }

    /// Creates the steps from the suite configuration.
    pub fn from_config(config: &SuiteConfig) -> Result<Self> {
        Ok(Self::new(config.objects_client()?, config.template_path()))
    }

    /// `I create a new object`
    pub async fn create_object(&self, ctx: &mut ScenarioContext) -> Result<()> {
        let body = json::read_as_map(&self.template_path)?;
        info!(scenario = %ctx.id(), "Creating object");

        let response = self.client.create(&body).await?;
        let record: ObjectRecord = response.expect_status(200)?.expect_json()?;

        let id = record
            .id
            .clone()
            .ok_or_else(|| Error::assertion("created object id", "an id", Option::<String>::None))?;
        let id = ObjectId::new(id);
        ctx.record_object_id(id.clone())?;
        info!(scenario = %ctx.id(), object_id = %id, "Object created");

        ensure_eq("created object name", TEMPLATE_NAME, record.name.as_str())?;
        self.verify_stored(&id, &ExpectedObject::default()).await
    }

    /// `I update the object name to "<new_name>"`
    ///
    /// The response and the re-read object are checked against
    /// [`UPDATED_NAME`], not against `new_name`.
    pub async fn update_object_name(&self, ctx: &mut ScenarioContext, new_name: &str) -> Result<()> {
        let id = ctx.object_id()?.clone();
        if new_name != UPDATED_NAME {
            warn!(
                scenario = %ctx.id(),
                requested = %new_name,
                checked = UPDATED_NAME,
                "Update name differs from the name the update checks expect"
            );
        }

        let body = json::with_override(
            json::read_as_map(&self.template_path)?,
            "name",
            Value::String(new_name.to_string()),
        );
        info!(scenario = %ctx.id(), object_id = %id, name = %new_name, "Updating object name");

        let response = self.client.update(id.as_str(), &body).await?;
        let record: ObjectRecord = response.expect_status(200)?.expect_json()?;
        ensure_eq("updated object name", UPDATED_NAME, record.name.as_str())?;

        self.verify_stored(&id, &ExpectedObject::named(UPDATED_NAME)).await
    }

    /// `I delete the object`
    pub async fn delete_object(&self, ctx: &mut ScenarioContext) -> Result<()> {
        let id = ctx.object_id()?.clone();
        info!(scenario = %ctx.id(), object_id = %id, "Deleting object");

        let response = self.client.delete(id.as_str()).await?;
        let notice: DeletionNotice = response.expect_status(200)?.expect_json()?;
        ensure_eq(
            "deletion message",
            DeletionNotice::expected_for(id.as_str()).as_str(),
            notice.message.as_str(),
        )?;

        self.client
            .fetch(id.as_str())
            .await?
            .expect_status(404)?
            .expect_json_content()?;
        info!(scenario = %ctx.id(), object_id = %id, "Object deleted");
        Ok(())
    }

    /// Re-reads object `id` and checks every field.
    async fn verify_stored(&self, id: &ObjectId, expected: &ExpectedObject) -> Result<()> {
        let response = self.client.fetch(id.as_str()).await?;
        let record: ObjectRecord = response.expect_status(200)?.expect_json()?;
        expected.verify(&record)
    }
}

// ============================================================================
// Tests
// ============================================================================
