//! Login flow steps.
//!
//! [`LoginSteps`] drives the login and landing pages for one scenario and
//! enforces the flow `Start -> OnLoginPage -> Submitted -> Verified` through
//! the [`ScenarioContext`].

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tracing::info;

use crate::browser::{Session, WaitConfig};
use crate::config::SuiteConfig;
use crate::error::{Error, Result};
use crate::expect::{ensure_contains, ensure_eq};
use crate::pages::{LandingPage, LoginPage};

use super::context::{CredentialsTable, FlowState, ScenarioContext};

// ============================================================================
// Constants
// ============================================================================

/// Substring of the landing page URL.
pub const SUCCESS_URL_MARKER: &str = "logged-in-successfully";

/// Landing page header.
pub const LANDING_HEADER: &str = "Logged In Successfully";

/// Text of the landing page logout link.
pub const LOGOUT_LINK: &str = "Log out";

/// Landing page greeting for `username`.
#[must_use]
pub fn success_message(username: &str) -> String {
    format!("Congratulations {username}. You successfully logged in!")
}

// ============================================================================
// LoginSteps
// ============================================================================

/// Page-level login flow bound to one session.
#[derive(Debug, Clone)]
pub struct LoginSteps {
    login: LoginPage,
    landing: LandingPage,
}

impl LoginSteps {
    /// Builds both pages over `session`.
    #[must_use]
    pub fn new(session: Arc<dyn Session>, login_url: impl Into<String>, wait: WaitConfig) -> Self {
        Self {
            login: LoginPage::new(Arc::clone(&session), login_url, wait),
            landing: LandingPage::new(session, wait),
        }
    }

    /// Builds the steps from the scenario's session, if setup produced one.
    ///
    /// # Errors
    ///
    /// [`Error::NoSession`] if `session` is `None`.
    pub fn bind(session: Option<Arc<dyn Session>>, config: &SuiteConfig) -> Result<Self> {
        let session = session.ok_or(Error::NoSession)?;
        Ok(Self::new(session, config.login_url().as_str(), config.wait()))
    }

    /// `I am on the Login page`
    pub async fn open_login_page(&self, ctx: &mut ScenarioContext) -> Result<()> {
        ctx.require_state("I am on the Login page", FlowState::Start)?;

        info!(scenario = %ctx.id(), "Opening the Login page");
        self.login.open().await?;
        info!(scenario = %ctx.id(), "Login page opened successfully");

        ctx.advance(FlowState::OnLoginPage);
        Ok(())
    }

    /// `I login with the following credentials:`
    ///
    /// Enters the username, then the password, then submits.
    pub async fn login_with_credentials(
        &self,
        ctx: &mut ScenarioContext,
        credentials: &CredentialsTable,
    ) -> Result<()> {
        ctx.require_state("I login with the following credentials", FlowState::OnLoginPage)?;

        let username = credentials.username();
        info!(scenario = %ctx.id(), username = %username, "Logging in");
        ctx.set_username(username);

        self.login.enter_username(username).await?;
        self.login.enter_password(credentials.password()).await?;
        self.login.click_login().await?;
        info!(scenario = %ctx.id(), "Login form submitted");

        ctx.advance(FlowState::Submitted);
        Ok(())
    }

    /// `I should be redirected to the landing page`
    pub async fn verify_landing_page(&self, ctx: &mut ScenarioContext) -> Result<()> {
        ctx.require_state("I should be redirected to the landing page", FlowState::Submitted)?;
        info!(scenario = %ctx.id(), "Verifying landing page");

        let url = self.landing.current_url().await?;
        ensure_contains("landing page URL", SUCCESS_URL_MARKER, &url)?;

        let header = self.landing.post_header_text().await?;
        ensure_eq("landing page header", LANDING_HEADER, header.as_str())?;

        let content = self.landing.post_content_text().await?;
        ensure_eq(
            "landing page content",
            success_message(ctx.username()).as_str(),
            content.as_str(),
        )?;

        let link = self.landing.post_content_link().await?;
        ensure_eq("landing page link", LOGOUT_LINK, link.as_str())?;

        info!(scenario = %ctx.id(), "Landing page verified");
        ctx.advance(FlowState::Verified);
        Ok(())
    }

    /// `I should see the error message "<expected>"`
    ///
    /// Exact, case-sensitive comparison.
    pub async fn verify_error_message(&self, ctx: &mut ScenarioContext, expected: &str) -> Result<()> {
        ctx.require_state("I should see the error message", FlowState::Submitted)?;
        info!(scenario = %ctx.id(), expected = %expected, "Verifying error message");

        let actual = self.login.error_message().await?;
        ensure_eq("login error message", expected, actual.as_str())?;

        ctx.advance(FlowState::Verified);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
