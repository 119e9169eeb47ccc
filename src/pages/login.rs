//! Login form.

use std::sync::Arc;

use tracing::{debug, info};

use crate::browser::{Locator, PageElement, Session, WaitConfig};
use crate::error::Result;

// ============================================================================
// LoginPage
// ============================================================================

/// The practice site's login form.
#[derive(Debug, Clone)]
pub struct LoginPage {
    session: Arc<dyn Session>,
    url: String,
    username: PageElement,
    password: PageElement,
    submit: PageElement,
    error: PageElement,
}

impl LoginPage {
    /// Binds the page to `session`. `url` is where [`open`](Self::open) navigates.
    #[must_use]
    pub fn new(session: Arc<dyn Session>, url: impl Into<String>, wait: WaitConfig) -> Self {
        let element = |id: &str| PageElement::new(Arc::clone(&session), Locator::id(id), wait);
        Self {
            username: element("username"),
            password: element("password"),
            submit: element("submit"),
            error: element("error"),
            url: url.into(),
            session,
        }
    }

    /// Navigates to the login page.
    pub async fn open(&self) -> Result<()> {
        info!(url = %self.url, "Opening login page");
        self.session.goto(&self.url).await
    }

    /// Types into the username field.
    pub async fn enter_username(&self, username: &str) -> Result<()> {
        debug!(username = %username, "Entering username");
        self.username.type_into(username).await
    }

    /// Types into the password field.
    pub async fn enter_password(&self, password: &str) -> Result<()> {
        debug!("Entering password");
        self.password.type_into(password).await
    }

    /// Clicks the submit button.
    pub async fn click_login(&self) -> Result<()> {
        debug!("Submitting login form");
        self.submit.click_on().await
    }

    /// Returns the trimmed text of the error banner.
    pub async fn error_message(&self) -> Result<String> {
        self.error.visible_text().await
    }
}

// ============================================================================
// Tests
// ============================================================================
