//! Scripted in-memory [`Session`] for unit tests.
//!
//! [`FakeBrowser::practice_login_site`] models the practice login page:
//! typing into the fields records their values and clicking submit either
//! navigates to the landing page or reveals the error banner.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};

use super::selector::Locator;
use super::session::{ElementStatus, Session};

pub(crate) const LOGIN_URL: &str = "https://practice.test/login/";
pub(crate) const LANDING_URL: &str = "https://practice.test/logged-in-successfully/";
pub(crate) const VALID_USERNAME: &str = "student";
pub(crate) const VALID_PASSWORD: &str = "Password123";

/// One scripted element.
#[derive(Debug, Clone)]
pub(crate) struct FakeElement {
    pub text: String,
    pub value: String,
    pub displayed: bool,
    pub enabled: bool,
    /// Number of probes answered "missing" before the element appears.
    pub appears_after: usize,
    /// Number of probes failing with `ElementNotFound`, as a node replaced
    /// mid-navigation does, before any other answer.
    pub stale_probes: usize,
}

impl FakeElement {
    pub(crate) fn visible(text: &str) -> Self {
        Self {
            text: text.to_string(),
            value: String::new(),
            displayed: true,
            enabled: true,
            appears_after: 0,
            stale_probes: 0,
        }
    }

    pub(crate) fn hidden(text: &str) -> Self {
        Self {
            displayed: false,
            ..Self::visible(text)
        }
    }
}

#[derive(Debug, Default)]
struct FakeState {
    url: String,
    elements: HashMap<Locator, FakeElement>,
    actions: Vec<String>,
    quit_calls: usize,
    closed: bool,
    fail_quit: bool,
    login_site: bool,
}

/// In-memory browser.
#[derive(Debug, Default)]
pub(crate) struct FakeBrowser {
    state: Mutex<FakeState>,
}

impl FakeBrowser {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Browser whose login form behaves like the practice site.
    pub(crate) fn practice_login_site() -> Arc<Self> {
        let browser = Self::default();
        {
            let mut state = browser.state.lock();
            state.login_site = true;
        }
        Arc::new(browser)
    }

    pub(crate) fn with_element(self: Arc<Self>, locator: Locator, element: FakeElement) -> Arc<Self> {
        self.state.lock().elements.insert(locator, element);
        self
    }

    pub(crate) fn failing_quit(self: Arc<Self>) -> Arc<Self> {
        self.state.lock().fail_quit = true;
        self
    }

    pub(crate) fn set_url(&self, url: &str) {
        self.state.lock().url = url.to_string();
    }

    pub(crate) fn actions(&self) -> Vec<String> {
        self.state.lock().actions.clone()
    }

    pub(crate) fn quit_calls(&self) -> usize {
        self.state.lock().quit_calls
    }

    pub(crate) fn value_of(&self, locator: &Locator) -> Option<String> {
        self.state
            .lock()
            .elements
            .get(locator)
            .map(|e| e.value.clone())
    }

    fn show_login_form(state: &mut FakeState) {
        for id in ["username", "password", "submit"] {
            state
                .elements
                .insert(Locator::id(id), FakeElement::visible(if id == "submit" { "Submit" } else { "" }));
        }
        state
            .elements
            .insert(Locator::id("error"), FakeElement::hidden(""));
    }

    fn submit_login(state: &mut FakeState) {
        let value = |state: &FakeState, id: &str| {
            state
                .elements
                .get(&Locator::id(id))
                .map(|e| e.value.clone())
                .unwrap_or_default()
        };
        let username = value(state, "username");
        let password = value(state, "password");

        if username == VALID_USERNAME && password == VALID_PASSWORD {
            state.url = LANDING_URL.to_string();
            state.elements.clear();
            state.elements.insert(
                Locator::xpath("//div[contains(@class,'post-header')]"),
                FakeElement::visible("  Logged In Successfully "),
            );
            state.elements.insert(
                Locator::xpath("//div[contains(@class,'post-content')]//p"),
                FakeElement::visible(&format!(
                    "Congratulations {username}. You successfully logged in!\n"
                )),
            );
            state.elements.insert(
                Locator::xpath("//div[contains(@class,'post-content')]//a"),
                FakeElement::visible("Log out"),
            );
        } else {
            let message = if username == VALID_USERNAME {
                "Your password is invalid!"
            } else {
                "Your username is invalid!"
            };
            state
                .elements
                .insert(Locator::id("error"), FakeElement::visible(message));
        }
    }

    fn check_open(state: &FakeState) -> Result<()> {
        if state.closed {
            return Err(Error::SessionClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl Session for FakeBrowser {
    async fn goto(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        Self::check_open(&state)?;
        state.actions.push(format!("goto {url}"));
        state.url = url.to_string();
        if state.login_site {
            Self::show_login_form(&mut state);
        }
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let state = self.state.lock();
        Self::check_open(&state)?;
        Ok(state.url.clone())
    }

    async fn probe(&self, locator: &Locator) -> Result<Option<ElementStatus>> {
        let mut state = self.state.lock();
        Self::check_open(&state)?;
        let Some(element) = state.elements.get_mut(locator) else {
            return Ok(None);
        };
        if element.stale_probes > 0 {
            element.stale_probes -= 1;
            return Err(Error::element_not_found(locator));
        }
        if element.appears_after > 0 {
            element.appears_after -= 1;
            return Ok(None);
        }
        Ok(Some(ElementStatus {
            displayed: element.displayed,
            enabled: element.enabled,
        }))
    }

    async fn type_into(&self, locator: &Locator, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        Self::check_open(&state)?;
        state.actions.push(format!("type {locator} {text}"));
        let element = state
            .elements
            .get_mut(locator)
            .ok_or_else(|| Error::element_not_found(locator))?;
        element.value = text.to_string();
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let mut state = self.state.lock();
        Self::check_open(&state)?;
        state.actions.push(format!("click {locator}"));
        if !state.elements.contains_key(locator) {
            return Err(Error::element_not_found(locator));
        }
        if state.login_site && *locator == Locator::id("submit") {
            Self::submit_login(&mut state);
        }
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> Result<String> {
        let state = self.state.lock();
        Self::check_open(&state)?;
        state
            .elements
            .get(locator)
            .map(|e| e.text.clone())
            .ok_or_else(|| Error::element_not_found(locator))
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        let mut state = self.state.lock();
        Self::check_open(&state)?;
        state.actions.push("screenshot".to_string());
        Ok(vec![0x89, b'P', b'N', b'G'])
    }

    async fn quit(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.quit_calls += 1;
        if state.fail_quit {
            return Err(Error::config("browser refused to quit"));
        }
        state.closed = true;
        Ok(())
    }

    fn is_open(&self) -> bool {
        !self.state.lock().closed
    }
}
