//! Per-scenario world and hooks.

use std::sync::{Arc, OnceLock};

use acceptance_suite::{
    DriverLifecycle, Error, LoginSteps, ObjectSteps, Result, ScenarioContext, ScenarioOutcome,
    ScenarioStatus, SuiteConfig,
};
use cucumber::World;
use cucumber::event::ScenarioFinished;
use cucumber::gherkin::{Feature, Scenario};

use crate::tags::needs_browser;

static CONFIG: OnceLock<Arc<SuiteConfig>> = OnceLock::new();

/// Installs the configuration every world is built from.
pub fn install_config(config: SuiteConfig) {
    let _ = CONFIG.set(Arc::new(config));
}

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct AcceptanceWorld {
    config: Arc<SuiteConfig>,
    lifecycle: DriverLifecycle,
    ctx: ScenarioContext,
    login: Option<LoginSteps>,
    objects: Option<ObjectSteps>,
}

impl AcceptanceWorld {
    fn new() -> Self {
        let config = CONFIG
            .get()
            .cloned()
            .expect("suite configuration installed before the run");
        let driver = config.driver().expect("driver configuration validated at load");

        let mut lifecycle = DriverLifecycle::new(Arc::new(driver));
        if let Some(dir) = config.screenshot_dir() {
            lifecycle = lifecycle.with_screenshot_dir(dir);
        }

        Self {
            config,
            lifecycle,
            ctx: ScenarioContext::new(),
            login: None,
            objects: None,
        }
    }

    /// Login steps with the scenario context.
    pub fn login(&mut self) -> Result<(&LoginSteps, &mut ScenarioContext)> {
        let steps = self.login.as_ref().ok_or(Error::NoSession)?;
        Ok((steps, &mut self.ctx))
    }

    /// Object steps with the scenario context, built on first use.
    pub fn objects(&mut self) -> Result<(&ObjectSteps, &mut ScenarioContext)> {
        let steps = match self.objects.take() {
            Some(steps) => steps,
            None => ObjectSteps::from_config(&self.config)?,
        };
        let steps = self.objects.insert(steps);
        Ok((&*steps, &mut self.ctx))
    }

    /// Opens the browser session for login scenarios.
    ///
    /// Panics on setup failure so the runner reports a failed before-hook and
    /// skips the scenario's steps.
    pub async fn set_up(&mut self, feature: &Feature, scenario: &Scenario) {
        if !needs_browser(feature, scenario) {
            return;
        }

        match self.lifecycle.set_up(&scenario.name).await {
            Ok(session) => {
                self.login = session.map(|session| {
                    LoginSteps::new(session, self.config.login_url().as_str(), self.config.wait())
                });
            }
            Err(e) => panic!("{e}"),
        }
    }

    /// Releases the browser session of login scenarios. Never fails.
    pub async fn tear_down(
        &mut self,
        feature: &Feature,
        scenario: &Scenario,
        finished: &ScenarioFinished,
    ) {
        if !needs_browser(feature, scenario) {
            return;
        }

        let status = match finished {
            ScenarioFinished::StepPassed => ScenarioStatus::Passed,
            ScenarioFinished::StepSkipped => ScenarioStatus::Skipped,
            _ => ScenarioStatus::Failed,
        };
        self.login = None;
        self.lifecycle
            .tear_down(&ScenarioOutcome::new(scenario.name.clone(), status))
            .await;
    }
}
