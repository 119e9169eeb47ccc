//! Suite configuration.
//!
//! [`SuiteConfig`] is built once per run, either through the fluent
//! [`SuiteConfigBuilder`] or from `ACCEPTANCE_*` environment variables, and
//! is then shared read-only by every scenario.
//!
//! # Environment
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ACCEPTANCE_WEBDRIVER_URL` | WebDriver server, `none` disables the browser | `http://localhost:4444` |
//! | `ACCEPTANCE_BROWSER` | `firefox` or `chrome` | `firefox` |
//! | `ACCEPTANCE_HEADLESS` | Run without a window | `false` |
//! | `ACCEPTANCE_MAXIMIZE` | Maximize the window | `false` |
//! | `ACCEPTANCE_LOGIN_URL` | Login page | practice site |
//! | `ACCEPTANCE_API_URL` | Object collection | `https://api.restful-api.dev/objects` |
//! | `ACCEPTANCE_TEMPLATE` | Request body template | `tests/data/request_body.json` |
//! | `ACCEPTANCE_WAIT_TIMEOUT_MS` | Element wait timeout | `5000` |
//! | `ACCEPTANCE_POLL_INTERVAL_MS` | Element poll interval | `100` |
//! | `ACCEPTANCE_HTTP_TIMEOUT_MS` | HTTP request timeout | `30000` |
//! | `ACCEPTANCE_SCREENSHOT_DIR` | Failure screenshots | unset |
//!
//! # Example
//!
//! ```
//! use acceptance_suite::SuiteConfig;
//!
//! # fn example() -> acceptance_suite::Result<()> {
//! let config = SuiteConfig::builder()
//!     .webdriver_url("http://localhost:9515")
//!     .api_url("http://localhost:8080/objects")
//!     .build()?;
//!
//! assert_eq!(config.api_url().as_str(), "http://localhost:8080/objects");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::api::{DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT, ObjectsClient};
use crate::browser::WaitConfig;
use crate::driver::{BrowserKind, BrowserOptions, Driver};
use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default WebDriver server.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Default login page.
pub const DEFAULT_LOGIN_URL: &str = "https://practicetestautomation.com/practice-test-login/";

/// Default request body template, relative to the crate root.
pub const DEFAULT_TEMPLATE_PATH: &str = "tests/data/request_body.json";

/// Value of `ACCEPTANCE_WEBDRIVER_URL` that disables the browser.
const DISABLED: &str = "none";

// ============================================================================
// SuiteConfig
// ============================================================================

/// Validated suite configuration.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    webdriver_url: Option<String>,
    browser: BrowserOptions,
    login_url: Url,
    api_url: Url,
    template_path: PathBuf,
    wait: WaitConfig,
    http_timeout: Duration,
    screenshot_dir: Option<PathBuf>,
}

impl SuiteConfig {
    /// Creates a builder with default values.
    #[inline]
    #[must_use]
    pub fn builder() -> SuiteConfigBuilder {
        SuiteConfigBuilder::new()
    }

    /// Reads `ACCEPTANCE_*` variables from the process environment.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if a variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `ACCEPTANCE_*` variables through `lookup`.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut builder = Self::builder();

        if let Some(url) = get("ACCEPTANCE_WEBDRIVER_URL") {
            builder = if url.eq_ignore_ascii_case(DISABLED) {
                builder.without_webdriver()
            } else {
                builder.webdriver_url(url)
            };
        }
        if let Some(browser) = get("ACCEPTANCE_BROWSER") {
            builder = builder.browser(browser.parse()?);
        }
        if let Some(flag) = get("ACCEPTANCE_HEADLESS") {
            builder = builder.headless(parse_flag("ACCEPTANCE_HEADLESS", &flag)?);
        }
        if let Some(flag) = get("ACCEPTANCE_MAXIMIZE") {
            builder = builder.maximize(parse_flag("ACCEPTANCE_MAXIMIZE", &flag)?);
        }
        if let Some(url) = get("ACCEPTANCE_LOGIN_URL") {
            builder = builder.login_url(url);
        }
        if let Some(url) = get("ACCEPTANCE_API_URL") {
            builder = builder.api_url(url);
        }
        if let Some(path) = get("ACCEPTANCE_TEMPLATE") {
            builder = builder.template_path(path);
        }
        if let Some(ms) = get("ACCEPTANCE_WAIT_TIMEOUT_MS") {
            builder = builder.wait_timeout(parse_millis("ACCEPTANCE_WAIT_TIMEOUT_MS", &ms)?);
        }
        if let Some(ms) = get("ACCEPTANCE_POLL_INTERVAL_MS") {
            builder = builder.poll_interval(parse_millis("ACCEPTANCE_POLL_INTERVAL_MS", &ms)?);
        }
        if let Some(ms) = get("ACCEPTANCE_HTTP_TIMEOUT_MS") {
            builder = builder.http_timeout(parse_millis("ACCEPTANCE_HTTP_TIMEOUT_MS", &ms)?);
        }
        if let Some(dir) = get("ACCEPTANCE_SCREENSHOT_DIR") {
            builder = builder.screenshot_dir(dir);
        }

        builder.build()
    }
}

// ============================================================================
// SuiteConfig - Accessors
// ============================================================================

impl SuiteConfig {
    /// WebDriver server URL; `None` when the browser is disabled.
    #[inline]
    #[must_use]
    pub fn webdriver_url(&self) -> Option<&str> {
        self.webdriver_url.as_deref()
    }

    /// Browser session options.
    #[inline]
    #[must_use]
    pub fn browser(&self) -> &BrowserOptions {
        &self.browser
    }

    /// Login page URL.
    #[inline]
    #[must_use]
    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// Object collection URL.
    #[inline]
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Request body template.
    #[inline]
    #[must_use]
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Element wait policy.
    #[inline]
    #[must_use]
    pub fn wait(&self) -> WaitConfig {
        self.wait
    }

    /// HTTP request timeout.
    #[inline]
    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    /// Failure screenshot directory.
    #[inline]
    #[must_use]
    pub fn screenshot_dir(&self) -> Option<&Path> {
        self.screenshot_dir.as_deref()
    }

    /// Builds the session factory described by this configuration.
    pub fn driver(&self) -> Result<Driver> {
        let builder = Driver::builder().options(self.browser.clone());
        match &self.webdriver_url {
            Some(url) => builder.server_url(url.clone()).build(),
            None => builder.disabled().build(),
        }
    }

    /// Builds the object-store client described by this configuration.
    pub fn objects_client(&self) -> Result<ObjectsClient> {
        ObjectsClient::new(self.api_url.clone(), self.http_timeout)
    }
}

// ============================================================================
// SuiteConfigBuilder
// ============================================================================

/// Builder for [`SuiteConfig`].
#[derive(Debug, Clone)]
pub struct SuiteConfigBuilder {
    webdriver_url: Option<String>,
    browser: BrowserOptions,
    login_url: String,
    api_url: String,
    template_path: PathBuf,
    wait: WaitConfig,
    http_timeout: Duration,
    screenshot_dir: Option<PathBuf>,
}

impl Default for SuiteConfigBuilder {
    fn default() -> Self {
        Self {
            webdriver_url: Some(DEFAULT_WEBDRIVER_URL.to_string()),
            browser: BrowserOptions::default(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            wait: WaitConfig::default(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            screenshot_dir: None,
        }
    }
}

impl SuiteConfigBuilder {
    /// Creates a builder with default values.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the WebDriver server URL.
    #[must_use]
    pub fn webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = Some(url.into());
        self
    }

    /// Runs browser scenarios without a session.
    #[must_use]
    pub fn without_webdriver(mut self) -> Self {
        self.webdriver_url = None;
        self
    }

    /// Sets the browser kind.
    #[must_use]
    pub fn browser(mut self, kind: BrowserKind) -> Self {
        self.browser.browser = kind;
        self
    }

    /// Enables or disables headless mode.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.browser.headless = headless;
        self
    }

    /// Enables or disables window maximization.
    #[must_use]
    pub fn maximize(mut self, maximize: bool) -> Self {
        self.browser.maximize = maximize;
        self
    }

    /// Sets the login page URL.
    #[must_use]
    pub fn login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    /// Sets the object collection URL.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the request body template path.
    #[must_use]
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Sets the element wait timeout.
    #[must_use]
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait.timeout = timeout;
        self
    }

    /// Sets the element poll interval.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.wait.poll_interval = interval;
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Saves a screenshot into `dir` when a browser scenario fails.
    #[must_use]
    pub fn screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = Some(dir.into());
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if a URL does not parse or is not http(s)
    /// - [`Error::Config`] if a timeout is zero or the poll interval exceeds the wait timeout
    pub fn build(self) -> Result<SuiteConfig> {
        let login_url = parse_http_url("login", &self.login_url)?;
        let api_url = parse_http_url("API", &self.api_url)?;
        if let Some(url) = &self.webdriver_url {
            parse_http_url("WebDriver", url)?;
        }

        if self.wait.timeout.is_zero() || self.http_timeout.is_zero() {
            return Err(Error::config("Timeouts must be greater than zero"));
        }
        if self.wait.poll_interval.is_zero() || self.wait.poll_interval > self.wait.timeout {
            return Err(Error::config(format!(
                "Poll interval {:?} must be non-zero and at most the wait timeout {:?}",
                self.wait.poll_interval, self.wait.timeout
            )));
        }

        Ok(SuiteConfig {
            webdriver_url: self.webdriver_url,
            browser: self.browser,
            login_url,
            api_url,
            template_path: self.template_path,
            wait: self.wait,
            http_timeout: self.http_timeout,
            screenshot_dir: self.screenshot_dir,
        })
    }
}

// ============================================================================
// Parsing
// ============================================================================

fn parse_http_url(what: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::config(format!("Invalid {what} URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "{what} URL must use http or https, got '{raw}'"
        )));
    }
    Ok(url)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(format!("{key}: expected a boolean, got '{raw}'"))),
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration> {
    u64::from_str(raw)
        .map(Duration::from_millis)
        .map_err(|e| Error::config(format!("{key}: expected milliseconds, got '{raw}': {e}")))
}

// ============================================================================
// Tests
// ============================================================================
