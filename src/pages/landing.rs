//! Landing page shown after a successful login.

use std::sync::Arc;

use crate::browser::{Locator, PageElement, Session, WaitConfig};
use crate::error::Result;

// ============================================================================
// Locators
// ============================================================================

const POST_HEADER: &str = "//div[contains(@class,'post-header')]";
const POST_CONTENT: &str = "//div[contains(@class,'post-content')]//p";
const POST_CONTENT_LINK: &str = "//div[contains(@class,'post-content')]//a";

// ============================================================================
// LandingPage
// ============================================================================

/// Read-only view of the post-login confirmation page.
///
/// Every locator may match several nodes; only the first is read.
#[derive(Debug, Clone)]
pub struct LandingPage {
    session: Arc<dyn Session>,
    post_header: PageElement,
    post_content: PageElement,
    post_content_link: PageElement,
}

impl LandingPage {
    /// Binds the page to `session`.
    #[must_use]
    pub fn new(session: Arc<dyn Session>, wait: WaitConfig) -> Self {
        let element = |xpath: &str| PageElement::new(Arc::clone(&session), Locator::xpath(xpath), wait);
        Self {
            post_header: element(POST_HEADER),
            post_content: element(POST_CONTENT),
            post_content_link: element(POST_CONTENT_LINK),
            session,
        }
    }

    /// Returns the URL the browser is on.
    pub async fn current_url(&self) -> Result<String> {
        self.session.current_url().await
    }

    /// Returns the trimmed page header.
    pub async fn post_header_text(&self) -> Result<String> {
        self.post_header.visible_text().await
    }

    /// Returns the trimmed first paragraph of the post body.
    pub async fn post_content_text(&self) -> Result<String> {
        self.post_content.visible_text().await
    }

    /// Returns the trimmed text of the first link in the post body.
    pub async fn post_content_link(&self) -> Result<String> {
        self.post_content_link.visible_text().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::browser::fake::{FakeBrowser, FakeElement};

    fn quick_wait() -> WaitConfig {
        WaitConfig {
            timeout: Duration::from_millis(200),
            poll_interval: Duration::from_millis(10),
        }
    }

    #[tokio::test]
    async fn test_texts_are_trimmed() {
        let browser = FakeBrowser::new()
            .with_element(Locator::xpath(POST_HEADER), FakeElement::visible("  Logged In Successfully\n"))
            .with_element(Locator::xpath(POST_CONTENT), FakeElement::visible("Hello there. "))
            .with_element(Locator::xpath(POST_CONTENT_LINK), FakeElement::visible(" Log out "));
        browser.set_url("https://practice.test/logged-in-successfully/");
        let page = LandingPage::new(browser, quick_wait());

        assert_eq!(page.post_header_text().await.unwrap(), "Logged In Successfully");
        assert_eq!(page.post_content_text().await.unwrap(), "Hello there.");
        assert_eq!(page.post_content_link().await.unwrap(), "Log out");
        assert!(page.current_url().await.unwrap().contains("logged-in-successfully"));
    }

    #[tokio::test]
    async fn test_late_element_is_awaited() {
        let mut header = FakeElement::visible("Logged In Successfully");
        header.appears_after = 3;
        let browser = FakeBrowser::new().with_element(Locator::xpath(POST_HEADER), header);
        let page = LandingPage::new(browser, quick_wait());

        assert_eq!(page.post_header_text().await.unwrap(), "Logged In Successfully");
    }

    #[tokio::test]
    async fn test_read_after_close_fails() {
        let browser = FakeBrowser::new()
            .with_element(Locator::xpath(POST_HEADER), FakeElement::visible("x"));
        let page = LandingPage::new(browser.clone(), quick_wait());
        browser.quit().await.unwrap();

        let err = page.post_header_text().await.unwrap_err();
        assert!(err.is_element_error());
        assert!(!err.is_timeout());
    }
}
