use crate::playwright_ext::PageReadyExt;
use crate::wait::{Wait, LOGIN_SETTLE_TIMEOUT};
use crate::Context;
use anyhow::Result;
use common::locators::{listing, login};
use common::users::{UserKind, PASSWORD};
use playwright::api::Page;
use tracing::debug;

/// The credential screen the shop greets every fresh session with.
pub struct LoginPage<'a> {
    page: &'a Page,
    base_url: &'a str,
}

impl<'a> LoginPage<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        LoginPage {
            page: &ctx.page,
            base_url: &ctx.config.base_url,
        }
    }

    /// Navigates to the login screen.
    pub async fn open(&self) -> Result<()> {
        self.page.goto_builder(self.base_url).goto().await?;
        Ok(())
    }

    /// Fills the credential form and submits it.
    pub async fn login(&self, user: UserKind) -> Result<()> {
        debug!(user = %user, "logging in");
        self.page
            .fill_when_ready(&login::USERNAME_FIELD, user.username(), Wait::new())
            .await?;
        self.page
            .fill_when_ready(&login::PASSWORD_FIELD, PASSWORD, Wait::new())
            .await?;
        self.page
            .click_when_ready(&login::LOGIN_BUTTON, Wait::new())
            .await?;
        Ok(())
    }

    /// Logs in and blocks until the product listing has rendered.
    pub async fn login_expecting_products(&self, user: UserKind) -> Result<()> {
        self.login(user).await?;
        self.page
            .wait_visible(&listing::TITLE, Wait::with_timeout(LOGIN_SETTLE_TIMEOUT))
            .await?;
        Ok(())
    }

    /// Text of the error banner under the form.
    pub async fn error_message(&self) -> Result<String> {
        self.page
            .text_when_visible(&login::ERROR_MESSAGE, Wait::new())
            .await
    }
}
