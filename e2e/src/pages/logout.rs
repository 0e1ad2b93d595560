use crate::playwright_ext::PageReadyExt;
use crate::wait::{NotReady, Wait, CONTROL_TIMEOUT};
use crate::Context;
use anyhow::Result;
use common::locators::{login, menu};
use playwright::api::Page;

/// Logout flow, reachable from any screen that shows the sidebar menu.
pub struct LogoutPage<'a> {
    page: &'a Page,
    base_url: &'a str,
}

impl<'a> LogoutPage<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        LogoutPage {
            page: &ctx.page,
            base_url: &ctx.config.base_url,
        }
    }

    /// Opens the sidebar and logs out, returning once the login control is
    /// visible again.
    pub async fn logout(&self) -> Result<()> {
        self.page
            .click_when_ready(&menu::OPEN_BUTTON, Wait::new())
            .await?;
        // the sidebar animates in; the link exists before it accepts clicks
        self.page
            .click_when_ready(&menu::LOGOUT_LINK, Wait::new())
            .await?;
        self.page
            .wait_visible(&login::LOGIN_BUTTON, Wait::new())
            .await?;
        Ok(())
    }

    /// Whether the session currently sits on the site's login screen:
    /// login control visible and the location still on the shop. Absence
    /// of the control within the short wait answers `false`; it is not a
    /// fault.
    pub async fn is_on_login_page(&self) -> Result<bool> {
        match self
            .page
            .wait_visible(&login::LOGIN_BUTTON, Wait::with_timeout(CONTROL_TIMEOUT))
            .await
        {
            Ok(_) => {}
            Err(err) => {
                if err.is::<NotReady>() {
                    return Ok(false);
                }
                return Err(err);
            }
        }
        let url = self.page.current_url().await?;
        Ok(url.starts_with(self.base_url.trim_end_matches('/')))
    }
}
