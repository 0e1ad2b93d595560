use crate::pages::{LoginPage, LogoutPage};
use crate::playwright_ext::PageReadyExt;
use crate::wait::Wait;
use crate::{case_per, Context, Testable};
use anyhow::Result;
use common::users::UserKind;

pub fn cases() -> Vec<Box<dyn Testable>> {
    case_per(
        "logout_returns_to_login_for",
        UserKind::login_capable(),
        logout_returns_to_login_for,
    )
}

async fn logout_returns_to_login_for(ctx: Context, user: UserKind) -> Result<()> {
    let login = LoginPage::new(&ctx);
    login.open().await?;
    login.login_expecting_products(user).await?;
    ctx.page
        .wait_url_contains("inventory.html", Wait::new())
        .await?;

    let logout = LogoutPage::new(&ctx);
    logout.logout().await?;
    assert!(
        logout.is_on_login_page().await?,
        "should be back on the login screen after logging out"
    );
    Ok(())
}
