use crate::pages::LoginPage;
use crate::playwright_ext::PageReadyExt;
use crate::{case, case_per, Context, Testable};
use anyhow::Result;
use common::users::{UserKind, LOCKED_OUT_MESSAGE};

pub fn cases() -> Vec<Box<dyn Testable>> {
    let mut cases = case_per(
        "login_lands_on_the_listing",
        UserKind::login_capable(),
        login_lands_on_the_listing,
    );
    cases.push(case(locked_out_user_is_refused));
    cases
}

async fn login_lands_on_the_listing(ctx: Context, user: UserKind) -> Result<()> {
    let login = LoginPage::new(&ctx);
    login.open().await?;
    login.login_expecting_products(user).await?;

    let url = ctx.page.current_url().await?;
    assert!(
        url.contains("inventory.html"),
        "expected the listing, got {}",
        url
    );
    Ok(())
}

async fn locked_out_user_is_refused(ctx: Context) -> Result<()> {
    let login = LoginPage::new(&ctx);
    login.open().await?;
    login.login(UserKind::LockedOut).await?;

    assert_eq!(login.error_message().await?, LOCKED_OUT_MESSAGE);

    let url = ctx.page.current_url().await?;
    assert!(
        !url.contains("inventory.html"),
        "a locked-out account must not reach the listing, got {}",
        url
    );
    Ok(())
}
