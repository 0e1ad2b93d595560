use crate::pages::{LoginPage, ProductsPage};
use crate::playwright_ext::PageReadyExt;
use crate::wait::Wait;
use crate::{case_per, Context, Testable};
use anyhow::Result;
use common::locators::{cart, checkout};
use common::users::{ShippingInfo, UserKind};
use std::fmt::{Display, Formatter};

/// How many items a checkout run puts in the cart first.
#[derive(Debug, Copy, Clone)]
enum ItemBatch {
    Count(usize),
    All,
}

impl ItemBatch {
    const EVERY: [ItemBatch; 5] = [
        ItemBatch::Count(1),
        ItemBatch::Count(2),
        ItemBatch::Count(3),
        ItemBatch::Count(4),
        ItemBatch::All,
    ];

    fn postal_code(self) -> &'static str {
        match self {
            ItemBatch::Count(1) => "12345",
            ItemBatch::Count(2) => "90210",
            ItemBatch::Count(3) => "33333",
            ItemBatch::Count(4) => "44444",
            _ => "99999",
        }
    }
}

impl Display for ItemBatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemBatch::Count(count) => write!(f, "{}", count),
            ItemBatch::All => write!(f, "all"),
        }
    }
}

pub fn cases() -> Vec<Box<dyn Testable>> {
    let mut cases = case_per(
        "checkout_completes_with",
        ItemBatch::EVERY.iter().copied(),
        checkout_completes_with,
    );
    cases.extend(case_per(
        "single_item_checkout_for",
        UserKind::login_capable(),
        single_item_checkout_for,
    ));
    cases.extend(case_per(
        "two_item_checkout_for",
        UserKind::login_capable(),
        two_item_checkout_for,
    ));
    cases
}

async fn checkout_completes_with(ctx: Context, batch: ItemBatch) -> Result<()> {
    let login = LoginPage::new(&ctx);
    login.open().await?;
    login.login_expecting_products(UserKind::Standard).await?;

    let products = ProductsPage::new(&ctx);
    let expected = match batch {
        ItemBatch::Count(count) => {
            products.add_items(count).await?;
            count
        }
        ItemBatch::All => products.add_all_items().await?,
    };
    assert!(expected >= 1);
    assert_eq!(products.cart_badge_count().await? as usize, expected);

    let shipping = ShippingInfo::new("hager", "hager", batch.postal_code());
    checkout_from_listing(&ctx, &shipping).await
}

async fn single_item_checkout_for(ctx: Context, user: UserKind) -> Result<()> {
    let login = LoginPage::new(&ctx);
    login.open().await?;
    login.login_expecting_products(user).await?;
    assert!(ctx.page.current_url().await?.contains("inventory.html"));

    let products = ProductsPage::new(&ctx);
    products.add_first_item().await?;

    let shipping = ShippingInfo::new("hager", "hager", "10001");
    checkout_from_listing(&ctx, &shipping).await
}

async fn two_item_checkout_for(ctx: Context, user: UserKind) -> Result<()> {
    let login = LoginPage::new(&ctx);
    login.open().await?;
    login.login_expecting_products(user).await?;

    let products = ProductsPage::new(&ctx);
    products.add_items(2).await?;
    assert!(products.cart_badge_count().await? >= 2);

    let shipping = ShippingInfo::new("hager", "hager", "10001");
    checkout_from_listing(&ctx, &shipping).await
}

/// Drives cart → information → overview → completion, asserting each
/// screen's header. The caller has already filled the cart. Every
/// transition is gated on the next screen's URL before its elements are
/// queried.
async fn checkout_from_listing(ctx: &Context, shipping: &ShippingInfo) -> Result<()> {
    let page = &ctx.page;
    let products = ProductsPage::new(ctx);

    products.open_cart().await?;
    page.wait_url_contains("cart.html", Wait::new()).await?;
    assert_eq!(products.title_text().await?, "Your Cart");

    page.click_when_ready(&cart::CHECKOUT_BUTTON, Wait::new())
        .await?;
    page.wait_url_contains("checkout-step-one.html", Wait::new())
        .await?;
    assert_eq!(products.title_text().await?, "Checkout: Your Information");

    page.fill_when_ready(&checkout::FIRST_NAME, &shipping.first_name, Wait::new())
        .await?;
    page.fill_when_ready(&checkout::LAST_NAME, &shipping.last_name, Wait::new())
        .await?;
    page.fill_when_ready(&checkout::POSTAL_CODE, &shipping.postal_code, Wait::new())
        .await?;
    page.click_when_ready(&checkout::CONTINUE_BUTTON, Wait::new())
        .await?;

    page.wait_url_contains("checkout-step-two.html", Wait::new())
        .await?;
    assert_eq!(products.title_text().await?, "Checkout: Overview");

    page.click_when_ready(&checkout::FINISH_BUTTON, Wait::new())
        .await?;
    page.wait_url_contains("checkout-complete.html", Wait::new())
        .await?;
    assert_eq!(products.title_text().await?, "Checkout: Complete!");

    let banner = page
        .text_when_visible(&checkout::COMPLETE_HEADER, Wait::new())
        .await?;
    assert!(
        banner.to_lowercase().contains("thank you"),
        "completion banner should thank the shopper, got {:?}",
        banner
    );
    Ok(())
}
