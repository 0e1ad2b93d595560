use crate::pages::{LoginPage, LogoutPage, ProductsPage};
use crate::playwright_ext::PageReadyExt;
use crate::wait::Wait;
use crate::{case, Context, Testable};
use anyhow::Result;
use common::users::UserKind;

pub fn cases() -> Vec<Box<dyn Testable>> {
    vec![
        case(listing_title_is_shown),
        case(badge_increments_after_adding_an_item),
        case(add_flips_the_control_to_remove),
        case(adding_several_items_raises_the_badge_accordingly),
        case(removing_an_item_reverts_its_control),
        case(removing_the_last_item_hides_the_badge),
        case(sorting_by_name_descending_changes_the_first_item),
        case(cart_state_survives_a_reload),
        case(cart_icon_opens_the_cart_page),
        case(cart_contents_match_the_badge),
        case(a_product_is_never_listed_twice_in_the_cart),
        case(drain_operations_are_idempotent),
        case(logging_out_returns_to_the_login_screen),
    ]
}

/// Every case starts freshly authenticated on the listing.
async fn open_listing(ctx: &Context) -> Result<()> {
    let login = LoginPage::new(ctx);
    login.open().await?;
    login.login_expecting_products(UserKind::Standard).await
}

async fn listing_title_is_shown(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    assert_eq!(products.title_text().await?, "Products");
    assert!(ctx.page.current_url().await?.contains("inventory.html"));
    Ok(())
}

async fn badge_increments_after_adding_an_item(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    let before = products.cart_badge_count().await?;
    products.add_first_item().await?;
    assert_eq!(products.cart_badge_count().await?, before + 1);
    Ok(())
}

async fn add_flips_the_control_to_remove(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    let label = products.first_item_button_label().await?;
    assert!(
        label.eq_ignore_ascii_case("add to cart"),
        "first item should start unadded, its control reads {:?}",
        label
    );
    let before = products.cart_badge_count().await?;

    products.add_first_item().await?;

    let label = products.first_item_button_label().await?;
    assert!(
        label.eq_ignore_ascii_case("remove"),
        "control should flip to Remove, reads {:?}",
        label
    );
    assert_eq!(products.cart_badge_count().await?, before + 1);
    Ok(())
}

async fn adding_several_items_raises_the_badge_accordingly(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    let before = products.cart_badge_count().await?;
    products.add_items(3).await?;
    assert_eq!(products.cart_badge_count().await?, before + 3);
    Ok(())
}

async fn removing_an_item_reverts_its_control(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    products.add_first_item().await?;
    assert!(products
        .first_item_button_label()
        .await?
        .eq_ignore_ascii_case("remove"));
    let badge = products.cart_badge_count().await?;

    products.remove_first_item().await?;

    let label = products.first_item_button_label().await?;
    assert!(
        label.eq_ignore_ascii_case("add to cart"),
        "control should revert after removing, reads {:?}",
        label
    );
    assert_eq!(products.cart_badge_count().await?, badge - 1);
    Ok(())
}

async fn removing_the_last_item_hides_the_badge(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    products.remove_all_items().await?;
    assert!(!products.is_cart_badge_visible().await?);

    products.add_first_item().await?;
    assert!(products.is_cart_badge_visible().await?);

    products.remove_first_item().await?;
    assert!(!products.is_cart_badge_visible().await?);
    Ok(())
}

async fn sorting_by_name_descending_changes_the_first_item(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    let before = products.first_item_name().await?;
    products.sort_by_name_descending().await?;
    let after = products.first_item_name().await?;

    assert_ne!(after, before, "the listing head should change");
    Ok(())
}

async fn cart_state_survives_a_reload(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    products.remove_all_items().await?;
    assert_eq!(products.cart_badge_count().await?, 0);

    products.add_first_item().await?;
    assert_eq!(products.cart_badge_count().await?, 1);
    assert!(products
        .first_item_button_label()
        .await?
        .eq_ignore_ascii_case("remove"));

    ctx.page.reload_builder().reload().await?;
    products.wait_until_listed().await?;

    assert_eq!(products.cart_badge_count().await?, 1);
    assert!(products
        .first_item_button_label()
        .await?
        .eq_ignore_ascii_case("remove"));
    Ok(())
}

async fn cart_icon_opens_the_cart_page(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    products.open_cart().await?;
    ctx.page.wait_url_contains("cart.html", Wait::new()).await?;

    assert!(ctx.page.current_url().await?.contains("cart.html"));
    assert_eq!(products.title_text().await?, "Your Cart");
    Ok(())
}

async fn cart_contents_match_the_badge(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    products.remove_all_items().await?;
    assert_eq!(products.cart_badge_count().await?, 0);

    products.add_items(3).await?;
    let badge = products.cart_badge_count().await?;
    assert_eq!(badge, 3);

    products.open_cart().await?;
    assert_eq!(products.cart_item_count().await?, badge as usize);
    Ok(())
}

async fn a_product_is_never_listed_twice_in_the_cart(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    products.remove_all_items().await?;
    let first = products.first_item_name().await?;
    products.add_first_item().await?;

    products.open_cart().await?;
    let names = products.cart_item_names().await?;
    let occurrences = names
        .iter()
        .filter(|name| name.eq_ignore_ascii_case(&first))
        .count();
    assert_eq!(occurrences, 1, "cart lists {:?}", names);
    Ok(())
}

async fn drain_operations_are_idempotent(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;
    let products = ProductsPage::new(&ctx);

    // removing over an empty matched set terminates without touching it
    assert_eq!(products.remove_all_items().await?, 0);
    assert_eq!(products.cart_badge_count().await?, 0);
    assert!(!products.is_cart_badge_visible().await?);

    let added = products.add_all_items().await?;
    assert!(added > 0);
    assert_eq!(products.cart_badge_count().await? as usize, added);

    // a second pass finds nothing left to add
    assert_eq!(products.add_all_items().await?, 0);

    assert_eq!(products.remove_all_items().await?, added);
    assert!(!products.is_cart_badge_visible().await?);
    Ok(())
}

async fn logging_out_returns_to_the_login_screen(ctx: Context) -> Result<()> {
    open_listing(&ctx).await?;

    let logout = LogoutPage::new(&ctx);
    logout.logout().await?;
    assert!(logout.is_on_login_page().await?);
    Ok(())
}
