use crate::playwright_ext::PageReadyExt;
use crate::wait::{Wait, CONTROL_TIMEOUT};
use crate::Context;
use anyhow::Result;
use common::locators::{cart, listing, Locator};
use playwright::api::Page;
use tracing::debug;

/// The product listing. Its `span.title` header is shared by the cart and
/// checkout screens, so those flows read their headers through this object
/// as well.
pub struct ProductsPage<'a> {
    page: &'a Page,
}

impl<'a> ProductsPage<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        ProductsPage { page: &ctx.page }
    }

    /// Header of whichever shop screen is currently showing.
    pub async fn title_text(&self) -> Result<String> {
        self.page
            .text_when_visible(&listing::TITLE, Wait::new())
            .await
    }

    /// Blocks until the listing header has rendered.
    pub async fn wait_until_listed(&self) -> Result<()> {
        self.page.wait_visible(&listing::TITLE, Wait::new()).await?;
        Ok(())
    }

    /// Puts the first still-unadded item in the cart.
    pub async fn add_first_item(&self) -> Result<()> {
        self.page
            .click_when_ready(&listing::ADD_BUTTONS, Wait::with_timeout(CONTROL_TIMEOUT))
            .await
    }

    /// Adds `count` items by repeatedly clicking the first available add
    /// control; each click flips that control to "Remove" in place, so the
    /// next iteration targets the next item.
    pub async fn add_items(&self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.add_first_item().await?;
        }
        Ok(())
    }

    /// Adds every item still offering an add control. Returns the number of
    /// clicks performed.
    pub async fn add_all_items(&self) -> Result<usize> {
        self.drain(&listing::ADD_BUTTONS).await
    }

    /// Takes the first currently-added item back out of the cart.
    pub async fn remove_first_item(&self) -> Result<()> {
        self.page
            .click_when_ready(&listing::REMOVE_BUTTONS, Wait::with_timeout(CONTROL_TIMEOUT))
            .await
    }

    /// Removes every item currently in the cart. Returns the number of
    /// clicks performed.
    pub async fn remove_all_items(&self) -> Result<usize> {
        self.drain(&listing::REMOVE_BUTTONS).await
    }

    /// Clicks the first match of `target` until nothing matches any more.
    ///
    /// The matched set changes under each click (an add control becomes a
    /// remove control in place, or back), so the live set is re-queried
    /// instead of snapshotted. Every click must shrink the set within a
    /// bounded wait — a DOM that stops responding fails the drain instead
    /// of spinning forever — which also guarantees termination, since the
    /// tracked count strictly decreases.
    async fn drain(&self, target: &Locator) -> Result<usize> {
        let page = self.page;
        let css = target.selector();
        let mut remaining = page.query_selector_all(&css).await?.len();
        let mut clicks = 0;
        while remaining > 0 {
            page.click_when_ready(target, Wait::with_timeout(CONTROL_TIMEOUT))
                .await?;
            clicks += 1;
            let expect_below = remaining;
            let probe_css = css.clone();
            remaining = Wait::with_timeout(CONTROL_TIMEOUT)
                .until(
                    &format!("{} matches to drop below {}", target, expect_below),
                    move || {
                        let css = probe_css.clone();
                        async move {
                            let now = page.query_selector_all(&css).await?.len();
                            if now < expect_below {
                                Ok(Some(now))
                            } else {
                                Ok(None)
                            }
                        }
                    },
                )
                .await?;
        }
        debug!(locator = %target, clicks, "drained");
        Ok(clicks)
    }

    /// Number shown on the cart badge; a missing badge is an empty cart,
    /// not a failure.
    pub async fn cart_badge_count(&self) -> Result<u32> {
        match self
            .page
            .query_selector(&listing::CART_BADGE.selector())
            .await?
        {
            Some(badge) => {
                let text = badge.inner_text().await?;
                Ok(text.trim().parse()?)
            }
            None => Ok(0),
        }
    }

    /// Whether the cart badge is currently showing. Absent means false.
    pub async fn is_cart_badge_visible(&self) -> Result<bool> {
        match self
            .page
            .query_selector(&listing::CART_BADGE.selector())
            .await?
        {
            Some(badge) => Ok(badge.is_visible().await?),
            None => Ok(false),
        }
    }

    /// Name of the first listed item, or an empty string on an empty
    /// listing.
    pub async fn first_item_name(&self) -> Result<String> {
        let names = self
            .page
            .query_selector_all(&listing::ITEM_NAMES.selector())
            .await?;
        match names.first() {
            Some(name) => Ok(name.inner_text().await?),
            None => Ok(String::new()),
        }
    }

    /// Current label of the first item's action control ("Add to cart" or
    /// "Remove").
    pub async fn first_item_button_label(&self) -> Result<String> {
        let label = self
            .page
            .inner_text(&listing::FIRST_ITEM_ACTION.selector(), None)
            .await?;
        Ok(label)
    }

    /// Switches the listing order to "Name (Z to A)".
    pub async fn sort_by_name_descending(&self) -> Result<()> {
        self.page
            .wait_visible(&listing::SORT_SELECT, Wait::new())
            .await?;
        self.page
            .evaluate::<_, ()>(
                r#"([selector, value]) => {
                    const sort = document.querySelector(selector);
                    sort.value = value;
                    sort.dispatchEvent(new Event('change', { bubbles: true }));
                }"#,
                (listing::SORT_SELECT.selector(), "za"),
            )
            .await?;
        Ok(())
    }

    /// Navigates to the cart screen.
    pub async fn open_cart(&self) -> Result<()> {
        self.page
            .click_when_ready(&listing::CART_LINK, Wait::new())
            .await
    }

    /// Number of items listed on the cart screen.
    pub async fn cart_item_count(&self) -> Result<usize> {
        self.page.wait_url_contains("cart.html", Wait::new()).await?;
        let items = self
            .page
            .query_selector_all(&cart::ITEMS.selector())
            .await?;
        Ok(items.len())
    }

    /// Names of the items listed on the cart screen.
    pub async fn cart_item_names(&self) -> Result<Vec<String>> {
        self.page.wait_url_contains("cart.html", Wait::new()).await?;
        let mut names = Vec::new();
        for item in self
            .page
            .query_selector_all(&cart::ITEM_NAMES.selector())
            .await?
        {
            names.push(item.inner_text().await?);
        }
        Ok(names)
    }
}
