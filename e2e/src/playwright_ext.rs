use crate::wait::Wait;
use anyhow::Result;
use async_trait::async_trait;
use common::locators::Locator;
use playwright::api::{ElementHandle, Page};
use tracing::trace;

/// Readiness-gated interactions on a live page.
///
/// Every operation waits for its target to reach the required state before
/// touching it. Probes treat an absent element as "not yet"; any other
/// automation fault aborts the wait immediately.
#[async_trait]
pub trait PageReadyExt {
    /// Element located and rendered visible.
    async fn wait_visible(&self, target: &Locator, wait: Wait) -> Result<ElementHandle>;

    /// Element visible and enabled, ready to receive a click.
    async fn wait_clickable(&self, target: &Locator, wait: Wait) -> Result<ElementHandle>;

    /// Current location contains `fragment`. Navigation is asynchronous
    /// relative to the click that triggered it, so page transitions gate on
    /// this before querying the next screen's elements.
    async fn wait_url_contains(&self, fragment: &str, wait: Wait) -> Result<()>;

    /// Wait until clickable, then click the first match.
    async fn click_when_ready(&self, target: &Locator, wait: Wait) -> Result<()>;

    /// Wait until visible, then replace the field's value.
    async fn fill_when_ready(&self, target: &Locator, value: &str, wait: Wait) -> Result<()>;

    /// Wait until visible, then read the element's text.
    async fn text_when_visible(&self, target: &Locator, wait: Wait) -> Result<String>;

    /// The location the page currently shows.
    async fn current_url(&self) -> Result<String>;
}

#[async_trait]
impl PageReadyExt for Page {
    async fn wait_visible(&self, target: &Locator, wait: Wait) -> Result<ElementHandle> {
        let css = target.selector();
        wait.until(&format!("{} to be visible", target), move || {
            let css = css.clone();
            async move {
                match self.query_selector(&css).await? {
                    Some(element) => {
                        if element.is_visible().await? {
                            Ok(Some(element))
                        } else {
                            Ok(None)
                        }
                    }
                    None => Ok(None),
                }
            }
        })
        .await
    }

    async fn wait_clickable(&self, target: &Locator, wait: Wait) -> Result<ElementHandle> {
        let css = target.selector();
        wait.until(&format!("{} to be clickable", target), move || {
            let css = css.clone();
            async move {
                match self.query_selector(&css).await? {
                    Some(element) => {
                        if element.is_visible().await? && element.is_enabled().await? {
                            Ok(Some(element))
                        } else {
                            Ok(None)
                        }
                    }
                    None => Ok(None),
                }
            }
        })
        .await
    }

    async fn wait_url_contains(&self, fragment: &str, wait: Wait) -> Result<()> {
        wait.until(&format!("location to contain '{}'", fragment), move || {
            async move {
                let url: String = self.eval("() => location.href").await?;
                if url.contains(fragment) {
                    Ok(Some(()))
                } else {
                    Ok(None)
                }
            }
        })
        .await
    }

    async fn click_when_ready(&self, target: &Locator, wait: Wait) -> Result<()> {
        self.wait_clickable(target, wait).await?;
        trace!(locator = %target, "click");
        let css = target.selector();
        self.click_builder(&css).click().await?;
        Ok(())
    }

    async fn fill_when_ready(&self, target: &Locator, value: &str, wait: Wait) -> Result<()> {
        self.wait_visible(target, wait).await?;
        trace!(locator = %target, "fill");
        let css = target.selector();
        self.fill_builder(&css, value).fill().await?;
        Ok(())
    }

    async fn text_when_visible(&self, target: &Locator, wait: Wait) -> Result<String> {
        self.wait_visible(target, wait).await?;
        let css = target.selector();
        let text = self.inner_text(&css, None).await?;
        Ok(text)
    }

    async fn current_url(&self) -> Result<String> {
        let url: String = self.eval("() => location.href").await?;
        Ok(url)
    }
}
