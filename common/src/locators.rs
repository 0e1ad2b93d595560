//! The locator catalog: one named entry per logical element of the shop,
//! defined once and shared read-only by every page object and test.

use std::fmt::{Display, Formatter};

/// How an element is looked up in the DOM.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    Id,
    Name,
    Css,
}

/// A rule for finding one element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Locator {
    pub strategy: Strategy,
    pub expression: &'static str,
}

impl Locator {
    pub const fn id(expression: &'static str) -> Self {
        Locator {
            strategy: Strategy::Id,
            expression,
        }
    }

    pub const fn name(expression: &'static str) -> Self {
        Locator {
            strategy: Strategy::Name,
            expression,
        }
    }

    pub const fn css(expression: &'static str) -> Self {
        Locator {
            strategy: Strategy::Css,
            expression,
        }
    }

    /// The CSS selector handed to the automation library.
    pub fn selector(&self) -> String {
        match self.strategy {
            Strategy::Id => format!("#{}", self.expression),
            Strategy::Name => format!("[name='{}']", self.expression),
            Strategy::Css => self.expression.to_string(),
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let strategy = match self.strategy {
            Strategy::Id => "id",
            Strategy::Name => "name",
            Strategy::Css => "css",
        };
        write!(f, "{}={}", strategy, self.expression)
    }
}

/// Credential form on the entry screen.
pub mod login {
    use super::Locator;

    pub const USERNAME_FIELD: Locator = Locator::id("user-name");
    pub const PASSWORD_FIELD: Locator = Locator::name("password");
    pub const LOGIN_BUTTON: Locator = Locator::id("login-button");
    pub const ERROR_MESSAGE: Locator = Locator::css("h3[data-test='error']");
}

/// Product listing, including the cart controls embedded in it. The
/// `span.title` header is shared by the cart and checkout screens too.
pub mod listing {
    use super::Locator;

    pub const TITLE: Locator = Locator::css("span.title");
    pub const ITEM_NAMES: Locator = Locator::css(".inventory_item_name");
    /// Action control of the first listed item, whatever its current label.
    pub const FIRST_ITEM_ACTION: Locator =
        Locator::css(".inventory_item:first-of-type button.btn_inventory");
    /// Every control currently offering to add its item.
    pub const ADD_BUTTONS: Locator = Locator::css("button[id^='add-to-cart']");
    /// Every control currently offering to remove its item.
    pub const REMOVE_BUTTONS: Locator = Locator::css("button[id^='remove-']");
    pub const CART_BADGE: Locator = Locator::css(".shopping_cart_badge");
    pub const CART_LINK: Locator = Locator::css(".shopping_cart_link");
    pub const SORT_SELECT: Locator = Locator::css("select[class='product_sort_container']");
}

/// Sidebar menu.
pub mod menu {
    use super::Locator;

    pub const OPEN_BUTTON: Locator = Locator::id("react-burger-menu-btn");
    pub const LOGOUT_LINK: Locator = Locator::id("logout_sidebar_link");
}

pub mod cart {
    use super::Locator;

    pub const ITEMS: Locator = Locator::css(".cart_item");
    pub const ITEM_NAMES: Locator = Locator::css(".cart_item .inventory_item_name");
    pub const CHECKOUT_BUTTON: Locator = Locator::id("checkout");
}

pub mod checkout {
    use super::Locator;

    pub const FIRST_NAME: Locator = Locator::id("first-name");
    pub const LAST_NAME: Locator = Locator::id("last-name");
    pub const POSTAL_CODE: Locator = Locator::id("postal-code");
    pub const CONTINUE_BUTTON: Locator = Locator::id("continue");
    pub const FINISH_BUTTON: Locator = Locator::id("finish");
    pub const COMPLETE_HEADER: Locator = Locator::css(".complete-header");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_renders_as_a_fragment_selector() {
        assert_eq!(login::USERNAME_FIELD.selector(), "#user-name");
    }

    #[test]
    fn name_renders_as_an_attribute_selector() {
        assert_eq!(login::PASSWORD_FIELD.selector(), "[name='password']");
    }

    #[test]
    fn css_passes_through_unchanged() {
        assert_eq!(listing::CART_BADGE.selector(), ".shopping_cart_badge");
        assert_eq!(
            listing::ADD_BUTTONS.selector(),
            "button[id^='add-to-cart']"
        );
    }

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(menu::OPEN_BUTTON.to_string(), "id=react-burger-menu-btn");
        assert_eq!(listing::TITLE.to_string(), "css=span.title");
    }
}
