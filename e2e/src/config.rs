//! Suite-wide settings, resolved once when the runner starts.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the shop lives. Override with `E2E_BASE_URL`.
    pub base_url: String,
    /// Headless unless a visible browser was requested via `E2E_HEADED`.
    pub headless: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            base_url: env::var("E2E_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            headless: headless_from(env::var("E2E_HEADED").ok().as_deref()),
        }
    }
}

/// `E2E_HEADED` set to anything but empty or `0` means a visible browser.
fn headless_from(headed: Option<&str>) -> bool {
    match headed {
        Some(value) => value.is_empty() || value == "0",
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_when_nothing_is_requested() {
        assert!(headless_from(None));
    }

    #[test]
    fn headed_when_requested() {
        assert!(!headless_from(Some("1")));
        assert!(!headless_from(Some("yes")));
    }

    #[test]
    fn empty_and_zero_stay_headless() {
        assert!(headless_from(Some("")));
        assert!(headless_from(Some("0")));
    }
}
