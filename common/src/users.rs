//! Fixture tables: the demo accounts and the shipping details the checkout
//! form asks for.

use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Password shared by every demo account.
pub const PASSWORD: &str = "secret_sauce";

/// Banner shown when the locked-out account submits the login form.
pub const LOCKED_OUT_MESSAGE: &str = "Epic sadface: Sorry, this user has been locked out.";

/// The six account flavours the shop exposes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Standard,
    LockedOut,
    Problem,
    PerformanceGlitch,
    Error,
    Visual,
}

impl UserKind {
    pub const ALL: [UserKind; 6] = [
        UserKind::Standard,
        UserKind::LockedOut,
        UserKind::Problem,
        UserKind::PerformanceGlitch,
        UserKind::Error,
        UserKind::Visual,
    ];

    pub fn username(self) -> &'static str {
        match self {
            UserKind::Standard => "standard_user",
            UserKind::LockedOut => "locked_out_user",
            UserKind::Problem => "problem_user",
            UserKind::PerformanceGlitch => "performance_glitch_user",
            UserKind::Error => "error_user",
            UserKind::Visual => "visual_user",
        }
    }

    /// Accounts that can get past the login form. The locked-out account
    /// never reaches the listing.
    pub fn login_capable() -> Vec<UserKind> {
        UserKind::ALL
            .iter()
            .copied()
            .filter(|user| *user != UserKind::LockedOut)
            .collect()
    }
}

impl Display for UserKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username())
    }
}

/// What the checkout information step asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

impl ShippingInfo {
    pub fn new(first_name: &str, last_name: &str, postal_code: &str) -> Self {
        ShippingInfo {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            postal_code: postal_code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_roles_with_distinct_usernames() {
        let usernames: HashSet<&str> = UserKind::ALL.iter().map(|user| user.username()).collect();
        assert_eq!(usernames.len(), UserKind::ALL.len());
    }

    #[test]
    fn only_the_locked_out_account_cannot_login() {
        let capable = UserKind::login_capable();
        assert_eq!(capable.len(), UserKind::ALL.len() - 1);
        assert!(!capable.contains(&UserKind::LockedOut));
    }

    #[test]
    fn display_matches_the_form_value() {
        assert_eq!(UserKind::PerformanceGlitch.to_string(), "performance_glitch_user");
    }
}
