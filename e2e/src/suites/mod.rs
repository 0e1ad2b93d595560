//! The test cases, one module per flow.

pub mod checkout;
pub mod login;
pub mod logout;
pub mod products;

use crate::Testable;

/// Every case, in registration order.
pub fn all() -> Vec<Box<dyn Testable>> {
    let mut cases = Vec::new();
    cases.extend(login::cases());
    cases.extend(products::cases());
    cases.extend(checkout::cases());
    cases.extend(logout::cases());
    cases
}
