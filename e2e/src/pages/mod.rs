//! Page objects: page-scoped intents instead of raw element handles. Each
//! borrows the session's page and never outlives it.

mod login;
mod logout;
mod products;

pub use self::login::LoginPage;
pub use self::logout::LogoutPage;
pub use self::products::ProductsPage;
