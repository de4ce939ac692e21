#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod rides;
pub use rides::*;

mod driver;
pub use driver::*;

mod admin;
pub use admin::*;
