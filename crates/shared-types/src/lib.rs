pub mod common;
pub mod error;
pub mod fare;
pub mod feature_flags;
pub mod geo;
pub mod guard;
pub mod navigation;
pub mod requests;
pub mod ride;
pub mod role;
pub mod session;

pub use common::*;
pub use error::*;
pub use fare::*;
pub use feature_flags::*;
pub use geo::*;
pub use guard::*;
pub use navigation::*;
pub use requests::*;
pub use ride::*;
pub use role::*;
pub use session::*;
