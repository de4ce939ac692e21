pub mod cookies;
pub mod middleware;

pub use middleware::{session_middleware, SessionToken};
