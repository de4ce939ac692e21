//! Presentational Dioxus components for the RideShare UI.
//!
//! Components carry their own stylesheet through `asset!` and expose
//! variants as plain enums. They know nothing about sessions or routes.

pub mod components;

pub use components::*;
