// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod notice;
pub mod page_header;
pub mod pagination;
pub mod skeleton;
pub mod stat_tile;
pub mod status_stepper;

// Primitive wrappers
pub mod switch;
pub mod toast;

// Depends on button
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use notice::*;
pub use page_header::*;
pub use pagination::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_tile::*;
pub use status_stepper::*;
pub use switch::*;
pub use toast::*;
