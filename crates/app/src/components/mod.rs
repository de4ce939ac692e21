pub mod ride_summary;
pub mod status_filter;

pub use ride_summary::{Counterpart, RideStatusBadge, RideSummary};
pub use status_filter::StatusFilter;
