mod active_ride;
mod book_ride;
mod ride_history;

pub use active_ride::ActiveRide;
pub use book_ride::BookRide;
pub use ride_history::RideHistory;
