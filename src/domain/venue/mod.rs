pub mod entity;
pub mod filter;

pub use entity::Venue;
pub use filter::{BudgetFilter, CapacityFilter, VenueFilter};
