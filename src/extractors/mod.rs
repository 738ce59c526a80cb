//! Request extractors.

mod restaurant_id;
pub use restaurant_id::RestaurantId;
