pub mod category;
pub mod gender;
pub mod packing_item;
pub mod travel_style;
pub mod trip;
pub mod trip_type;

pub use category::Category;
pub use gender::Gender;
pub use packing_item::{ItemOrigin, PackingItem};
pub use travel_style::TravelStyle;
pub use trip::TripData;
pub use trip_type::TripType;
