pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::{pad_right, progress_bar};
