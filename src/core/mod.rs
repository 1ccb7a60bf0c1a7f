pub mod catalog;
pub mod generator;
pub mod intake;
pub mod session;
pub mod tracker;

pub use generator::generate;
pub use intake::{IntakeField, TripDraft};
pub use session::{Phase, Planner};
pub use tracker::{Checklist, Progress};
