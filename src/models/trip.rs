use super::{gender::Gender, travel_style::TravelStyle, trip_type::TripType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated trip, produced by intake and consumed by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripData {
    pub destination: String,
    pub start_date: NaiveDate, // "YYYY-MM-DD"
    pub end_date: NaiveDate,   // "YYYY-MM-DD", >= start_date after intake
    pub trip_type: TripType,
    pub travel_style: TravelStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
}

impl TripData {
    /// Whole days between start and end. Zero for a same-day trip, and
    /// saturated to zero if the dates are reversed.
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// "1 day", "4 days", "0 days"
    pub fn duration_label(&self) -> String {
        let days = self.duration_days();
        if days == 1 {
            "1 day".to_string()
        } else {
            format!("{days} days")
        }
    }

    /// "Mar 1 - Mar 5"
    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%b %-d"),
            self.end_date.format("%b %-d")
        )
    }
}
