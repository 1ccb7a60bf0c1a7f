//! Trip intake: a partially filled form and its presence checks.

use crate::errors::{AppError, AppResult, Rejection};
use crate::models::{Gender, TravelStyle, TripData, TripType};
use crate::utils::date;
use chrono::NaiveDate;
use std::fmt;

/// A form field that can be set from the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Destination,
    StartDate,
    EndDate,
    TripType,
    TravelStyle,
    Gender,
    SpecialNeeds,
}

impl IntakeField {
    pub const REQUIRED: [IntakeField; 5] = [
        IntakeField::Destination,
        IntakeField::StartDate,
        IntakeField::EndDate,
        IntakeField::TripType,
        IntakeField::TravelStyle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntakeField::Destination => "destination",
            IntakeField::StartDate => "start date",
            IntakeField::EndDate => "end date",
            IntakeField::TripType => "trip type",
            IntakeField::TravelStyle => "travel style",
            IntakeField::Gender => "gender",
            IntakeField::SpecialNeeds => "special needs",
        }
    }

    /// Accepts the short keys used by `set` (start, end, type, style, needs)
    /// as well as the long names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "destination" | "dest" => Some(IntakeField::Destination),
            "start" | "start-date" | "start_date" => Some(IntakeField::StartDate),
            "end" | "end-date" | "end_date" => Some(IntakeField::EndDate),
            "type" | "trip-type" | "trip_type" => Some(IntakeField::TripType),
            "style" | "travel-style" | "travel_style" => Some(IntakeField::TravelStyle),
            "gender" => Some(IntakeField::Gender),
            "needs" | "special-needs" | "special_needs" => Some(IntakeField::SpecialNeeds),
            _ => None,
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripDraft {
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub trip_type: Option<TripType>,
    pub travel_style: Option<TravelStyle>,
    pub gender: Option<Gender>,
    pub special_needs: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl TripDraft {
    /// Set a field from raw text. An empty value clears the field.
    pub fn set_field(&mut self, field: IntakeField, value: &str) -> AppResult<()> {
        let value = value.trim();
        let blank = value.is_empty();

        match field {
            IntakeField::Destination => {
                self.destination = (!blank).then(|| value.to_string());
            }
            IntakeField::StartDate => {
                self.start_date = Self::parse_date_opt(value)?;
            }
            IntakeField::EndDate => {
                self.end_date = Self::parse_date_opt(value)?;
            }
            IntakeField::TripType => {
                self.trip_type = if blank {
                    None
                } else {
                    Some(
                        TripType::parse(value)
                            .ok_or_else(|| AppError::InvalidTripType(value.to_string()))?,
                    )
                };
            }
            IntakeField::TravelStyle => {
                self.travel_style = if blank {
                    None
                } else {
                    Some(
                        TravelStyle::parse(value)
                            .ok_or_else(|| AppError::InvalidTravelStyle(value.to_string()))?,
                    )
                };
            }
            IntakeField::Gender => {
                self.gender = if blank {
                    None
                } else {
                    Some(
                        Gender::parse(value)
                            .ok_or_else(|| AppError::InvalidGender(value.to_string()))?,
                    )
                };
            }
            IntakeField::SpecialNeeds => {
                self.special_needs = (!blank).then(|| value.to_string());
            }
        }

        Ok(())
    }

    fn parse_date_opt(value: &str) -> AppResult<Option<NaiveDate>> {
        if value.is_empty() {
            return Ok(None);
        }
        date::parse_date(value)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(value.to_string()))
    }

    fn is_present(&self, field: IntakeField) -> bool {
        match field {
            IntakeField::Destination => non_blank(self.destination.as_ref()).is_some(),
            IntakeField::StartDate => self.start_date.is_some(),
            IntakeField::EndDate => self.end_date.is_some(),
            IntakeField::TripType => self.trip_type.is_some(),
            IntakeField::TravelStyle => self.travel_style.is_some(),
            IntakeField::Gender => self.gender.is_some(),
            IntakeField::SpecialNeeds => non_blank(self.special_needs.as_ref()).is_some(),
        }
    }

    /// Required fields still absent, in form order.
    pub fn missing_fields(&self) -> Vec<IntakeField> {
        IntakeField::REQUIRED
            .into_iter()
            .filter(|f| !self.is_present(*f))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn the draft into a trip, or name the first problem.
    pub fn validate(&self) -> Result<TripData, Rejection> {
        let missing = |field: IntakeField| Rejection::MissingField(field.name());

        let destination =
            non_blank(self.destination.as_ref()).ok_or_else(|| missing(IntakeField::Destination))?;
        let start = self.start_date.ok_or_else(|| missing(IntakeField::StartDate))?;
        let end = self.end_date.ok_or_else(|| missing(IntakeField::EndDate))?;
        let trip_type = self.trip_type.ok_or_else(|| missing(IntakeField::TripType))?;
        let travel_style = self
            .travel_style
            .ok_or_else(|| missing(IntakeField::TravelStyle))?;

        if end < start {
            return Err(Rejection::EndBeforeStart { start, end });
        }

        Ok(TripData {
            destination: destination.to_string(),
            start_date: start,
            end_date: end,
            trip_type,
            travel_style,
            gender: self.gender,
            special_needs: non_blank(self.special_needs.as_ref()).map(str::to_string),
        })
    }
}
