#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use packmybag::models::{TravelStyle, TripData, TripType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pmb() -> Command {
    cargo_bin_cmd!("packmybag")
}

/// Config path inside the system temp dir that does not exist yet,
/// so commands run with default settings.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_packmybag.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn trip(start: &str, end: &str, trip_type: TripType, travel_style: TravelStyle) -> TripData {
    TripData {
        destination: "Goa".to_string(),
        start_date: date(start),
        end_date: date(end),
        trip_type,
        travel_style,
        gender: None,
        special_needs: None,
    }
}

/// The Goa beach trip used across tests: 4 days, standard style.
pub fn goa_beach() -> TripData {
    trip("2024-03-01", "2024-03-05", TripType::Beach, TravelStyle::Standard)
}

/// Trip flags for the Goa example, ready for `.args(...)`.
pub fn goa_args() -> Vec<&'static str> {
    vec![
        "--destination",
        "Goa",
        "--start",
        "2024-03-01",
        "--end",
        "2024-03-05",
        "--type",
        "beach",
        "--style",
        "standard",
    ]
}
