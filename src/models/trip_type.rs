use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Leisure,
    Business,
    Adventure,
    Beach,
    Wedding,
    Family,
}

impl TripType {
    pub const ALL: [TripType; 6] = [
        TripType::Leisure,
        TripType::Business,
        TripType::Adventure,
        TripType::Beach,
        TripType::Wedding,
        TripType::Family,
    ];

    /// Wire name, as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Leisure => "leisure",
            TripType::Business => "business",
            TripType::Adventure => "adventure",
            TripType::Beach => "beach",
            TripType::Wedding => "wedding",
            TripType::Family => "family",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Leisure => "Leisure",
            TripType::Business => "Business",
            TripType::Adventure => "Adventure",
            TripType::Beach => "Beach",
            TripType::Wedding => "Wedding",
            TripType::Family => "Family",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == wanted)
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
