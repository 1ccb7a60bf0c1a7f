use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Minimalist,
    Luxury,
    Backpacker,
    Standard,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 4] = [
        TravelStyle::Minimalist,
        TravelStyle::Luxury,
        TravelStyle::Backpacker,
        TravelStyle::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Minimalist => "minimalist",
            TravelStyle::Luxury => "luxury",
            TravelStyle::Backpacker => "backpacker",
            TravelStyle::Standard => "standard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelStyle::Minimalist => "Minimalist",
            TravelStyle::Luxury => "Luxury",
            TravelStyle::Backpacker => "Backpacker",
            TravelStyle::Standard => "Standard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == wanted)
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
