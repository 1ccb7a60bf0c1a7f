use crate::core::intake::{IntakeField, TripDraft};
use crate::errors::AppResult;
use crate::models::{Gender, TravelStyle, TripType};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for packmybag
/// CLI application that builds a packing list from your trip details
#[derive(Parser)]
#[command(
    name = "packmybag",
    version = env!("CARGO_PKG_VERSION"),
    about = "Smart travel packing made simple: generate a categorized, checkable packing list",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Trip attributes shared by `generate` and `plan`.
#[derive(Args, Debug, Clone, Default)]
pub struct TripArgs {
    /// Where you are going (e.g. Paris, Goa, Tokyo)
    #[arg(long, short = 'd')]
    pub destination: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long = "start", value_name = "YYYY-MM-DD")]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long = "end", value_name = "YYYY-MM-DD")]
    pub end: Option<String>,

    /// Trip type
    #[arg(long = "type", value_enum)]
    pub trip_type: Option<TripType>,

    /// Travel style
    #[arg(long = "style", value_enum)]
    pub style: Option<TravelStyle>,

    /// Gender (optional, informational)
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Special needs (optional free text, e.g. "baby items")
    #[arg(long = "needs")]
    pub needs: Option<String>,
}

impl TripArgs {
    /// Pre-fill an intake draft. Dates are parsed here so a malformed date
    /// is reported as such rather than as a missing field.
    pub fn to_draft(&self) -> AppResult<TripDraft> {
        let mut draft = TripDraft {
            trip_type: self.trip_type,
            travel_style: self.style,
            gender: self.gender,
            ..TripDraft::default()
        };

        let text_fields = [
            (IntakeField::Destination, &self.destination),
            (IntakeField::StartDate, &self.start),
            (IntakeField::EndDate, &self.end),
            (IntakeField::SpecialNeeds, &self.needs),
        ];
        for (field, value) in text_fields {
            if let Some(v) = value {
                draft.set_field(field, v)?;
            }
        }

        Ok(draft)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Generate a packing list and print it
    Generate {
        #[command(flatten)]
        trip: TripArgs,

        #[arg(long, help = "Print the list as JSON")]
        json: bool,
    },

    /// Interactive session: fill in the trip, then tick items off
    ///
    /// Reads commands from standard input, one per line. Type `help` for the
    /// list of commands. Trip flags given here pre-fill the form; when all
    /// required fields are present the list is generated right away.
    Plan {
        #[command(flatten)]
        trip: TripArgs,
    },
}
