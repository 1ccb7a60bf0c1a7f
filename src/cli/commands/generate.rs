use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Checklist, Progress};
use crate::errors::AppResult;
use crate::models::{PackingItem, TripData};
use crate::ui::render;
use serde::Serialize;

/// JSON shape printed by `generate --json`.
#[derive(Serialize)]
pub struct GeneratedList<'a> {
    pub trip: &'a TripData,
    pub items: &'a [PackingItem],
    pub progress: Progress,
}

/// Generate and print a packing list in one shot.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { trip, json } = cmd {
        let trip = trip.to_draft()?.validate()?;
        let checklist = Checklist::for_trip(&trip);

        if *json {
            let out = GeneratedList {
                trip: &trip,
                items: checklist.items(),
                progress: checklist.progress(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("🧳 Your Packing List");
            println!("{}\n", render::trip_subtitle(&trip));
            print!("{}", render::checklist(&checklist, cfg));
        }
    }

    Ok(())
}
