//! Text rendering of a packing list for the terminal.
//! Functions return strings; callers decide where to print them.

use crate::config::Config;
use crate::core::Checklist;
use crate::core::intake::{IntakeField, TripDraft};
use crate::models::{Category, PackingItem, TripData};
use crate::utils::colors::{self, color_for_progress};
use crate::utils::date::{format_date, format_long};
use crate::utils::formatting::{bold, progress_bar, progress_summary, strikethrough};
use crate::utils::table::Table;

/// "Goa • Mar 1 - Mar 5 • 4 days"
pub fn trip_subtitle(trip: &TripData) -> String {
    format!(
        "{} • {} • {}",
        trip.destination,
        trip.date_range_label(),
        trip.duration_label()
    )
}

pub fn category_heading(category: &Category, checklist: &Checklist, cfg: &Config) -> String {
    let p = checklist.category_progress(category);
    let name = bold(category.label());
    if cfg.show_icons {
        format!("{} {} ({}/{})", category.icon(), name, p.checked, p.total)
    } else {
        format!("{} ({}/{})", name, p.checked, p.total)
    }
}

pub fn item_line(item: &PackingItem, cfg: &Config) -> String {
    let mark = if item.checked { "[x]" } else { "[ ]" };
    let name = if item.checked {
        colors::colorize_checked(&strikethrough(&item.name), true)
    } else {
        item.name.clone()
    };

    let mut line = format!("  {} {} {}", mark, colors::colorize_id(&item.id), name);
    if item.essential && cfg.show_essential_badge {
        line.push(' ');
        line.push_str(&colors::colorize_badge("[Essential]"));
    }
    line
}

pub fn progress_line(checklist: &Checklist, cfg: &Config) -> String {
    let p = checklist.progress();
    format!(
        "Progress {}{}{} {}",
        color_for_progress(p.percentage()),
        progress_bar(&p, cfg.progress_bar_width),
        colors::RESET,
        progress_summary(&p)
    )
}

/// Whole list: progress followed by one block per category.
pub fn checklist(checklist: &Checklist, cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str(&progress_line(checklist, cfg));
    out.push('\n');

    for category in checklist.categories() {
        out.push('\n');
        out.push_str(&category_heading(&category, checklist, cfg));
        out.push('\n');
        for item in checklist.group_by_category(&category) {
            out.push_str(&item_line(item, cfg));
            out.push('\n');
        }
    }

    out
}

/// The "Trip Details" panel.
pub fn trip_details(trip: &TripData) -> String {
    let mut table = Table::with_headers(&["Field", "Value"]);
    table.add_row(vec!["Destination".into(), trip.destination.clone()]);
    table.add_row(vec!["From".into(), format_long(&trip.start_date)]);
    table.add_row(vec!["To".into(), format_long(&trip.end_date)]);
    table.add_row(vec!["Type".into(), trip.trip_type.label().into()]);
    table.add_row(vec!["Style".into(), trip.travel_style.label().into()]);
    table.add_row(vec!["Duration".into(), trip.duration_label()]);
    if let Some(g) = trip.gender {
        table.add_row(vec!["Gender".into(), g.to_string()]);
    }
    if let Some(needs) = &trip.special_needs {
        table.add_row(vec!["Special needs".into(), needs.clone()]);
    }
    table.render()
}

/// Current state of the intake form.
pub fn draft(draft: &TripDraft) -> String {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    let mut table = Table::with_headers(&["Field", "Value"]);
    table.add_row(vec![
        IntakeField::Destination.name().into(),
        or_dash(draft.destination.clone()),
    ]);
    table.add_row(vec![
        IntakeField::StartDate.name().into(),
        or_dash(draft.start_date.as_ref().map(format_date)),
    ]);
    table.add_row(vec![
        IntakeField::EndDate.name().into(),
        or_dash(draft.end_date.as_ref().map(format_date)),
    ]);
    table.add_row(vec![
        IntakeField::TripType.name().into(),
        or_dash(draft.trip_type.map(|t| t.as_str().to_string())),
    ]);
    table.add_row(vec![
        IntakeField::TravelStyle.name().into(),
        or_dash(draft.travel_style.map(|s| s.as_str().to_string())),
    ]);
    table.add_row(vec![
        IntakeField::Gender.name().into(),
        or_dash(draft.gender.map(|g| g.as_str().to_string())),
    ]);
    table.add_row(vec![
        IntakeField::SpecialNeeds.name().into(),
        or_dash(draft.special_needs.clone()),
    ]);
    table.render()
}

/// "Clothing, Toiletries, ..., Other"
pub fn category_choices(checklist: &Checklist) -> String {
    checklist
        .add_category_choices()
        .iter()
        .map(Category::label)
        .collect::<Vec<_>>()
        .join(", ")
}
