use crate::core::catalog;
use crate::models::{Category, PackingItem, TripData};
use tracing::debug;

/// Quantities of the four baseline clothing items for a trip length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineQuantities {
    pub tops: u32,
    pub bottoms: u32,
    pub underwear: u32,
    pub socks: u32,
}

pub fn baseline_quantities(days: u32) -> BaselineQuantities {
    BaselineQuantities {
        tops: days.max(3),
        bottoms: days.div_ceil(2),
        underwear: days.saturating_add(1),
        socks: days.saturating_add(1),
    }
}

fn baseline_clothing(days: u32) -> Vec<PackingItem> {
    let q = baseline_quantities(days);
    let clothing = |id: &str, qty: u32, label: &str| {
        PackingItem::generated(
            id,
            format!("{qty} {label}"),
            Category::Clothing,
            Some(qty),
            true,
        )
    };

    vec![
        clothing("1", q.tops, "T-Shirts/Tops"),
        clothing("2", q.bottoms, "Pants/Bottoms"),
        clothing("3", q.underwear, "Underwear"),
        clothing("4", q.socks, "Socks"),
    ]
}

/// Build the packing list for a trip.
///
/// Order: baseline clothing, trip type catalog, universal essentials,
/// travel style catalog. Gender and special needs do not affect the result.
pub fn generate(trip: &TripData) -> Vec<PackingItem> {
    let days = trip.duration_days();

    let mut items = baseline_clothing(days);
    items.extend(
        catalog::for_trip_type(trip.trip_type)
            .iter()
            .chain(catalog::universal())
            .chain(catalog::for_travel_style(trip.travel_style))
            .map(|t| t.to_item()),
    );

    debug!(
        destination = %trip.destination,
        trip_type = trip.trip_type.as_str(),
        travel_style = trip.travel_style.as_str(),
        days,
        items = items.len(),
        "generated packing list"
    );

    items
}
