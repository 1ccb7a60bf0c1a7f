//! Static item catalogs, keyed by trip type and travel style.
//!
//! Each catalog is a fixed list of templates. Ids are stable literals so a
//! generated list is identical across runs for the same trip.

use crate::models::{Category, PackingItem, TravelStyle, TripType};

/// A catalog entry. Materialized into a `PackingItem` by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub essential: bool,
}

impl ItemTemplate {
    pub fn to_item(&self) -> PackingItem {
        PackingItem::generated(self.id, self.name, self.category.clone(), None, self.essential)
    }
}

const fn item(
    id: &'static str,
    name: &'static str,
    category: Category,
    essential: bool,
) -> ItemTemplate {
    ItemTemplate {
        id,
        name,
        category,
        essential,
    }
}

static NONE: [ItemTemplate; 0] = [];

static BUSINESS: [ItemTemplate; 6] = [
    item("b1", "Formal Shirts", Category::Clothing, true),
    item("b2", "Business Suit/Blazer", Category::Clothing, true),
    item("b3", "Dress Shoes", Category::Clothing, true),
    item("b4", "Laptop", Category::Electronics, true),
    item("b5", "Laptop Charger", Category::Electronics, true),
    item("b6", "Business Cards", Category::Documents, false),
];

static BEACH: [ItemTemplate; 6] = [
    item("beach1", "Swimwear", Category::Clothing, true),
    item("beach2", "Flip Flops", Category::Clothing, true),
    item("beach3", "Sunscreen (SPF 30+)", Category::Toiletries, true),
    item("beach4", "Sunglasses", Category::Accessories, true),
    item("beach5", "Beach Towel", Category::Accessories, true),
    item("beach6", "Waterproof Phone Case", Category::Electronics, false),
];

static ADVENTURE: [ItemTemplate; 6] = [
    item("adv1", "Hiking Boots", Category::Clothing, true),
    item("adv2", "Quick-dry Clothes", Category::Clothing, true),
    item("adv3", "Rain Jacket", Category::Clothing, true),
    item("adv4", "First Aid Kit", Category::Medical, true),
    item("adv5", "Power Bank", Category::Electronics, true),
    item("adv6", "Headlamp/Flashlight", Category::Electronics, true),
];

static ESSENTIALS: [ItemTemplate; 6] = [
    item("e1", "Toothbrush & Toothpaste", Category::Toiletries, true),
    item("e2", "Shampoo & Body Wash", Category::Toiletries, true),
    item("e3", "Deodorant", Category::Toiletries, true),
    item("e4", "Phone Charger", Category::Electronics, true),
    item("e5", "Travel Documents", Category::Documents, true),
    item("e6", "Medications", Category::Medical, true),
];

static LUXURY: [ItemTemplate; 3] = [
    item("lux1", "Dress Watch", Category::Accessories, false),
    item("lux2", "Cologne/Perfume", Category::Toiletries, false),
    item("lux3", "Jewelry", Category::Accessories, false),
];

static BACKPACKER: [ItemTemplate; 3] = [
    item("bp1", "Travel Locks", Category::Accessories, true),
    item("bp2", "Laundry Soap", Category::Toiletries, true),
    item("bp3", "Multi-tool", Category::Accessories, false),
];

/// Items specific to a trip type. Leisure, wedding and family trips have
/// no dedicated catalog.
pub fn for_trip_type(trip_type: TripType) -> &'static [ItemTemplate] {
    match trip_type {
        TripType::Business => &BUSINESS,
        TripType::Beach => &BEACH,
        TripType::Adventure => &ADVENTURE,
        TripType::Leisure | TripType::Wedding | TripType::Family => &NONE,
    }
}

/// Items packed on every trip.
pub fn universal() -> &'static [ItemTemplate] {
    &ESSENTIALS
}

/// Extras for a travel style. Minimalist and standard add nothing.
pub fn for_travel_style(style: TravelStyle) -> &'static [ItemTemplate] {
    match style {
        TravelStyle::Luxury => &LUXURY,
        TravelStyle::Backpacker => &BACKPACKER,
        TravelStyle::Minimalist | TravelStyle::Standard => &NONE,
    }
}
