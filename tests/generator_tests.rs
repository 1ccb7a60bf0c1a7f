mod common;
use common::{goa_beach, trip};
use packmybag::core::catalog;
use packmybag::core::generate;
use packmybag::core::generator::baseline_quantities;
use packmybag::models::{Category, Gender, ItemOrigin, TravelStyle, TripType};
use std::collections::HashSet;

fn names(items: &[packmybag::models::PackingItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_goa_beach_example() {
    let items = generate(&goa_beach());

    assert_eq!(items.len(), 16);
    assert_eq!(
        &names(&items)[..4],
        &["4 T-Shirts/Tops", "2 Pants/Bottoms", "5 Underwear", "5 Socks"]
    );
    assert_eq!(items[0].quantity, Some(4));
    assert_eq!(items[1].quantity, Some(2));
    assert_eq!(items[2].quantity, Some(5));
    assert_eq!(items[3].quantity, Some(5));

    assert_eq!(
        &names(&items)[4..10],
        &[
            "Swimwear",
            "Flip Flops",
            "Sunscreen (SPF 30+)",
            "Sunglasses",
            "Beach Towel",
            "Waterproof Phone Case"
        ]
    );
    assert_eq!(
        &names(&items)[10..],
        &[
            "Toothbrush & Toothpaste",
            "Shampoo & Body Wash",
            "Deodorant",
            "Phone Charger",
            "Travel Documents",
            "Medications"
        ]
    );
}

#[test]
fn test_leisure_minimalist_has_no_extras() {
    let items = generate(&trip(
        "2024-03-01",
        "2024-03-05",
        TripType::Leisure,
        TravelStyle::Minimalist,
    ));

    assert_eq!(items.len(), 10);
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["1", "2", "3", "4", "e1", "e2", "e3", "e4", "e5", "e6"]
    );
}

#[test]
fn test_wedding_and_family_have_no_catalog() {
    for t in [TripType::Wedding, TripType::Family, TripType::Leisure] {
        let items = generate(&trip("2024-03-01", "2024-03-05", t, TravelStyle::Standard));
        assert_eq!(items.len(), 10, "{t:?}");
        assert!(catalog::for_trip_type(t).is_empty());
    }
}

#[test]
fn test_business_luxury_order() {
    let items = generate(&trip(
        "2024-06-10",
        "2024-06-12",
        TripType::Business,
        TravelStyle::Luxury,
    ));

    assert_eq!(items.len(), 4 + 6 + 6 + 3);
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(&ids[4..10], &["b1", "b2", "b3", "b4", "b5", "b6"]);
    assert_eq!(&ids[16..], &["lux1", "lux2", "lux3"]);

    let cards = items.iter().find(|i| i.id == "b6").expect("business cards");
    assert_eq!(cards.category, Category::Documents);
    assert!(!cards.essential);

    assert!(items[16..].iter().all(|i| !i.essential));
}

#[test]
fn test_adventure_backpacker() {
    let items = generate(&trip(
        "2024-07-01",
        "2024-07-08",
        TripType::Adventure,
        TravelStyle::Backpacker,
    ));

    assert_eq!(items.len(), 19);
    assert_eq!(items[0].name, "7 T-Shirts/Tops");
    assert_eq!(items[1].name, "4 Pants/Bottoms");
    assert_eq!(items[2].name, "8 Underwear");

    let kit = items.iter().find(|i| i.id == "adv4").expect("first aid kit");
    assert_eq!(kit.name, "First Aid Kit");
    assert_eq!(kit.category, Category::Medical);

    let tail: Vec<&str> = items[16..].iter().map(|i| i.name.as_str()).collect();
    assert_eq!(tail, vec!["Travel Locks", "Laundry Soap", "Multi-tool"]);
    assert!(items[16].essential);
    assert!(!items[18].essential);
}

#[test]
fn test_baseline_quantities_formulas() {
    for days in 0..=30u32 {
        let q = baseline_quantities(days);
        assert_eq!(q.tops, days.max(3));
        assert_eq!(q.bottoms, (days + 1) / 2);
        assert_eq!(q.underwear, days + 1);
        assert_eq!(q.socks, days + 1);
    }
}

#[test]
fn test_same_day_trip() {
    let items = generate(&trip(
        "2024-03-01",
        "2024-03-01",
        TripType::Leisure,
        TravelStyle::Standard,
    ));

    assert_eq!(items[0].name, "3 T-Shirts/Tops");
    assert_eq!(items[1].name, "0 Pants/Bottoms");
    assert_eq!(items[2].name, "1 Underwear");
    assert_eq!(items[3].name, "1 Socks");
}

#[test]
fn test_reversed_dates_do_not_panic() {
    let items = generate(&trip(
        "2024-03-05",
        "2024-03-01",
        TripType::Leisure,
        TravelStyle::Standard,
    ));
    assert_eq!(items[0].quantity, Some(3));
    assert_eq!(items[1].quantity, Some(0));
}

#[test]
fn test_generated_items_unchecked_unique_and_tagged() {
    for t in TripType::ALL {
        for s in TravelStyle::ALL {
            let items = generate(&trip("2024-01-01", "2024-01-10", t, s));
            assert!(!items.is_empty());
            assert!(items.iter().all(|i| !i.checked));
            assert!(items.iter().all(|i| i.origin == ItemOrigin::Generated));
            assert!(items.iter().all(|i| i.category.is_builtin()));

            let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids.len(), items.len(), "{t:?}/{s:?}");
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate(&goa_beach()), generate(&goa_beach()));
}

#[test]
fn test_optional_fields_do_not_change_the_list() {
    let plain = goa_beach();
    let mut detailed = goa_beach();
    detailed.gender = Some(Gender::Female);
    detailed.special_needs = Some("baby items".to_string());

    assert_eq!(generate(&plain), generate(&detailed));
}
