mod common;
use common::date;
use packmybag::core::intake::{IntakeField, TripDraft};
use packmybag::core::{Phase, Planner, Progress};
use packmybag::errors::{AppError, Rejection};
use packmybag::models::{Gender, TravelStyle, TripType};

fn goa_draft() -> TripDraft {
    TripDraft {
        destination: Some("Goa".into()),
        start_date: Some(date("2024-03-01")),
        end_date: Some(date("2024-03-05")),
        trip_type: Some(TripType::Beach),
        travel_style: Some(TravelStyle::Standard),
        ..TripDraft::default()
    }
}

#[test]
fn test_missing_fields_are_reported_in_form_order() {
    let draft = TripDraft::default();
    assert_eq!(draft.missing_fields(), IntakeField::REQUIRED.to_vec());
    assert_eq!(
        draft.validate(),
        Err(Rejection::MissingField("destination"))
    );

    let mut draft = goa_draft();
    draft.travel_style = None;
    assert_eq!(
        draft.validate(),
        Err(Rejection::MissingField("travel style"))
    );

    draft.destination = Some("   ".into());
    assert_eq!(
        draft.missing_fields(),
        vec![IntakeField::Destination, IntakeField::TravelStyle]
    );
}

#[test]
fn test_validate_trims_and_drops_blank_optionals() {
    let mut draft = goa_draft();
    draft.destination = Some("  Goa ".into());
    draft.special_needs = Some("  ".into());
    draft.gender = Some(Gender::Other);

    let trip = draft.validate().expect("complete draft");
    assert_eq!(trip.destination, "Goa");
    assert_eq!(trip.special_needs, None);
    assert_eq!(trip.gender, Some(Gender::Other));
    assert_eq!(trip.duration_days(), 4);
    assert_eq!(trip.duration_label(), "4 days");
    assert_eq!(trip.date_range_label(), "Mar 1 - Mar 5");
}

#[test]
fn test_end_before_start_is_rejected() {
    let mut draft = goa_draft();
    draft.end_date = Some(date("2024-02-28"));

    assert_eq!(
        draft.validate(),
        Err(Rejection::EndBeforeStart {
            start: date("2024-03-01"),
            end: date("2024-02-28"),
        })
    );
}

#[test]
fn test_set_field_parses_text() {
    let mut draft = TripDraft::default();
    draft.set_field(IntakeField::Destination, "Tokyo").unwrap();
    draft.set_field(IntakeField::StartDate, "2024-04-01").unwrap();
    draft.set_field(IntakeField::EndDate, "2024-04-02").unwrap();
    draft.set_field(IntakeField::TripType, "Business").unwrap();
    draft.set_field(IntakeField::TravelStyle, "LUXURY").unwrap();
    draft.set_field(IntakeField::Gender, "female").unwrap();

    assert!(draft.is_complete());
    let trip = draft.validate().unwrap();
    assert_eq!(trip.trip_type, TripType::Business);
    assert_eq!(trip.travel_style, TravelStyle::Luxury);
    assert_eq!(trip.duration_label(), "1 day");

    assert!(matches!(
        draft.set_field(IntakeField::StartDate, "01/04/2024"),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        draft.set_field(IntakeField::TripType, "cruise"),
        Err(AppError::InvalidTripType(_))
    ));

    draft.set_field(IntakeField::Destination, "").unwrap();
    assert_eq!(draft.missing_fields(), vec![IntakeField::Destination]);
}

#[test]
fn test_submit_moves_to_reviewing() {
    let mut planner = Planner::with_draft(goa_draft());
    assert_eq!(planner.phase(), Phase::Intake);
    assert!(planner.categories().is_empty());
    assert_eq!(planner.progress(), Progress::default());

    let trip = planner.submit().expect("valid trip");
    assert_eq!(trip.destination, "Goa");

    assert!(planner.is_reviewing());
    assert_eq!(planner.progress(), Progress { checked: 0, total: 16 });
    assert_eq!(planner.categories().len(), 6);
}

#[test]
fn test_rejected_submit_stays_in_intake() {
    let mut draft = goa_draft();
    draft.start_date = None;
    let mut planner = Planner::with_draft(draft.clone());

    assert_eq!(
        planner.submit().err(),
        Some(Rejection::MissingField("start date"))
    );
    assert_eq!(planner.phase(), Phase::Intake);
    assert_eq!(planner.draft(), Some(&draft));
}

#[test]
fn test_no_edit_in_place_while_reviewing() {
    let mut planner = Planner::with_draft(goa_draft());
    planner.submit().unwrap();

    assert_eq!(planner.submit().err(), Some(Rejection::NotInIntake));
    assert_eq!(planner.draft_mut().err(), Some(Rejection::NotInIntake));
    assert!(planner.draft().is_none());
}

#[test]
fn test_checklist_actions_need_a_list() {
    let mut planner = Planner::new();
    assert_eq!(planner.toggle("1"), Err(Rejection::NotReviewing));
    assert_eq!(
        planner.add_custom_item("Kite", "Other").err(),
        Some(Rejection::NotReviewing)
    );
    assert!(planner.group_by_category(&packmybag::models::Category::Clothing).is_empty());
}

#[test]
fn test_toggle_and_add_through_planner() {
    let mut planner = Planner::with_draft(goa_draft());
    planner.submit().unwrap();

    assert_eq!(planner.toggle("1"), Ok(true));
    let id = planner
        .add_custom_item("Kite", "Other")
        .expect("valid item")
        .id
        .clone();
    assert_eq!(planner.toggle(&id), Ok(true));

    assert_eq!(planner.progress(), Progress { checked: 2, total: 17 });
}

#[test]
fn test_back_discards_everything() {
    let mut planner = Planner::with_draft(goa_draft());
    planner.submit().unwrap();
    planner.toggle("1").unwrap();
    planner.add_custom_item("Kite", "Other").unwrap();

    assert!(planner.back());

    assert_eq!(planner.phase(), Phase::Intake);
    assert!(planner.trip().is_none());
    assert!(planner.checklist().is_none());
    assert!(planner.categories().is_empty());
    assert_eq!(planner.progress(), Progress { checked: 0, total: 0 });
    assert_eq!(planner.draft(), Some(&TripDraft::default()));

    assert!(!planner.back());
}

#[test]
fn test_reset_from_intake_clears_draft() {
    let mut planner = Planner::with_draft(goa_draft());
    assert!(!planner.reset());
    assert_eq!(planner.draft(), Some(&TripDraft::default()));
}

#[test]
fn test_export_and_share_are_unavailable() {
    let mut planner = Planner::with_draft(goa_draft());
    planner.submit().unwrap();

    assert_eq!(planner.export(), Err(Rejection::Unavailable("export")));
    assert_eq!(planner.share(), Err(Rejection::Unavailable("share")));
    assert_eq!(planner.progress().total, 16);
}
