//! Regression coverage for submission assembly.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;

use super::*;

fn departure() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid date")
}

fn basics() -> BasicsStep {
    BasicsStep {
        trip_name: "Vietnam loop".to_owned(),
        departure_date: Some(departure()),
        categories: vec!["adventure".to_owned(), "culture".to_owned()],
    }
}

fn cost_item(name: &str, amount: rust_decimal::Decimal) -> CostItem {
    CostItem {
        category: CostCategory::Accommodation,
        name: name.to_owned(),
        amount,
    }
}

fn stop(location: &str, nights: i32) -> TripStopDraft {
    TripStopDraft {
        location: location.to_owned(),
        nights,
        description: None,
        activities: None,
    }
}

#[rstest]
fn basics_alone_builds_with_step_defaults() {
    let submission = TripSubmissionBuilder::new()
        .basics(basics())
        .build()
        .expect("valid submission");

    assert_eq!(submission.attributes.trip_name, "Vietnam loop");
    assert_eq!(submission.attributes.departure_date, departure());
    assert_eq!(submission.attributes.currency, "USD");
    assert_eq!(submission.attributes.min_trip_mates, 0);
    assert_eq!(submission.attributes.max_trip_mates, 0);
    assert!(submission.attributes.overview.is_empty());
    assert!(submission.stops.is_empty());
    assert!(submission.cost_items.is_empty());
    assert_eq!(submission.total_cost(), rust_decimal::Decimal::ZERO);
}

#[rstest]
fn all_step_fields_survive_into_attributes() {
    let submission = TripSubmissionBuilder::new()
        .basics(basics())
        .details(DetailsStep {
            overview: "Three weeks north to south".to_owned(),
            about_you: "Long-time backpacker".to_owned(),
            accommodation_type: "hostel".to_owned(),
            accommodation_details: "Dorms, occasional private room".to_owned(),
            inclusions: vec!["accommodation".to_owned()],
            exclusions: vec!["flights".to_owned()],
            special_features: vec!["night market tour".to_owned()],
            min_trip_mates: 2,
            max_trip_mates: 6,
        })
        .costs(CostStep {
            currency: "EUR".to_owned(),
            cost_items: vec![cost_item("Hostels", dec!(800))],
            buffer_percentage: dec!(10),
            your_fee: dec!(50),
        })
        .build()
        .expect("valid submission");

    let attributes = &submission.attributes;
    assert_eq!(attributes.overview, "Three weeks north to south");
    assert_eq!(attributes.about_you, "Long-time backpacker");
    assert_eq!(attributes.accommodation_type, "hostel");
    assert_eq!(attributes.accommodation_details, "Dorms, occasional private room");
    assert_eq!(attributes.inclusions, vec!["accommodation".to_owned()]);
    assert_eq!(attributes.exclusions, vec!["flights".to_owned()]);
    assert_eq!(attributes.special_features, vec!["night market tour".to_owned()]);
    assert_eq!(attributes.min_trip_mates, 2);
    assert_eq!(attributes.max_trip_mates, 6);
    assert_eq!(attributes.currency, "EUR");
    assert_eq!(submission.total_cost(), dec!(930));
}

#[rstest]
fn categories_are_deduplicated_preserving_first_occurrence() {
    let submission = TripSubmissionBuilder::new()
        .basics(BasicsStep {
            categories: vec![
                "adventure".to_owned(),
                "culture".to_owned(),
                "adventure".to_owned(),
            ],
            ..basics()
        })
        .build()
        .expect("valid submission");

    assert_eq!(
        submission.attributes.categories,
        vec!["adventure".to_owned(), "culture".to_owned()]
    );
}

#[rstest]
fn stops_are_sequenced_from_list_position_at_build() {
    let submission = TripSubmissionBuilder::new()
        .basics(basics())
        .itinerary(vec![stop("Hanoi", 3), stop("Hue", 2), stop("Hoi An", 4)])
        .build()
        .expect("valid submission");

    let numbers: Vec<i32> = submission
        .stops
        .iter()
        .map(|s| s.sequence_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(submission.stops[1].location, "Hue");
}

#[rstest]
fn reapplying_a_step_overwrites_the_previous_value() {
    let submission = TripSubmissionBuilder::new()
        .basics(basics())
        .itinerary(vec![stop("Hanoi", 3)])
        .itinerary(vec![stop("Da Nang", 5)])
        .build()
        .expect("valid submission");

    assert_eq!(submission.stops.len(), 1);
    assert_eq!(submission.stops[0].location, "Da Nang");
}

#[rstest]
fn blank_trip_name_is_rejected() {
    let result = TripSubmissionBuilder::new()
        .basics(BasicsStep {
            trip_name: "   ".to_owned(),
            ..basics()
        })
        .build();

    assert_eq!(result, Err(TripValidationError::EmptyTripName));
}

#[rstest]
fn missing_departure_date_is_rejected() {
    let result = TripSubmissionBuilder::new()
        .basics(BasicsStep {
            departure_date: None,
            ..basics()
        })
        .build();

    assert_eq!(result, Err(TripValidationError::MissingDepartureDate));
}

#[rstest]
fn inverted_mate_range_is_rejected() {
    let result = TripSubmissionBuilder::new()
        .basics(basics())
        .details(DetailsStep {
            min_trip_mates: 5,
            max_trip_mates: 2,
            ..DetailsStep::default()
        })
        .build();

    assert_eq!(
        result,
        Err(TripValidationError::MateRangeInverted { min: 5, max: 2 })
    );
}

#[rstest]
fn negative_mate_count_is_rejected() {
    let result = TripSubmissionBuilder::new()
        .basics(basics())
        .details(DetailsStep {
            min_trip_mates: -1,
            ..DetailsStep::default()
        })
        .build();

    assert_eq!(result, Err(TripValidationError::NegativeMateCount));
}

#[rstest]
fn negative_cost_amount_is_rejected_with_its_index() {
    let result = TripSubmissionBuilder::new()
        .basics(basics())
        .costs(CostStep {
            cost_items: vec![cost_item("Hostels", dec!(100)), cost_item("Bus", dec!(-5))],
            ..CostStep::default()
        })
        .build();

    assert_eq!(result, Err(TripValidationError::NegativeAmount { index: 1 }));
}

#[rstest]
fn unnamed_cost_item_is_rejected() {
    let result = TripSubmissionBuilder::new()
        .basics(basics())
        .costs(CostStep {
            cost_items: vec![cost_item("  ", dec!(100))],
            ..CostStep::default()
        })
        .build();

    assert_eq!(
        result,
        Err(TripValidationError::EmptyCostItemName { index: 0 })
    );
}

#[rstest]
fn negative_buffer_and_fee_are_rejected() {
    let buffer = TripSubmissionBuilder::new()
        .basics(basics())
        .costs(CostStep {
            buffer_percentage: dec!(-1),
            ..CostStep::default()
        })
        .build();
    assert_eq!(buffer, Err(TripValidationError::NegativeBuffer));

    let fee = TripSubmissionBuilder::new()
        .basics(basics())
        .costs(CostStep {
            your_fee: dec!(-0.01),
            ..CostStep::default()
        })
        .build();
    assert_eq!(fee, Err(TripValidationError::NegativeFee));
}

#[rstest]
fn malformed_stops_are_rejected_with_their_index() {
    let location = TripSubmissionBuilder::new()
        .basics(basics())
        .itinerary(vec![stop("Hanoi", 1), stop("", 1)])
        .build();
    assert_eq!(
        location,
        Err(TripValidationError::EmptyStopLocation { index: 1 })
    );

    let nights = TripSubmissionBuilder::new()
        .basics(basics())
        .itinerary(vec![stop("Hanoi", -2)])
        .build();
    assert_eq!(nights, Err(TripValidationError::NegativeNights { index: 0 }));
}

#[rstest]
fn zero_mates_and_zero_amounts_are_valid() {
    let submission = TripSubmissionBuilder::new()
        .basics(basics())
        .costs(CostStep {
            cost_items: vec![cost_item("Free walking tour", dec!(0))],
            ..CostStep::default()
        })
        .build()
        .expect("valid submission");

    assert_eq!(submission.total_cost(), dec!(0));
}
