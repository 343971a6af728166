//! Wizard submission aggregate and its builder.
//!
//! The wizard collects trip data over several independent steps. Rather than
//! reading ambient per-step state, each step contributes to one explicit
//! [`TripSubmissionBuilder`], and [`TripSubmissionBuilder::build`] produces
//! the validated [`TripSubmission`] aggregate that the persistence
//! orchestrator consumes. This keeps assembly unit-testable without any
//! rendering harness.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::costs::CostItem;
use super::stop::{TripStop, TripStopDraft, assign_stop_sequence};
use super::validation::TripValidationError;
use crate::domain::trips::compute_total_cost;

/// Scalar wizard fields describing a trip.
///
/// ## Invariants (enforced by [`TripSubmissionBuilder::build`])
/// - `trip_name` is non-empty once trimmed.
/// - `max_trip_mates >= min_trip_mates >= 0`.
/// - `buffer_percentage >= 0` and `your_fee >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripAttributes {
    /// Listing title.
    pub trip_name: String,
    /// Planned departure date.
    pub departure_date: NaiveDate,
    /// Ordered, de-duplicated trip categories (e.g. "adventure").
    pub categories: Vec<String>,
    /// Listing overview text; empty when the step left it blank.
    pub overview: String,
    /// Organiser self-description; empty when left blank.
    pub about_you: String,
    /// Accommodation style, e.g. "hostel".
    pub accommodation_type: String,
    /// Free-form accommodation notes.
    pub accommodation_details: String,
    /// What the price includes, in display order.
    pub inclusions: Vec<String>,
    /// What the price excludes, in display order.
    pub exclusions: Vec<String>,
    /// Highlighted selling points, in display order.
    pub special_features: Vec<String>,
    /// Minimum group size.
    pub min_trip_mates: i32,
    /// Maximum group size.
    pub max_trip_mates: i32,
    /// ISO-ish currency code for all amounts.
    pub currency: String,
    /// Contingency buffer applied to the cost subtotal, in percent.
    pub buffer_percentage: Decimal,
    /// Flat organiser fee added after the buffer.
    pub your_fee: Decimal,
}

/// A validated wizard submission, ready for persistence.
///
/// Assembled only through [`TripSubmissionBuilder`]; stops carry their final
/// 1-based sequence numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSubmission {
    /// Scalar trip fields.
    pub attributes: TripAttributes,
    /// Sequenced itinerary stops.
    pub stops: Vec<TripStop>,
    /// Cost line items in entry order.
    pub cost_items: Vec<CostItem>,
}

impl TripSubmission {
    /// Total cost for the listing: subtotal + buffer + organiser fee.
    pub fn total_cost(&self) -> Decimal {
        compute_total_cost(
            &self.cost_items,
            self.attributes.buffer_percentage,
            self.attributes.your_fee,
        )
    }
}

/// Contribution of the wizard's basics step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicsStep {
    /// Listing title.
    pub trip_name: String,
    /// Planned departure date; `None` until the organiser picks one.
    pub departure_date: Option<NaiveDate>,
    /// Selected categories in selection order; duplicates are dropped.
    pub categories: Vec<String>,
}

/// Contribution of the wizard's details step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsStep {
    /// Listing overview text.
    pub overview: String,
    /// Organiser self-description.
    pub about_you: String,
    /// Accommodation style.
    pub accommodation_type: String,
    /// Free-form accommodation notes.
    pub accommodation_details: String,
    /// What the price includes.
    pub inclusions: Vec<String>,
    /// What the price excludes.
    pub exclusions: Vec<String>,
    /// Highlighted selling points.
    pub special_features: Vec<String>,
    /// Minimum group size.
    pub min_trip_mates: i32,
    /// Maximum group size.
    pub max_trip_mates: i32,
}

/// Contribution of the wizard's cost step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostStep {
    /// Currency code for all amounts.
    pub currency: String,
    /// Cost line items in entry order.
    pub cost_items: Vec<CostItem>,
    /// Contingency buffer, in percent.
    pub buffer_percentage: Decimal,
    /// Flat organiser fee.
    pub your_fee: Decimal,
}

impl Default for CostStep {
    fn default() -> Self {
        Self {
            currency: "USD".to_owned(),
            cost_items: Vec::new(),
            buffer_percentage: Decimal::ZERO,
            your_fee: Decimal::ZERO,
        }
    }
}

/// Builder assembling per-step wizard state into a [`TripSubmission`].
///
/// Steps may arrive in any order and may be re-applied; the last value wins.
/// Unvisited steps fall back to their defaults (empty strings and lists), so
/// no field is ever silently dropped.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripmates_backend::domain::TripSubmissionBuilder;
/// use tripmates_backend::domain::trips::BasicsStep;
///
/// let submission = TripSubmissionBuilder::new()
///     .basics(BasicsStep {
///         trip_name: "Vietnam loop".to_owned(),
///         departure_date: NaiveDate::from_ymd_opt(2026, 11, 2),
///         categories: vec!["adventure".to_owned()],
///     })
///     .build()
///     .expect("valid submission");
/// assert!(submission.stops.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripSubmissionBuilder {
    trip_name: String,
    departure_date: Option<NaiveDate>,
    categories: Vec<String>,
    details: DetailsStep,
    stops: Vec<TripStopDraft>,
    costs: Option<CostStep>,
}

impl TripSubmissionBuilder {
    /// Start an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the basics step.
    pub fn basics(mut self, step: BasicsStep) -> Self {
        self.trip_name = step.trip_name;
        self.departure_date = step.departure_date;
        self.categories = dedupe_preserving_order(step.categories);
        self
    }

    /// Apply the details step.
    pub fn details(mut self, step: DetailsStep) -> Self {
        self.details = step;
        self
    }

    /// Apply the itinerary step. Stops are sequenced at build time from
    /// their position in this list.
    pub fn itinerary(mut self, stops: Vec<TripStopDraft>) -> Self {
        self.stops = stops;
        self
    }

    /// Apply the cost step.
    pub fn costs(mut self, step: CostStep) -> Self {
        self.costs = Some(step);
        self
    }

    /// Validate and assemble the submission.
    ///
    /// # Errors
    ///
    /// Returns [`TripValidationError`] for an empty trip name, a missing
    /// departure date, inverted or negative group sizes, negative money
    /// amounts, or malformed stops.
    pub fn build(self) -> Result<TripSubmission, TripValidationError> {
        let Self {
            trip_name,
            departure_date,
            categories,
            details,
            stops,
            costs,
        } = self;

        if trip_name.trim().is_empty() {
            return Err(TripValidationError::EmptyTripName);
        }
        let departure_date = departure_date.ok_or(TripValidationError::MissingDepartureDate)?;

        if details.min_trip_mates < 0 || details.max_trip_mates < 0 {
            return Err(TripValidationError::NegativeMateCount);
        }
        if details.max_trip_mates < details.min_trip_mates {
            return Err(TripValidationError::MateRangeInverted {
                min: details.min_trip_mates,
                max: details.max_trip_mates,
            });
        }

        let costs = costs.unwrap_or_default();
        if costs.buffer_percentage < Decimal::ZERO {
            return Err(TripValidationError::NegativeBuffer);
        }
        if costs.your_fee < Decimal::ZERO {
            return Err(TripValidationError::NegativeFee);
        }
        for (index, item) in costs.cost_items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(TripValidationError::EmptyCostItemName { index });
            }
            if item.amount < Decimal::ZERO {
                return Err(TripValidationError::NegativeAmount { index });
            }
        }

        for (index, stop) in stops.iter().enumerate() {
            if stop.location.trim().is_empty() {
                return Err(TripValidationError::EmptyStopLocation { index });
            }
            if stop.nights < 0 {
                return Err(TripValidationError::NegativeNights { index });
            }
        }

        Ok(TripSubmission {
            attributes: TripAttributes {
                trip_name,
                departure_date,
                categories,
                overview: details.overview,
                about_you: details.about_you,
                accommodation_type: details.accommodation_type,
                accommodation_details: details.accommodation_details,
                inclusions: details.inclusions,
                exclusions: details.exclusions,
                special_features: details.special_features,
                min_trip_mates: details.min_trip_mates,
                max_trip_mates: details.max_trip_mates,
                currency: costs.currency,
                buffer_percentage: costs.buffer_percentage,
                your_fee: costs.your_fee,
            },
            stops: assign_stop_sequence(stops),
            cost_items: costs.cost_items,
        })
    }
}

fn dedupe_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
