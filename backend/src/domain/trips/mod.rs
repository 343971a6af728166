//! Trip aggregate: cost line items, itinerary stops, wizard submissions, and
//! the persisted trip record.

mod costs;
mod stop;
mod submission;
mod trip;
mod validation;

pub use costs::{CostCategory, CostItem, compute_total_cost, subtotal, sum_by_category};
pub use stop::{TripStop, TripStopDraft, assign_stop_sequence};
pub use submission::{
    BasicsStep, CostStep, DetailsStep, TripAttributes, TripSubmission, TripSubmissionBuilder,
};
pub use trip::{NewTrip, Trip, TripDetail, TripStatus};
pub use validation::TripValidationError;

#[cfg(test)]
mod tests;
