//! Domain entities, validation, and port-facing services.
//!
//! Purpose: define strongly typed trip entities used by the API and
//! persistence layers, plus the service implementations that sit behind the
//! driving ports. Types are immutable once constructed; invariants live in
//! each type's Rustdoc.

pub mod error;
pub mod ports;
pub mod submission;
pub mod trip_query_service;
pub mod trips;
pub mod user;


pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::submission::TripSubmissionServiceImpl;
pub use self::trip_query_service::TripQueryServiceImpl;
pub use self::trips::{
    BasicsStep, CostCategory, CostItem, CostStep, DetailsStep, NewTrip, Trip, TripAttributes,
    TripDetail, TripStatus, TripStop, TripStopDraft, TripSubmission, TripSubmissionBuilder,
    TripValidationError, assign_stop_sequence, compute_total_cost, subtotal, sum_by_category,
};
pub use self::user::{UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use tripmates_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("missing"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
