//! Hexagonal ports: traits the HTTP layer drives and the persistence layer
//! implements.
//!
//! Driving ports ([`TripSubmissionService`], [`TripQuery`]) describe what the
//! application offers; the driven port ([`TripRepository`]) describes what it
//! requires from storage. Each port ships a fixture implementation so tests
//! and fixture deployments can run without a database.

mod trip_query;
mod trip_repository;
mod trip_submission;

pub use trip_query::{FixtureTripQuery, TripQuery};
pub use trip_repository::{FixtureTripRepository, TripRepository, TripRepositoryError};
pub use trip_submission::{
    FixtureTripSubmissionService, SubmissionWarning, SubmitTripRequest, SubmitTripResponse,
    TripSubmissionService,
};

#[cfg(test)]
pub use trip_query::MockTripQuery;
#[cfg(test)]
pub use trip_repository::MockTripRepository;
#[cfg(test)]
pub use trip_submission::MockTripSubmissionService;
