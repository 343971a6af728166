//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureTripQuery, FixtureTripSubmissionService, TripQuery, TripSubmissionService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Driving port persisting wizard submissions.
    pub submission: Arc<dyn TripSubmissionService>,
    /// Driving port for trip reads and status changes.
    pub trips: Arc<dyn TripQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(submission: Arc<dyn TripSubmissionService>, trips: Arc<dyn TripQuery>) -> Self {
        Self { submission, trips }
    }

    /// Construct state backed entirely by fixture ports.
    ///
    /// # Examples
    /// ```
    /// use tripmates_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::fixture();
    /// let _submission = state.submission.clone();
    /// ```
    pub fn fixture() -> Self {
        Self {
            submission: Arc::new(FixtureTripSubmissionService),
            trips: Arc::new(FixtureTripQuery),
        }
    }
}
