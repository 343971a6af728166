//! Trip submission orchestration.
//!
//! [`TripSubmissionServiceImpl`] turns a validated wizard submission into
//! rows: one fail-fast parent insert (listed as published straight away),
//! then best-effort child inserts. A trip whose stops or cost items fail to
//! write is still a created trip; the failures come back as warnings so
//! callers can reconcile later.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    SubmissionWarning, SubmitTripRequest, SubmitTripResponse, TripRepository, TripRepositoryError,
    TripSubmissionService,
};
use crate::domain::{Error, NewTrip, TripStatus};


/// Repository-backed implementation of [`TripSubmissionService`].
pub struct TripSubmissionServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> TripSubmissionServiceImpl<R> {
    /// Build the service over a trip repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Map a repository failure on the parent insert to a domain error.
fn storage_error(err: &TripRepositoryError) -> Error {
    match err {
        TripRepositoryError::Connection { .. } => {
            Error::service_unavailable("trip storage is unavailable")
        }
        TripRepositoryError::Query { .. } => Error::internal("failed to store trip"),
    }
}

#[async_trait]
impl<R> TripSubmissionService for TripSubmissionServiceImpl<R>
where
    R: TripRepository,
{
    async fn submit(&self, request: SubmitTripRequest) -> Result<SubmitTripResponse, Error> {
        let SubmitTripRequest {
            user_id,
            submission,
        } = request;

        let total_cost = submission.total_cost();
        let new_trip = NewTrip {
            user_id,
            attributes: submission.attributes,
            total_cost,
            status: TripStatus::Published,
        };

        let trip = self.repository.insert_trip(&new_trip).await.map_err(|err| {
            warn!(error = %err, "trip insert failed");
            storage_error(&err)
        })?;

        let mut warnings = Vec::new();

        if !submission.stops.is_empty() {
            if let Err(err) = self
                .repository
                .insert_stops(trip.id, &submission.stops)
                .await
            {
                warn!(trip_id = %trip.id, error = %err, "stop insert failed after trip commit");
                warnings.push(SubmissionWarning::StopsNotSaved(err.to_string()));
            }
        }

        if !submission.cost_items.is_empty() {
            if let Err(err) = self
                .repository
                .insert_cost_items(trip.id, &submission.cost_items)
                .await
            {
                warn!(trip_id = %trip.id, error = %err, "cost item insert failed after trip commit");
                warnings.push(SubmissionWarning::CostItemsNotSaved(err.to_string()));
            }
        }

        info!(
            trip_id = %trip.id,
            user_id = %trip.user_id,
            total_cost = %trip.total_cost,
            warning_count = warnings.len(),
            "trip submitted"
        );

        Ok(SubmitTripResponse { trip, warnings })
    }
}
