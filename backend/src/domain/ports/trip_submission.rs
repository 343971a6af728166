//! Driving port for trip submission.
//!
//! Inbound adapters call [`TripSubmissionService`] to persist a validated
//! wizard submission without knowing the backing storage. The response
//! carries the stored trip plus any warnings from best-effort child writes.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, Trip, TripStatus, TripSubmission, UserId};

/// Request payload for trip submission.
#[derive(Debug, Clone)]
pub struct SubmitTripRequest {
    /// Organiser submitting the trip.
    pub user_id: UserId,
    /// The assembled wizard submission.
    pub submission: TripSubmission,
}

/// A non-fatal problem encountered while persisting child records.
///
/// The parent trip row is already committed when one of these is raised;
/// clients see the trip as created but should know which children are
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "stage", content = "message")]
pub enum SubmissionWarning {
    /// Itinerary stops could not be written.
    StopsNotSaved(String),
    /// Cost line items could not be written.
    CostItemsNotSaved(String),
}

/// Response from a successful trip submission.
#[derive(Debug, Clone)]
pub struct SubmitTripResponse {
    /// The stored trip, with identity and audit columns assigned.
    pub trip: Trip,
    /// Warnings from best-effort child writes; empty on a clean run.
    pub warnings: Vec<SubmissionWarning>,
}

/// Driving port for persisting wizard submissions.
///
/// Implementations coordinate:
/// 1. Cost rollup from the submission's line items.
/// 2. The fail-fast parent trip insert.
/// 3. Best-effort stop and cost-item inserts, surfaced as warnings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripSubmissionService: Send + Sync {
    /// Persist a submission as a published trip.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for:
    /// - `ServiceUnavailable`: storage could not be reached.
    /// - `Internal`: the parent insert failed during execution.
    ///
    /// Child insert failures never error; they are returned as
    /// [`SubmitTripResponse::warnings`].
    async fn submit(&self, request: SubmitTripRequest) -> Result<SubmitTripResponse, Error>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Echoes the submission back as a stored published trip with a random id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTripSubmissionService;

#[async_trait]
impl TripSubmissionService for FixtureTripSubmissionService {
    async fn submit(&self, request: SubmitTripRequest) -> Result<SubmitTripResponse, Error> {
        let now = Utc::now();
        let total_cost = request.submission.total_cost();
        Ok(SubmitTripResponse {
            trip: Trip {
                id: Uuid::new_v4(),
                user_id: request.user_id,
                attributes: request.submission.attributes,
                total_cost,
                status: TripStatus::Published,
                created_at: now,
                updated_at: now,
            },
            warnings: Vec::new(),
        })
    }
}
