//! Driven port for trip persistence.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{CostItem, NewTrip, Trip, TripStatus, TripStop, UserId};

/// Errors raised by trip repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripRepositoryError {
    /// Repository connection could not be established.
    #[error("trip repository connection failed: {message}")]
    Connection {
        /// Adapter-provided diagnostic.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("trip repository query failed: {message}")]
    Query {
        /// Adapter-provided diagnostic.
        message: String,
    },
}

impl TripRepositoryError {
    /// Build a [`TripRepositoryError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`TripRepositoryError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing trips and reading them back.
///
/// Child writes (`insert_stops`, `insert_cost_items`) are separate calls so
/// the submission service can treat them as best-effort after the parent row
/// commits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Insert the parent trip row; ids and timestamps come back assigned.
    async fn insert_trip(&self, trip: &NewTrip) -> Result<Trip, TripRepositoryError>;

    /// Insert itinerary stops for an existing trip.
    async fn insert_stops(
        &self,
        trip_id: Uuid,
        stops: &[TripStop],
    ) -> Result<(), TripRepositoryError>;

    /// Insert cost line items for an existing trip.
    async fn insert_cost_items(
        &self,
        trip_id: Uuid,
        items: &[CostItem],
    ) -> Result<(), TripRepositoryError>;

    /// Find a trip by id.
    async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<Trip>, TripRepositoryError>;

    /// Load a trip's stops ordered by sequence number.
    async fn load_stops(&self, trip_id: Uuid) -> Result<Vec<TripStop>, TripRepositoryError>;

    /// Load a trip's cost items in entry order.
    async fn load_cost_items(&self, trip_id: Uuid) -> Result<Vec<CostItem>, TripRepositoryError>;

    /// List published trips, newest first.
    async fn list_published(&self) -> Result<Vec<Trip>, TripRepositoryError>;

    /// List every trip a user organises, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Trip>, TripRepositoryError>;

    /// Overwrite a trip's status. Returns `false` when no row matched.
    async fn update_status(
        &self,
        trip_id: Uuid,
        status: TripStatus,
    ) -> Result<bool, TripRepositoryError>;
}

/// Fixture implementation for tests and deployments without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTripRepository;

#[async_trait]
impl TripRepository for FixtureTripRepository {
    async fn insert_trip(&self, trip: &NewTrip) -> Result<Trip, TripRepositoryError> {
        let now = chrono::Utc::now();
        Ok(Trip {
            id: Uuid::new_v4(),
            user_id: trip.user_id.clone(),
            attributes: trip.attributes.clone(),
            total_cost: trip.total_cost,
            status: trip.status,
            created_at: now,
            updated_at: now,
        })
    }

    async fn insert_stops(
        &self,
        _trip_id: Uuid,
        _stops: &[TripStop],
    ) -> Result<(), TripRepositoryError> {
        Ok(())
    }

    async fn insert_cost_items(
        &self,
        _trip_id: Uuid,
        _items: &[CostItem],
    ) -> Result<(), TripRepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _trip_id: Uuid) -> Result<Option<Trip>, TripRepositoryError> {
        Ok(None)
    }

    async fn load_stops(&self, _trip_id: Uuid) -> Result<Vec<TripStop>, TripRepositoryError> {
        Ok(Vec::new())
    }

    async fn load_cost_items(&self, _trip_id: Uuid) -> Result<Vec<CostItem>, TripRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_published(&self) -> Result<Vec<Trip>, TripRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<Trip>, TripRepositoryError> {
        Ok(Vec::new())
    }

    async fn update_status(
        &self,
        _trip_id: Uuid,
        _status: TripStatus,
    ) -> Result<bool, TripRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::TripAttributes;

    fn attributes() -> TripAttributes {
        TripAttributes {
            trip_name: "Vietnam loop".to_owned(),
            departure_date: NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid date"),
            categories: vec!["adventure".to_owned()],
            overview: String::new(),
            about_you: String::new(),
            accommodation_type: String::new(),
            accommodation_details: String::new(),
            inclusions: Vec::new(),
            exclusions: Vec::new(),
            special_features: Vec::new(),
            min_trip_mates: 2,
            max_trip_mates: 6,
            currency: "USD".to_owned(),
            buffer_percentage: dec!(10),
            your_fee: dec!(50),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_insert_assigns_identity() {
        let repo = FixtureTripRepository;
        let inserted = repo
            .insert_trip(&NewTrip {
                user_id: UserId::random(),
                attributes: attributes(),
                total_cost: dec!(1370),
                status: TripStatus::Draft,
            })
            .await
            .expect("fixture insert succeeds");

        assert_eq!(inserted.total_cost, dec!(1370));
        assert_eq!(inserted.status, TripStatus::Draft);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixtureTripRepository;
        let found = repo
            .find_by_id(Uuid::new_v4())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_update_status_reports_no_match() {
        let repo = FixtureTripRepository;
        let updated = repo
            .update_status(Uuid::new_v4(), TripStatus::Published)
            .await
            .expect("fixture update succeeds");
        assert!(!updated);
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = TripRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = TripRepositoryError::connection("pool exhausted");
        assert!(err.to_string().contains("pool exhausted"));
    }
}
