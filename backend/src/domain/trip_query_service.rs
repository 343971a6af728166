//! Repository-backed implementation of the trip query port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::ports::{TripQuery, TripRepository, TripRepositoryError};
use crate::domain::{Error, Trip, TripDetail, TripStatus, UserId};

/// Serves trip reads and status updates over a [`TripRepository`].
pub struct TripQueryServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> TripQueryServiceImpl<R> {
    /// Build the service over a trip repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Map a repository failure to a domain error.
fn storage_error(err: &TripRepositoryError) -> Error {
    match err {
        TripRepositoryError::Connection { .. } => {
            Error::service_unavailable("trip storage is unavailable")
        }
        TripRepositoryError::Query { .. } => Error::internal("trip query failed"),
    }
}

#[async_trait]
impl<R> TripQuery for TripQueryServiceImpl<R>
where
    R: TripRepository,
{
    async fn get_trip(&self, trip_id: Uuid) -> Result<TripDetail, Error> {
        let trip = self
            .repository
            .find_by_id(trip_id)
            .await
            .map_err(|err| {
                warn!(trip_id = %trip_id, error = %err, "trip lookup failed");
                storage_error(&err)
            })?
            .ok_or_else(|| Error::not_found(format!("trip {trip_id} not found")))?;

        let stops = self
            .repository
            .load_stops(trip_id)
            .await
            .map_err(|err| storage_error(&err))?;
        let cost_items = self
            .repository
            .load_cost_items(trip_id)
            .await
            .map_err(|err| storage_error(&err))?;

        Ok(TripDetail {
            trip,
            stops,
            cost_items,
        })
    }

    async fn list_published(&self) -> Result<Vec<Trip>, Error> {
        self.repository
            .list_published()
            .await
            .map_err(|err| storage_error(&err))
    }

    async fn get_user_trips(&self, user_id: &UserId) -> Result<Vec<Trip>, Error> {
        self.repository
            .list_for_user(user_id)
            .await
            .map_err(|err| storage_error(&err))
    }

    async fn update_status(&self, trip_id: Uuid, status: TripStatus) -> Result<(), Error> {
        let matched = self
            .repository
            .update_status(trip_id, status)
            .await
            .map_err(|err| {
                warn!(trip_id = %trip_id, error = %err, "status update failed");
                storage_error(&err)
            })?;

        if !matched {
            return Err(Error::not_found(format!("trip {trip_id} not found")));
        }

        info!(trip_id = %trip_id, status = %status, "trip status updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::{NaiveDate, Utc};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::ports::MockTripRepository;
    use crate::domain::{ErrorCode, TripAttributes, TripStop};

    fn trip(id: Uuid) -> Trip {
        let now = Utc::now();
        Trip {
            id,
            user_id: UserId::random(),
            attributes: TripAttributes {
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
            },
            total_cost: dec!(1370),
            status: TripStatus::Published,
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn get_trip_assembles_detail_from_parent_and_children() {
        let trip_id = Uuid::new_v4();
        let mut repository = MockTripRepository::new();
        let stored = trip(trip_id);
        let returned = stored.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_load_stops().times(1).returning(|_| {
            Ok(vec![TripStop {
                sequence_number: 1,
                location: "Hanoi".to_owned(),
                nights: 3,
                description: None,
                activities: None,
            }])
        });
        repository
            .expect_load_cost_items()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = TripQueryServiceImpl::new(Arc::new(repository));
        let detail = service.get_trip(trip_id).await.expect("trip exists");

        assert_eq!(detail.trip, stored);
        assert_eq!(detail.stops.len(), 1);
        assert!(detail.cost_items.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn missing_trip_maps_to_not_found_without_child_loads() {
        let mut repository = MockTripRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_load_stops().times(0);
        repository.expect_load_cost_items().times(0);

        let service = TripQueryServiceImpl::new(Arc::new(repository));
        let err = service
            .get_trip(Uuid::new_v4())
            .await
            .expect_err("lookup misses");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failure_maps_to_service_unavailable() {
        let mut repository = MockTripRepository::new();
        repository
            .expect_list_published()
            .times(1)
            .returning(|| Err(TripRepositoryError::connection("pool exhausted")));

        let service = TripQueryServiceImpl::new(Arc::new(repository));
        let err = service
            .list_published()
            .await
            .expect_err("listing fails");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[rstest]
    #[tokio::test]
    async fn update_status_reports_not_found_when_no_row_matched() {
        let mut repository = MockTripRepository::new();
        repository
            .expect_update_status()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = TripQueryServiceImpl::new(Arc::new(repository));
        let err = service
            .update_status(Uuid::new_v4(), TripStatus::Cancelled)
            .await
            .expect_err("no trip to update");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn update_status_succeeds_when_a_row_matched() {
        let mut repository = MockTripRepository::new();
        repository
            .expect_update_status()
            .times(1)
            .returning(|_, _| Ok(true));

        let service = TripQueryServiceImpl::new(Arc::new(repository));
        service
            .update_status(Uuid::new_v4(), TripStatus::Published)
            .await
            .expect("status update succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn user_trips_pass_through_from_the_repository() {
        let user = UserId::random();
        let stored = trip(Uuid::new_v4());
        let returned = stored.clone();
        let mut repository = MockTripRepository::new();
        repository
            .expect_list_for_user()
            .times(1)
            .returning(move |_| Ok(vec![returned.clone()]));

        let service = TripQueryServiceImpl::new(Arc::new(repository));
        let trips = service.get_user_trips(&user).await.expect("listing works");

        assert_eq!(trips, vec![stored]);
    }
}
