//! Driving port for trip reads and status changes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Trip, TripDetail, TripStatus, UserId};

/// Port for reading trips and overwriting their status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripQuery: Send + Sync {
    /// Fetch a trip with its stops and cost items.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no trip has the id, `ServiceUnavailable` when
    /// storage is unreachable, and `Internal` for query failures.
    async fn get_trip(&self, trip_id: Uuid) -> Result<TripDetail, Error>;

    /// List published trips, newest first.
    async fn list_published(&self) -> Result<Vec<Trip>, Error>;

    /// List every trip the user organises, newest first.
    async fn get_user_trips(&self, user_id: &UserId) -> Result<Vec<Trip>, Error>;

    /// Overwrite a trip's status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no trip has the id; storage failures map as
    /// for [`TripQuery::get_trip`].
    async fn update_status(&self, trip_id: Uuid, status: TripStatus) -> Result<(), Error>;
}

/// Fixture implementation for tests that do not exercise trip reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTripQuery;

#[async_trait]
impl TripQuery for FixtureTripQuery {
    async fn get_trip(&self, trip_id: Uuid) -> Result<TripDetail, Error> {
        Err(Error::not_found(format!("trip {trip_id} not found")))
    }

    async fn list_published(&self) -> Result<Vec<Trip>, Error> {
        Ok(Vec::new())
    }

    async fn get_user_trips(&self, _user_id: &UserId) -> Result<Vec<Trip>, Error> {
        Ok(Vec::new())
    }

    async fn update_status(&self, trip_id: Uuid, _status: TripStatus) -> Result<(), Error> {
        Err(Error::not_found(format!("trip {trip_id} not found")))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_get_trip_reports_not_found() {
        let query = FixtureTripQuery;
        let err = query
            .get_trip(Uuid::new_v4())
            .await
            .expect_err("fixture lookup misses");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_are_empty() {
        let query = FixtureTripQuery;
        assert!(query.list_published().await.expect("fixture list").is_empty());
        assert!(
            query
                .get_user_trips(&UserId::random())
                .await
                .expect("fixture list")
                .is_empty()
        );
    }
}
