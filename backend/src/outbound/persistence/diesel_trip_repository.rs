//! PostgreSQL-backed `TripRepository` implementation using Diesel ORM.
//!
//! This adapter translates between Diesel rows and validated domain types;
//! submission orchestration lives in the domain layer.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{TripRepository, TripRepositoryError};
use crate::domain::{
    CostItem, NewTrip, Trip, TripAttributes, TripStatus, TripStop, UserId,
};

use super::models::{CostItemRow, NewCostItemRow, NewTripRow, NewTripStopRow, TripRow, TripStopRow};
use super::pool::{DbPool, PoolError};
use super::schema::{cost_items, trip_stops, trips};

/// Diesel-backed implementation of the trip repository port.
#[derive(Clone)]
pub struct DieselTripRepository {
    pool: DbPool,
}

impl DieselTripRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to repository connection errors.
fn map_pool_error(error: PoolError) -> TripRepositoryError {
    let message = match error {
        PoolError::Unavailable { message } | PoolError::Setup { message } => message,
    };
    TripRepositoryError::connection(message)
}

/// Map common Diesel error variants to repository errors.
///
/// `NotFound` and query-builder failures map to query errors; only closed
/// connections count as connection errors.
fn map_diesel_error(error: diesel::result::Error) -> TripRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => TripRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => TripRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TripRepositoryError::connection("database connection error")
        }
        _ => TripRepositoryError::query("database error"),
    }
}

/// Convert a database row into a validated domain trip.
fn row_to_trip(row: TripRow) -> Result<Trip, TripRepositoryError> {
    let TripRow {
        id,
        user_id,
        trip_name,
        departure_date,
        categories,
        overview,
        about_you,
        accommodation_type,
        accommodation_details,
        inclusions,
        exclusions,
        special_features,
        min_trip_mates,
        max_trip_mates,
        currency,
        buffer_percentage,
        your_fee,
        total_cost,
        status,
        created_at,
        updated_at,
    } = row;

    let status: TripStatus = status
        .parse()
        .map_err(|err: crate::domain::TripValidationError| {
            TripRepositoryError::query(err.to_string())
        })?;

    Ok(Trip {
        id,
        user_id: UserId::from_uuid(user_id),
        attributes: TripAttributes {
            trip_name,
            departure_date,
            categories,
            overview,
            about_you,
            accommodation_type,
            accommodation_details,
            inclusions,
            exclusions,
            special_features,
            min_trip_mates,
            max_trip_mates,
            currency,
            buffer_percentage,
            your_fee,
        },
        total_cost,
        status,
        created_at,
        updated_at,
    })
}

fn row_to_stop(row: TripStopRow) -> TripStop {
    TripStop {
        sequence_number: row.sequence_number,
        location: row.location,
        nights: row.nights,
        description: row.description,
        activities: row.activities,
    }
}

fn row_to_cost_item(row: CostItemRow) -> Result<CostItem, TripRepositoryError> {
    let category = row
        .category
        .parse()
        .map_err(|err: crate::domain::TripValidationError| {
            TripRepositoryError::query(err.to_string())
        })?;

    Ok(CostItem {
        category,
        name: row.name,
        amount: row.amount,
    })
}

fn new_trip_row<'a>(trip: &'a NewTrip) -> NewTripRow<'a> {
    let attributes = &trip.attributes;
    NewTripRow {
        user_id: *trip.user_id.as_uuid(),
        trip_name: &attributes.trip_name,
        departure_date: attributes.departure_date,
        categories: &attributes.categories,
        overview: &attributes.overview,
        about_you: &attributes.about_you,
        accommodation_type: &attributes.accommodation_type,
        accommodation_details: &attributes.accommodation_details,
        inclusions: &attributes.inclusions,
        exclusions: &attributes.exclusions,
        special_features: &attributes.special_features,
        min_trip_mates: attributes.min_trip_mates,
        max_trip_mates: attributes.max_trip_mates,
        currency: &attributes.currency,
        buffer_percentage: attributes.buffer_percentage,
        your_fee: attributes.your_fee,
        total_cost: trip.total_cost,
        status: trip.status.as_str(),
    }
}

#[async_trait]
impl TripRepository for DieselTripRepository {
    async fn insert_trip(&self, trip: &NewTrip) -> Result<Trip, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: TripRow = diesel::insert_into(trips::table)
            .values(new_trip_row(trip))
            .returning(TripRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_trip(row)
    }

    async fn insert_stops(
        &self,
        trip_id: Uuid,
        stops: &[TripStop],
    ) -> Result<(), TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NewTripStopRow<'_>> = stops
            .iter()
            .map(|stop| NewTripStopRow {
                trip_id,
                sequence_number: stop.sequence_number,
                location: &stop.location,
                nights: stop.nights,
                description: stop.description.as_deref(),
                activities: stop.activities.as_deref(),
            })
            .collect();

        diesel::insert_into(trip_stops::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn insert_cost_items(
        &self,
        trip_id: Uuid,
        items: &[CostItem],
    ) -> Result<(), TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NewCostItemRow<'_>> = items
            .iter()
            .map(|item| NewCostItemRow {
                trip_id,
                category: item.category.as_str(),
                name: &item.name,
                amount: item.amount,
            })
            .collect();

        diesel::insert_into(cost_items::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = trips::table
            .filter(trips::id.eq(trip_id))
            .select(TripRow::as_select())
            .first::<TripRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_trip).transpose()
    }

    async fn load_stops(&self, trip_id: Uuid) -> Result<Vec<TripStop>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TripStopRow> = trip_stops::table
            .filter(trip_stops::trip_id.eq(trip_id))
            .order(trip_stops::sequence_number.asc())
            .select(TripStopRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_stop).collect())
    }

    async fn load_cost_items(&self, trip_id: Uuid) -> Result<Vec<CostItem>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CostItemRow> = cost_items::table
            .filter(cost_items::trip_id.eq(trip_id))
            .order(cost_items::created_at.asc())
            .select(CostItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_cost_item).collect()
    }

    async fn list_published(&self) -> Result<Vec<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TripRow> = trips::table
            .filter(trips::status.eq(TripStatus::Published.as_str()))
            .order(trips::created_at.desc())
            .select(TripRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_trip).collect()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TripRow> = trips::table
            .filter(trips::user_id.eq(user_id.as_uuid()))
            .order(trips::created_at.desc())
            .select(TripRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_trip).collect()
    }

    async fn update_status(
        &self,
        trip_id: Uuid,
        status: TripStatus,
    ) -> Result<bool, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // diesel::dsl::now is Timestamp-typed, so set updated_at explicitly.
        let affected = diesel::update(trips::table.filter(trips::id.eq(trip_id)))
            .set((
                trips::status.eq(status.as_str()),
                trips::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
