//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{cost_items, trip_stops, trips};

/// Row struct for reading from the trips table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trips)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TripRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trip_name: String,
    pub departure_date: NaiveDate,
    pub categories: Vec<String>,
    pub overview: String,
    pub about_you: String,
    pub accommodation_type: String,
    pub accommodation_details: String,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub special_features: Vec<String>,
    pub min_trip_mates: i32,
    pub max_trip_mates: i32,
    pub currency: String,
    pub buffer_percentage: Decimal,
    pub your_fee: Decimal,
    pub total_cost: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new trip records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trips)]
pub(crate) struct NewTripRow<'a> {
    pub user_id: Uuid,
    pub trip_name: &'a str,
    pub departure_date: NaiveDate,
    pub categories: &'a [String],
    pub overview: &'a str,
    pub about_you: &'a str,
    pub accommodation_type: &'a str,
    pub accommodation_details: &'a str,
    pub inclusions: &'a [String],
    pub exclusions: &'a [String],
    pub special_features: &'a [String],
    pub min_trip_mates: i32,
    pub max_trip_mates: i32,
    pub currency: &'a str,
    pub buffer_percentage: Decimal,
    pub your_fee: Decimal,
    pub total_cost: Decimal,
    pub status: &'a str,
}

/// Row struct for reading from the trip_stops table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trip_stops)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TripStopRow {
    #[expect(dead_code, reason = "child rows are keyed by trip, not read back by id")]
    pub id: Uuid,
    #[expect(dead_code, reason = "filter column, redundant once rows are loaded")]
    pub trip_id: Uuid,
    pub sequence_number: i32,
    pub location: String,
    pub nights: i32,
    pub description: Option<String>,
    pub activities: Option<String>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new stop records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trip_stops)]
pub(crate) struct NewTripStopRow<'a> {
    pub trip_id: Uuid,
    pub sequence_number: i32,
    pub location: &'a str,
    pub nights: i32,
    pub description: Option<&'a str>,
    pub activities: Option<&'a str>,
}

/// Row struct for reading from the cost_items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cost_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CostItemRow {
    #[expect(dead_code, reason = "child rows are keyed by trip, not read back by id")]
    pub id: Uuid,
    #[expect(dead_code, reason = "filter column, redundant once rows are loaded")]
    pub trip_id: Uuid,
    pub category: String,
    pub name: String,
    pub amount: Decimal,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new cost item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cost_items)]
pub(crate) struct NewCostItemRow<'a> {
    pub trip_id: Uuid,
    pub category: &'a str,
    pub name: &'a str,
    pub amount: Decimal,
}
