//! The persisted trip record and its lifecycle status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::costs::CostItem;
use super::stop::TripStop;
use super::submission::TripAttributes;
use super::validation::TripValidationError;
use crate::domain::user::UserId;

/// Lifecycle status of a persisted trip.
///
/// Any status may transition to any other; the backend records the latest
/// value without enforcing an ordering between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Visible only to its organiser.
    Draft,
    /// Publicly listed.
    Published,
    /// The trip has taken place.
    Completed,
    /// Withdrawn by the organiser.
    Cancelled,
}

impl TripStatus {
    /// Stable wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = TripValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(TripValidationError::UnknownStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// A trip as stored, with identity and audit columns assigned by the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Primary key.
    pub id: Uuid,
    /// Organiser who submitted the trip.
    pub user_id: UserId,
    /// Scalar wizard fields.
    pub attributes: TripAttributes,
    /// Cost rollup computed at submission time.
    pub total_cost: Decimal,
    /// Current lifecycle status.
    pub status: TripStatus,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Parent-row payload for a trip insert; ids and timestamps come from the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    /// Organiser submitting the trip.
    pub user_id: UserId,
    /// Scalar wizard fields.
    pub attributes: TripAttributes,
    /// Cost rollup computed from the submission.
    pub total_cost: Decimal,
    /// Initial lifecycle status.
    pub status: TripStatus,
}

/// A trip together with its child records, as served by single-trip reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetail {
    /// The parent record.
    pub trip: Trip,
    /// Itinerary stops ordered by sequence number.
    pub stops: Vec<TripStop>,
    /// Cost line items in entry order.
    pub cost_items: Vec<CostItem>,
}
