//! Validation errors shared by the trip entities.

use std::fmt;

/// Validation failures raised while building or decoding trip data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripValidationError {
    /// The trip name was empty or whitespace only.
    EmptyTripName,
    /// No departure date was supplied by the basics step.
    MissingDepartureDate,
    /// `max_trip_mates` was below `min_trip_mates`.
    MateRangeInverted {
        /// Configured minimum group size.
        min: i32,
        /// Configured maximum group size.
        max: i32,
    },
    /// A group size bound was negative.
    NegativeMateCount,
    /// A cost item carried a negative amount.
    NegativeAmount {
        /// Zero-based position of the offending item.
        index: usize,
    },
    /// A cost item had an empty name.
    EmptyCostItemName {
        /// Zero-based position of the offending item.
        index: usize,
    },
    /// The buffer percentage was negative.
    NegativeBuffer,
    /// The organiser fee was negative.
    NegativeFee,
    /// An itinerary stop had an empty location.
    EmptyStopLocation {
        /// Zero-based position of the offending stop.
        index: usize,
    },
    /// An itinerary stop had a negative night count.
    NegativeNights {
        /// Zero-based position of the offending stop.
        index: usize,
    },
    /// A status string did not name a known trip status.
    UnknownStatus {
        /// The rejected input.
        value: String,
    },
    /// A category string did not name a known cost category.
    UnknownCostCategory {
        /// The rejected input.
        value: String,
    },
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTripName => write!(f, "trip name must not be empty"),
            Self::MissingDepartureDate => write!(f, "departure date is required"),
            Self::MateRangeInverted { min, max } => {
                write!(f, "max trip mates ({max}) must not be below min ({min})")
            }
            Self::NegativeMateCount => write!(f, "trip mate counts must not be negative"),
            Self::NegativeAmount { index } => {
                write!(f, "cost item {index} must not have a negative amount")
            }
            Self::EmptyCostItemName { index } => {
                write!(f, "cost item {index} must have a name")
            }
            Self::NegativeBuffer => write!(f, "buffer percentage must not be negative"),
            Self::NegativeFee => write!(f, "organiser fee must not be negative"),
            Self::EmptyStopLocation { index } => {
                write!(f, "itinerary stop {index} must have a location")
            }
            Self::NegativeNights { index } => {
                write!(f, "itinerary stop {index} must not have negative nights")
            }
            Self::UnknownStatus { value } => write!(f, "unknown trip status: {value}"),
            Self::UnknownCostCategory { value } => write!(f, "unknown cost category: {value}"),
        }
    }
}

impl std::error::Error for TripValidationError {}
