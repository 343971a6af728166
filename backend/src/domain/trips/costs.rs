//! Cost line items and the pure cost rollup.
//!
//! Functions here are side-effect-free aggregation over in-memory items.
//! Amount validity (non-negativity) is a caller concern enforced by
//! [`super::TripSubmissionBuilder`]; the arithmetic itself performs no
//! checks so that it stays a total function over its inputs.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TripValidationError;

/// Category a cost line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// Lodging costs (hotels, hostels, camps).
    Accommodation,
    /// Transit costs (flights, trains, fuel).
    Transportation,
    /// Excursions and entry fees.
    Activities,
}

impl CostCategory {
    /// Stable wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Transportation => "transportation",
            Self::Activities => "activities",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostCategory {
    type Err = TripValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accommodation" => Ok(Self::Accommodation),
            "transportation" => Ok(Self::Transportation),
            "activities" => Ok(Self::Activities),
            other => Err(TripValidationError::UnknownCostCategory {
                value: other.to_owned(),
            }),
        }
    }
}

/// A single cost line item collected by the wizard's cost step.
///
/// Ephemeral during editing; becomes a persisted child record of the trip
/// once the submission is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostItem {
    /// Category the amount is attributed to.
    pub category: CostCategory,
    /// Free-form label, e.g. "Hostel in Hanoi".
    pub name: String,
    /// Non-negative amount in the trip's currency.
    pub amount: Decimal,
}

/// Sum of `amount` for items in `category`; zero when nothing matches.
pub fn sum_by_category(items: &[CostItem], category: CostCategory) -> Decimal {
    items
        .iter()
        .filter(|item| item.category == category)
        .map(|item| item.amount)
        .sum()
}

/// Sum of `amount` across all items regardless of category.
pub fn subtotal(items: &[CostItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

/// Total trip cost: subtotal, plus a percentage buffer, plus a flat fee.
///
/// The buffer and fee apply once to the combined subtotal, never per
/// category. With exact decimal arithmetic the result is reproducible for
/// any item order.
pub fn compute_total_cost(
    items: &[CostItem],
    buffer_percentage: Decimal,
    your_fee: Decimal,
) -> Decimal {
    let base = subtotal(items);
    let buffer_amount = base * buffer_percentage / Decimal::ONE_HUNDRED;
    base + buffer_amount + your_fee
}
