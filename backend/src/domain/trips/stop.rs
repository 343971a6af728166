//! Itinerary stops and sequence assignment.

/// An itinerary stop as collected by the wizard, before sequencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripStopDraft {
    /// Place name, e.g. "Hoi An".
    pub location: String,
    /// Nights spent at the stop; non-negative.
    pub nights: i32,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional activities planned at the stop.
    pub activities: Option<String>,
}

/// A sequenced itinerary stop.
///
/// `sequence_number` is the 1-based position the stop held in the wizard's
/// list at the moment the submission was assembled. Numbers are never reused
/// or renumbered after persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripStop {
    /// 1-based, contiguous position within the itinerary.
    pub sequence_number: i32,
    /// Place name.
    pub location: String,
    /// Nights spent at the stop; non-negative.
    pub nights: i32,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional activities planned at the stop.
    pub activities: Option<String>,
}

/// Assign 1-based sequence numbers from list position.
///
/// Deterministic: the same input list always yields the same output, so
/// re-running assembly over unchanged wizard state is idempotent. Reordering
/// the input before submission changes the numbering accordingly.
///
/// # Examples
/// ```
/// use tripmates_backend::domain::{TripStopDraft, assign_stop_sequence};
///
/// let stops = assign_stop_sequence(vec![TripStopDraft {
///     location: "Hanoi".to_owned(),
///     nights: 2,
///     description: None,
///     activities: None,
/// }]);
/// assert_eq!(stops[0].sequence_number, 1);
/// ```
pub fn assign_stop_sequence(drafts: Vec<TripStopDraft>) -> Vec<TripStop> {
    drafts
        .into_iter()
        .zip(1..)
        .map(|(draft, sequence_number)| TripStop {
            sequence_number,
            location: draft.location,
            nights: draft.nights,
            description: draft.description,
            activities: draft.activities,
        })
        .collect()
}
