//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Trips table: one row per wizard submission.
    ///
    /// The `id` column is the primary key (UUID v4). Money columns use
    /// `Numeric` so totals reproduce exactly.
    trips (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Organiser's user id.
        user_id -> Uuid,
        /// Listing title.
        trip_name -> Text,
        /// Planned departure date.
        departure_date -> Date,
        /// Selected trip categories, ordered.
        categories -> Array<Text>,
        /// Listing overview text.
        overview -> Text,
        /// Organiser self-description.
        about_you -> Text,
        /// Accommodation style.
        accommodation_type -> Text,
        /// Free-form accommodation notes.
        accommodation_details -> Text,
        /// What the price includes, ordered.
        inclusions -> Array<Text>,
        /// What the price excludes, ordered.
        exclusions -> Array<Text>,
        /// Highlighted selling points, ordered.
        special_features -> Array<Text>,
        /// Minimum group size.
        min_trip_mates -> Int4,
        /// Maximum group size.
        max_trip_mates -> Int4,
        /// Currency code for all money columns.
        currency -> Text,
        /// Contingency buffer, in percent.
        buffer_percentage -> Numeric,
        /// Flat organiser fee.
        your_fee -> Numeric,
        /// Cost rollup computed at submission time.
        total_cost -> Numeric,
        /// Lifecycle status string.
        status -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Itinerary stops, children of `trips`.
    trip_stops (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning trip.
        trip_id -> Uuid,
        /// 1-based position within the itinerary.
        sequence_number -> Int4,
        /// Place name.
        location -> Text,
        /// Nights spent at the stop.
        nights -> Int4,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional planned activities.
        activities -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Cost line items, children of `trips`.
    cost_items (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning trip.
        trip_id -> Uuid,
        /// Cost category string.
        category -> Text,
        /// Free-form label.
        name -> Text,
        /// Amount in the trip's currency.
        amount -> Numeric,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(trip_stops -> trips (trip_id));
diesel::joinable!(cost_items -> trips (trip_id));

diesel::allow_tables_to_appear_in_same_query!(trips, trip_stops, cost_items);
