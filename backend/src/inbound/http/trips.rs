//! Trip HTTP handlers.
//!
//! ```text
//! POST /api/v1/trips
//! GET  /api/v1/trips
//! GET  /api/v1/trips/{trip_id}
//! GET  /api/v1/me/trips
//! PUT  /api/v1/trips/{trip_id}/status
//! ```

use actix_web::{get, post, put, web};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{SubmissionWarning, SubmitTripRequest};
use crate::domain::{
    BasicsStep, CostItem, CostStep, DetailsStep, Error, Trip, TripDetail, TripStop, TripStopDraft,
    TripSubmissionBuilder,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::OrganiserSession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_amount, parse_amount_at, parse_category, parse_date, parse_status, parse_uuid,
};

/// Itinerary stop payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripStopBody {
    /// Place name.
    pub location: String,
    /// Nights spent at the stop.
    pub nights: i32,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional planned activities.
    pub activities: Option<String>,
}

/// Cost line item payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostItemBody {
    /// Cost category: accommodation, transportation, or activities.
    pub category: String,
    /// Free-form label.
    pub name: String,
    /// Amount in the trip's currency.
    pub amount: f64,
}

/// Request payload for submitting a trip.
///
/// Mirrors the wizard's steps as one flat document; optional fields default
/// to empty so partially filled wizards still submit.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTripRequestBody {
    /// Listing title.
    pub trip_name: String,
    /// Planned departure date, `YYYY-MM-DD`.
    #[schema(format = "date")]
    pub departure_date: String,
    /// Selected categories in selection order.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Listing overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Organiser self-description.
    #[serde(default)]
    pub about_you: Option<String>,
    /// Accommodation style.
    #[serde(default)]
    pub accommodation_type: Option<String>,
    /// Free-form accommodation notes.
    #[serde(default)]
    pub accommodation_details: Option<String>,
    /// What the price includes.
    #[serde(default)]
    pub inclusions: Vec<String>,
    /// What the price excludes.
    #[serde(default)]
    pub exclusions: Vec<String>,
    /// Highlighted selling points.
    #[serde(default)]
    pub special_features: Vec<String>,
    /// Minimum group size.
    #[serde(default)]
    pub min_trip_mates: i32,
    /// Maximum group size.
    #[serde(default)]
    pub max_trip_mates: i32,
    /// Currency code; defaults to USD.
    #[serde(default)]
    pub currency: Option<String>,
    /// Contingency buffer, in percent.
    #[serde(default)]
    pub buffer_percentage: f64,
    /// Flat organiser fee.
    #[serde(default)]
    pub your_fee: f64,
    /// Itinerary stops in display order.
    #[serde(default)]
    pub stops: Vec<TripStopBody>,
    /// Cost line items in entry order.
    #[serde(default)]
    pub cost_items: Vec<CostItemBody>,
}

/// Persisted trip payload returned by reads and writes.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripResponseBody {
    /// Trip identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Organiser identifier.
    #[schema(format = "uuid")]
    pub user_id: String,
    /// Listing title.
    pub trip_name: String,
    /// Planned departure date, `YYYY-MM-DD`.
    #[schema(format = "date")]
    pub departure_date: String,
    /// Selected categories.
    pub categories: Vec<String>,
    /// Listing overview text.
    pub overview: String,
    /// Organiser self-description.
    pub about_you: String,
    /// Accommodation style.
    pub accommodation_type: String,
    /// Free-form accommodation notes.
    pub accommodation_details: String,
    /// What the price includes.
    pub inclusions: Vec<String>,
    /// What the price excludes.
    pub exclusions: Vec<String>,
    /// Highlighted selling points.
    pub special_features: Vec<String>,
    /// Minimum group size.
    pub min_trip_mates: i32,
    /// Maximum group size.
    pub max_trip_mates: i32,
    /// Currency code for all amounts.
    pub currency: String,
    /// Contingency buffer, in percent.
    pub buffer_percentage: f64,
    /// Flat organiser fee.
    pub your_fee: f64,
    /// Cost rollup computed at submission time.
    pub total_cost: f64,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp, RFC 3339.
    #[schema(format = "date-time")]
    pub created_at: String,
    /// Last modification timestamp, RFC 3339.
    #[schema(format = "date-time")]
    pub updated_at: String,
}

/// Non-fatal warning from a best-effort child write.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionWarningBody {
    /// Which child records were not saved.
    pub stage: String,
    /// Adapter-provided diagnostic.
    pub message: String,
}

/// Response payload for trip submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTripResponseBody {
    /// The stored trip.
    pub trip: TripResponseBody,
    /// Warnings from best-effort child writes; empty on a clean run.
    pub warnings: Vec<SubmissionWarningBody>,
}

/// Sequenced itinerary stop payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripStopResponseBody {
    /// 1-based position within the itinerary.
    pub sequence_number: i32,
    /// Place name.
    pub location: String,
    /// Nights spent at the stop.
    pub nights: i32,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional planned activities.
    pub activities: Option<String>,
}

/// Cost line item payload returned by reads.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostItemResponseBody {
    /// Cost category.
    pub category: String,
    /// Free-form label.
    pub name: String,
    /// Amount in the trip's currency.
    pub amount: f64,
}

/// Response payload for single-trip reads.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDetailResponseBody {
    /// The parent record.
    pub trip: TripResponseBody,
    /// Itinerary stops ordered by sequence number.
    pub stops: Vec<TripStopResponseBody>,
    /// Cost line items in entry order.
    pub cost_items: Vec<CostItemResponseBody>,
}

/// Request payload for overwriting a trip's status.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripStatusRequestBody {
    /// New status: draft, published, completed, or cancelled.
    pub status: String,
}

/// Convert an exact decimal to the JSON number form.
///
/// Money values fit comfortably in an f64 mantissa; a failed conversion
/// indicates corrupted data, surfaced as an internal error.
fn money_to_f64(value: Decimal, field: &'static str) -> ApiResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::internal(format!("{field} is not representable as a number")))
}

fn trip_to_body(trip: Trip) -> ApiResult<TripResponseBody> {
    let attributes = trip.attributes;
    Ok(TripResponseBody {
        id: trip.id.to_string(),
        user_id: trip.user_id.to_string(),
        trip_name: attributes.trip_name,
        departure_date: attributes.departure_date.format("%Y-%m-%d").to_string(),
        categories: attributes.categories,
        overview: attributes.overview,
        about_you: attributes.about_you,
        accommodation_type: attributes.accommodation_type,
        accommodation_details: attributes.accommodation_details,
        inclusions: attributes.inclusions,
        exclusions: attributes.exclusions,
        special_features: attributes.special_features,
        min_trip_mates: attributes.min_trip_mates,
        max_trip_mates: attributes.max_trip_mates,
        currency: attributes.currency,
        buffer_percentage: money_to_f64(attributes.buffer_percentage, "bufferPercentage")?,
        your_fee: money_to_f64(attributes.your_fee, "yourFee")?,
        total_cost: money_to_f64(trip.total_cost, "totalCost")?,
        status: trip.status.to_string(),
        created_at: trip.created_at.to_rfc3339(),
        updated_at: trip.updated_at.to_rfc3339(),
    })
}

fn stop_to_body(stop: TripStop) -> TripStopResponseBody {
    TripStopResponseBody {
        sequence_number: stop.sequence_number,
        location: stop.location,
        nights: stop.nights,
        description: stop.description,
        activities: stop.activities,
    }
}

fn cost_item_to_body(item: CostItem) -> ApiResult<CostItemResponseBody> {
    Ok(CostItemResponseBody {
        category: item.category.to_string(),
        name: item.name,
        amount: money_to_f64(item.amount, "costItems.amount")?,
    })
}

fn detail_to_body(detail: TripDetail) -> ApiResult<TripDetailResponseBody> {
    Ok(TripDetailResponseBody {
        trip: trip_to_body(detail.trip)?,
        stops: detail.stops.into_iter().map(stop_to_body).collect(),
        cost_items: detail
            .cost_items
            .into_iter()
            .map(cost_item_to_body)
            .collect::<ApiResult<Vec<_>>>()?,
    })
}

fn warning_to_body(warning: SubmissionWarning) -> SubmissionWarningBody {
    match warning {
        SubmissionWarning::StopsNotSaved(message) => SubmissionWarningBody {
            stage: "stops".to_owned(),
            message,
        },
        SubmissionWarning::CostItemsNotSaved(message) => SubmissionWarningBody {
            stage: "cost_items".to_owned(),
            message,
        },
    }
}

fn parse_cost_items(items: Vec<CostItemBody>) -> ApiResult<Vec<CostItem>> {
    let field = FieldName::new("costItems");
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Ok(CostItem {
                category: parse_category(item.category, field, index)?,
                name: item.name,
                amount: parse_amount_at(item.amount, field, index)?,
            })
        })
        .collect()
}

fn parse_submission_body(
    body: SubmitTripRequestBody,
) -> ApiResult<crate::domain::TripSubmission> {
    let departure_date = parse_date(body.departure_date, FieldName::new("departureDate"))?;
    let buffer_percentage = parse_amount(body.buffer_percentage, FieldName::new("bufferPercentage"))?;
    let your_fee = parse_amount(body.your_fee, FieldName::new("yourFee"))?;
    let cost_items = parse_cost_items(body.cost_items)?;

    let stops = body
        .stops
        .into_iter()
        .map(|stop| TripStopDraft {
            location: stop.location,
            nights: stop.nights,
            description: stop.description,
            activities: stop.activities,
        })
        .collect();

    TripSubmissionBuilder::new()
        .basics(BasicsStep {
            trip_name: body.trip_name,
            departure_date: Some(departure_date),
            categories: body.categories,
        })
        .details(DetailsStep {
            overview: body.overview.unwrap_or_default(),
            about_you: body.about_you.unwrap_or_default(),
            accommodation_type: body.accommodation_type.unwrap_or_default(),
            accommodation_details: body.accommodation_details.unwrap_or_default(),
            inclusions: body.inclusions,
            exclusions: body.exclusions,
            special_features: body.special_features,
            min_trip_mates: body.min_trip_mates,
            max_trip_mates: body.max_trip_mates,
        })
        .itinerary(stops)
        .costs(CostStep {
            currency: body.currency.unwrap_or_else(|| "USD".to_owned()),
            cost_items,
            buffer_percentage,
            your_fee,
        })
        .build()
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// Submit a wizard trip for the authenticated user.
///
/// The trip is created as published; stop or cost-item persistence problems
/// come back as warnings rather than failing the whole submission.
#[utoipa::path(
    post,
    path = "/api/v1/trips",
    request_body = SubmitTripRequestBody,
    responses(
        (status = 200, description = "Trip created", body = SubmitTripResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "submitTrip",
    security(("SessionCookie" = []))
)]
#[post("/trips")]
pub async fn submit_trip(
    state: web::Data<HttpState>,
    session: OrganiserSession,
    payload: web::Json<SubmitTripRequestBody>,
) -> ApiResult<web::Json<SubmitTripResponseBody>> {
    let user_id = session.require_organiser()?;
    let submission = parse_submission_body(payload.into_inner())?;

    let response = state
        .submission
        .submit(SubmitTripRequest {
            user_id,
            submission,
        })
        .await?;

    Ok(web::Json(SubmitTripResponseBody {
        trip: trip_to_body(response.trip)?,
        warnings: response.warnings.into_iter().map(warning_to_body).collect(),
    }))
}

/// List published trips, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/trips",
    responses(
        (status = 200, description = "Published trips", body = [TripResponseBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "listPublishedTrips",
    security([])
)]
#[get("/trips")]
pub async fn list_published_trips(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<TripResponseBody>>> {
    let trips = state.trips.list_published().await?;
    let bodies = trips
        .into_iter()
        .map(trip_to_body)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(web::Json(bodies))
}

/// Fetch a trip with its stops and cost items.
#[utoipa::path(
    get,
    path = "/api/v1/trips/{trip_id}",
    params(
        ("trip_id" = String, Path, format = "uuid", description = "Trip identifier")
    ),
    responses(
        (status = 200, description = "Trip detail", body = TripDetailResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "getTrip",
    security([])
)]
#[get("/trips/{trip_id}")]
pub async fn get_trip(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TripDetailResponseBody>> {
    let trip_id = parse_uuid(path.into_inner(), FieldName::new("tripId"))?;
    let detail = state.trips.get_trip(trip_id).await?;
    Ok(web::Json(detail_to_body(detail)?))
}

/// List every trip the authenticated user organises, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/me/trips",
    responses(
        (status = 200, description = "The user's trips", body = [TripResponseBody]),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "listMyTrips",
    security(("SessionCookie" = []))
)]
#[get("/me/trips")]
pub async fn list_my_trips(
    state: web::Data<HttpState>,
    session: OrganiserSession,
) -> ApiResult<web::Json<Vec<TripResponseBody>>> {
    let user_id = session.require_organiser()?;
    let trips = state.trips.get_user_trips(&user_id).await?;
    let bodies = trips
        .into_iter()
        .map(trip_to_body)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(web::Json(bodies))
}

/// Overwrite a trip's status.
///
/// Any status may replace any other; no ordering is enforced between
/// states.
#[utoipa::path(
    put,
    path = "/api/v1/trips/{trip_id}/status",
    params(
        ("trip_id" = String, Path, format = "uuid", description = "Trip identifier")
    ),
    request_body = UpdateTripStatusRequestBody,
    responses(
        (status = 204, description = "Status updated"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "updateTripStatus",
    security(("SessionCookie" = []))
)]
#[put("/trips/{trip_id}/status")]
pub async fn update_trip_status(
    state: web::Data<HttpState>,
    session: OrganiserSession,
    path: web::Path<String>,
    payload: web::Json<UpdateTripStatusRequestBody>,
) -> ApiResult<actix_web::HttpResponse> {
    session.require_organiser()?;
    let trip_id = parse_uuid(path.into_inner(), FieldName::new("tripId"))?;
    let status = parse_status(payload.into_inner().status, FieldName::new("status"))?;

    state.trips.update_status(trip_id, status).await?;
    Ok(actix_web::HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "trips_tests.rs"]
mod tests;
