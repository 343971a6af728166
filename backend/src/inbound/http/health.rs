//! Liveness and readiness probes.
//!
//! The server moves through three phases: `Starting` while trip storage is
//! being wired, `Serving` once the listener is bound, and `Draining` ahead
//! of shutdown. Readiness reports 200 only while serving, so load balancers
//! hold traffic during startup and drain. Liveness keeps reporting 200 until
//! the drain begins, so orchestrators restart a hung process but leave a
//! draining one alone.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerPhase {
    /// Dependencies are still being wired.
    Starting,
    /// Bound and handling traffic.
    Serving,
    /// Shutting down; new traffic should go elsewhere.
    Draining,
}

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Shared probe state.
///
/// Phase changes are one-way in practice (starting, then serving, then
/// draining) but nothing enforces the ordering.
#[derive(Default)]
pub struct ServerHealth {
    phase: AtomicU8,
}

impl ServerHealth {
    /// New state in the `Starting` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip to `Serving` once the listener is bound.
    pub fn mark_serving(&self) {
        self.phase.store(SERVING, Ordering::Release);
    }

    /// Flip to `Draining` ahead of graceful shutdown.
    pub fn mark_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ServerPhase {
        match self.phase.load(Ordering::Acquire) {
            SERVING => ServerPhase::Serving,
            DRAINING => ServerPhase::Draining,
            _ => ServerPhase::Starting,
        }
    }
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe. Returns 200 only while the server is in the `Serving`
/// phase; 503 during startup and drain.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(health: web::Data<ServerHealth>) -> HttpResponse {
    probe_response(health.phase() == ServerPhase::Serving)
}

/// Liveness probe. Returns 200 until [`ServerHealth::mark_draining`] is
/// called, then 503 so the drain is visible before the listener closes.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(health: web::Data<ServerHealth>) -> HttpResponse {
    probe_response(health.phase() != ServerPhase::Draining)
}
