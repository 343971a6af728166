//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use tripmates_backend::Trace;
#[cfg(debug_assertions)]
use tripmates_backend::doc::ApiDoc;
use tripmates_backend::domain::{TripQueryServiceImpl, TripSubmissionServiceImpl};
use tripmates_backend::inbound::http::auth::login;
use tripmates_backend::inbound::http::health::{ServerHealth, live, ready};
use tripmates_backend::inbound::http::state::HttpState;
use tripmates_backend::inbound::http::trips::{
    get_trip, list_my_trips, list_published_trips, submit_trip, update_trip_status,
};
use tripmates_backend::outbound::persistence::{DbPool, DieselTripRepository, PoolSettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let state = build_state().await?;
    let state = web::Data::new(state);

    let health = web::Data::new(ServerHealth::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health = health.clone();
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let server = HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        let api = web::scope("/api/v1")
            .wrap(session)
            .service(login)
            .service(submit_trip)
            .service(list_published_trips)
            .service(get_trip)
            .service(list_my_trips)
            .service(update_trip_status);

        let app = App::new()
            .app_data(server_health.clone())
            .app_data(state.clone())
            .wrap(Trace)
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?;

    health.mark_serving();
    server.run().await
}

/// Build HTTP state from the environment.
///
/// With `DATABASE_URL` set the trip ports are backed by PostgreSQL;
/// otherwise in-memory fixtures serve requests, which suits local
/// development and smoke tests.
async fn build_state() -> std::io::Result<HttpState> {
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::connect(PoolSettings::new(url))
                .await
                .map_err(|e| std::io::Error::other(format!("failed to create pool: {e}")))?;
            let repository = Arc::new(DieselTripRepository::new(pool));
            info!("trip storage backed by PostgreSQL");
            Ok(HttpState::new(
                Arc::new(TripSubmissionServiceImpl::new(Arc::clone(&repository))),
                Arc::new(TripQueryServiceImpl::new(repository)),
            ))
        }
        Err(_) => {
            warn!("DATABASE_URL not set; serving fixture data");
            Ok(HttpState::fixture())
        }
    }
}
