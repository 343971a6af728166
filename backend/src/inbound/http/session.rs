//! Session-backed organiser identity for HTTP handlers.
//!
//! The cookie session stores exactly one value: the id of the signed-in
//! organiser. [`OrganiserSession`] wraps the raw Actix session so handlers
//! work in terms of [`UserId`] instead of string keys, and a stored value
//! that no longer parses is discarded rather than trusted.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const ORGANISER_ID_KEY: &str = "organiser_id";

/// The signed-in organiser, read from and written to the cookie session.
#[derive(Clone)]
pub struct OrganiserSession(Session);

impl OrganiserSession {
    /// Wrap a raw Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record the organiser in the session after a successful login.
    pub fn sign_in(&self, organiser: &UserId) -> Result<(), Error> {
        self.0
            .insert(ORGANISER_ID_KEY, organiser.as_ref())
            .map_err(|error| Error::internal(format!("session write failed: {error}")))
    }

    /// The signed-in organiser, or `None` for an anonymous request.
    ///
    /// A stored id that fails to parse as a UUID is purged and the request
    /// is treated as anonymous.
    pub fn organiser(&self) -> Result<Option<UserId>, Error> {
        let stored = self
            .0
            .get::<String>(ORGANISER_ID_KEY)
            .map_err(|error| Error::internal(format!("session read failed: {error}")))?;
        let Some(raw) = stored else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(organiser) => Ok(Some(organiser)),
            Err(error) => {
                warn!(%error, "discarding malformed organiser id from session");
                self.0.remove(ORGANISER_ID_KEY);
                Ok(None)
            }
        }
    }

    /// The signed-in organiser, or `401 Unauthorized` when absent.
    pub fn require_organiser(&self) -> Result<UserId, Error> {
        self.organiser()?
            .ok_or_else(|| Error::unauthorized("sign in to manage trips"))
    }
}

impl FromRequest for OrganiserSession {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        Box::pin(async move { session.await.map(Self::new) })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_session::Session;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, cookie::Cookie, test, web};

    use super::*;
    use crate::inbound::http::test_utils::test_session_middleware;

    const ORGANISER: &str = "9b2e7e1c-64d5-4b0a-8a3e-0f1d2c3b4a59";

    async fn sign_in(session: OrganiserSession) -> Result<HttpResponse, Error> {
        let organiser =
            UserId::new(ORGANISER).map_err(|error| Error::internal(error.to_string()))?;
        session.sign_in(&organiser)?;
        Ok(HttpResponse::NoContent().finish())
    }

    async fn whoami(session: OrganiserSession) -> Result<HttpResponse, Error> {
        let organiser = session.require_organiser()?;
        Ok(HttpResponse::Ok().body(organiser.to_string()))
    }

    async fn corrupt(session: Session) -> HttpResponse {
        if session.insert(ORGANISER_ID_KEY, "definitely-not-a-uuid").is_err() {
            return HttpResponse::InternalServerError().finish();
        }
        HttpResponse::NoContent().finish()
    }

    fn session_cookie(res: &actix_web::dev::ServiceResponse) -> Cookie<'static> {
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie issued")
            .into_owned()
    }

    #[actix_web::test]
    async fn sign_in_then_require_round_trips_the_organiser() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/sign-in", web::post().to(sign_in))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let signed_in =
            test::call_service(&app, test::TestRequest::post().uri("/sign-in").to_request()).await;
        assert_eq!(signed_in.status(), StatusCode::NO_CONTENT);
        let cookie = session_cookie(&signed_in);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, ORGANISER);
    }

    #[actix_web::test]
    async fn anonymous_request_is_unauthorised() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_stored_id_counts_as_signed_out() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/corrupt", web::post().to(corrupt))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let corrupted =
            test::call_service(&app, test::TestRequest::post().uri("/corrupt").to_request()).await;
        let cookie = session_cookie(&corrupted);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
