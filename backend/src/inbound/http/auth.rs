//! Session establishment handlers.
//!
//! Identity management is owned by an external provider; this backend only
//! needs a session cookie carrying the authenticated user id. The login
//! handler below is the dev-grade bridge for that contract: it accepts a
//! user id, validates its shape, and persists it in the cookie session.
//!
//! ```text
//! POST /api/v1/login  {"userId":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The authenticated identity's user id.
    pub user_id: String,
}

/// Establish a session for the given user id.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid user id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = UserId::new(&payload.user_id)
        .map_err(|err| Error::invalid_request(format!("invalid user id: {err}")))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::Ok().finish())
}

/// Drop the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Session dropped")
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .service(login)
            .service(logout)
    }

    #[actix_web::test]
    async fn login_sets_a_session_cookie() {
        let app = test::init_service(test_app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/login")
                .set_json(LoginRequest {
                    user_id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(
            res.response()
                .cookies()
                .any(|cookie| cookie.name() == "session")
        );
    }

    #[actix_web::test]
    async fn login_rejects_a_malformed_user_id() {
        let app = test::init_service(test_app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/login")
                .set_json(LoginRequest {
                    user_id: "not-a-uuid".to_owned(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn logout_always_succeeds() {
        let app = test::init_service(test_app()).await;
        let res =
            test::call_service(&app, test::TestRequest::post().uri("/logout").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
