//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{FriendFeedService, PingService};
use crate::inbound::http::auth::{login, logout};
use crate::inbound::http::friends::{list_friends, ping_friend};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::middleware::RequestTrace;
use crate::outbound::cache::EpochViewCache;
use crate::outbound::persistence::{
    DieselActivityRepository, DieselFriendshipRepository, DieselProfileRepository,
};

/// Build the HTTP state from the configuration.
///
/// Uses Diesel-backed adapters when a pool is available, otherwise fixtures.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let friendships = Arc::new(DieselFriendshipRepository::new(pool.clone()));
            let activities = Arc::new(DieselActivityRepository::new(pool.clone()));
            let profiles = Arc::new(DieselProfileRepository::new(pool.clone()));
            let view_cache = Arc::new(EpochViewCache::new());

            HttpState::new(
                Arc::new(FriendFeedService::new(friendships.clone(), activities)),
                Arc::new(PingService::new(friendships, profiles, view_cache)),
            )
        }
        None => HttpState::default(),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(login)
        .service(logout)
        .service(list_friends)
        .service(ping_friend);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestTrace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn test_dependencies() -> AppDependencies {
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(HttpState::default()),
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }

    #[actix_web::test]
    async fn liveness_probe_is_wired() {
        let app = test::init_service(build_app(test_dependencies())).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn friends_route_requires_a_session() {
        let app = test::init_service(build_app(test_dependencies())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/friends").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn fixture_state_serves_an_empty_feed_without_a_database() {
        let config = ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("socket address"),
        );
        let mut deps = test_dependencies();
        deps.http_state = web::Data::new(build_http_state(&config));
        let app = test::init_service(build_app(deps)).await;

        let login_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(serde_json::json!({
                    "userId": "3fa85f64-5717-4562-b3fc-2c963f66afa6"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(login_res.status(), StatusCode::OK);
        let cookie = login_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned();

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/friends")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["located"], serde_json::json!([]));
        assert_eq!(body["data"]["unlocated"], serde_json::json!([]));
    }
}
