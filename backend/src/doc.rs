//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API: the friend feed and ping endpoints, the session endpoints, the
//! health probes, and the session cookie security scheme. The generated
//! document backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::friends::{
    FriendCard, FriendFeedData, FriendFeedResponse, LastPlaceCard, PingResponse,
};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "UniMap backend API",
        description = "HTTP interface for the friend location feed, friend pings, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::friends::list_friends,
        crate::inbound::http::friends::ping_friend,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        FriendFeedResponse,
        FriendFeedData,
        FriendCard,
        LastPlaceCard,
        PingResponse,
        LoginRequest,
    )),
    tags(
        (name = "friends", description = "Friend feed and ping operations"),
        (name = "auth", description = "Session login and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_registers_friend_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/friends"));
        assert!(paths.contains_key("/api/v1/friends/{user_id}/ping"));
    }

    #[test]
    fn openapi_registers_health_probes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/health/ready"));
        assert!(paths.contains_key("/health/live"));
    }

    #[test]
    fn openapi_declares_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
