//! Middleware attaching a request-scoped identifier to every request.
//!
//! Each incoming request receives a UUID request id, reused from the
//! `x-request-id` header when the client sends a valid UUID. The id is stored
//! in the request extensions, wrapped around the handler in a tracing span,
//! and echoed back on the response so clients can quote it in bug reports.

use std::future::Future;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info_span};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identifier correlating log lines and responses for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Read the request id attached by [`RequestTrace`], if any.
    pub fn from_request(req: &actix_web::HttpRequest) -> Option<Self> {
        req.extensions().get::<Self>().copied()
    }

    fn from_header(req: &ServiceRequest) -> Option<Self> {
        let raw = req.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware attaching a request id and a per-request tracing span.
#[derive(Clone, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestTrace`].
pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = RequestId::from_header(&req).unwrap_or_else(RequestId::generate);
        req.extensions_mut().insert(request_id);

        let span = info_span!(
            "http_request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.path(),
        );
        let header_value = request_id.to_string();
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&header_value) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                    }
                    Err(err) => {
                        error!(%err, request_id = %header_value, "failed to encode request id header");
                    }
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpRequest, HttpResponse, test, web};

    #[actix_web::test]
    async fn adds_request_id_header() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        let header = res
            .headers()
            .get("x-request-id")
            .expect("request id header")
            .to_str()
            .expect("header is ascii");
        Uuid::parse_str(header).expect("header is a UUID");
    }

    #[actix_web::test]
    async fn reuses_valid_client_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let supplied = Uuid::nil().to_string();
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("x-request-id", supplied.as_str()))
            .to_request();
        let res = test::call_service(&app, req).await;

        let header = res
            .headers()
            .get("x-request-id")
            .expect("request id header")
            .to_str()
            .expect("header is ascii");
        assert_eq!(header, supplied);
    }

    #[actix_web::test]
    async fn replaces_malformed_client_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("x-request-id", "not-a-uuid"))
            .to_request();
        let res = test::call_service(&app, req).await;

        let header = res
            .headers()
            .get("x-request-id")
            .expect("request id header")
            .to_str()
            .expect("header is ascii");
        Uuid::parse_str(header).expect("header is a fresh UUID");
        assert_ne!(header, "not-a-uuid");
    }

    #[actix_web::test]
    async fn exposes_request_id_to_handlers() {
        async fn echo(req: HttpRequest) -> HttpResponse {
            match RequestId::from_request(&req) {
                Some(id) => HttpResponse::Ok().body(id.to_string()),
                None => HttpResponse::InternalServerError().finish(),
            }
        }

        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        let header = res
            .headers()
            .get("x-request-id")
            .expect("request id header")
            .to_str()
            .expect("header is ascii")
            .to_owned();

        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("utf8 body");
        assert_eq!(body, header);
    }
}
