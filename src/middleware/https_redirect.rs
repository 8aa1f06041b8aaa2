//! Middleware redirecting plain-HTTP requests to encrypted transport.
//!
//! Outside development the service refuses to answer over plain HTTP and
//! points clients at the `https` equivalent of the URL they asked for.
//! The scheme is taken from the connection info, so deployments behind a
//! TLS-terminating proxy are recognised via `Forwarded` /
//! `X-Forwarded-Proto`.
//!
//! Wrap it in [`actix_web::middleware::Condition`] to toggle it per
//! environment.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::HttpResponse;
use futures_util::future::{LocalBoxFuture, Ready, ready};

/// Redirect middleware issuing `307 Temporary Redirect` for non-`https`
/// requests.
///
/// 307 keeps the method and body intact, so a redirected `POST` stays a
/// `POST`, matching how mainstream frameworks force encrypted transport.
///
/// # Examples
/// ```
/// use actix_web::{App, middleware::Condition};
/// use cretaceous_api::middleware::HttpsRedirect;
///
/// let enforce = true;
/// let app = App::new().wrap(Condition::new(enforce, HttpsRedirect));
/// ```
#[derive(Clone)]
pub struct HttpsRedirect;

impl<S, B> Transform<S, ServiceRequest> for HttpsRedirect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = HttpsRedirectMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HttpsRedirectMiddleware { service }))
    }
}

/// Service wrapper produced by [`HttpsRedirect`].
pub struct HttpsRedirectMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for HttpsRedirectMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let info = req.connection_info().clone();
        if info.scheme() == "https" {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let path_and_query = req
            .uri()
            .path_and_query()
            .map_or("/", |pq| pq.as_str());
        let location = format!("https://{}{}", info.host(), path_and_query);
        let response = HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, location))
            .finish();
        let (request, _) = req.into_parts();
        Box::pin(ready(Ok(
            ServiceResponse::new(request, response).map_into_right_body()
        )))
    }
}
