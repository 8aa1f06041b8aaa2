//! Behavioural tests for environment-driven transport enforcement.

mod support;

use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};

use cretaceous_api::server::build_app;

#[actix_web::test]
async fn production_redirects_plain_http_to_https() {
    let app = test::init_service(build_app(support::production_deps())).await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri("/health/live")
            .insert_header((header::HOST, "api.park.example"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("https://api.park.example/health/live")
    );
}

#[actix_web::test]
async fn production_serves_forwarded_https_traffic() {
    let app = test::init_service(build_app(support::production_deps())).await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri("/health/live")
            .insert_header(("X-Forwarded-Proto", "https"))
            .to_request(),
    )
    .await;

    assert!(res.status().is_success());
}

#[actix_web::test]
async fn development_serves_plain_http() {
    let app = test::init_service(build_app(support::development_deps())).await;

    let res =
        test::call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
    assert!(res.status().is_success());
}
