mod common;

use actix_web::test;
use serial_test::serial;

#[actix_rt::test]
#[serial]
async fn availability_requires_both_dates() {
    let app = test::init_service(common::availability_app("http://127.0.0.1:1")).await;

    let req = test::TestRequest::get()
        .uri("/api/availability?checkIn=2024-06-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MISSING_DATES");
}

#[actix_rt::test]
#[serial]
async fn availability_rejects_an_inverted_range() {
    let app = test::init_service(common::availability_app("http://127.0.0.1:1")).await;

    let req = test::TestRequest::get()
        .uri("/api/availability?checkIn=2024-06-04&checkOut=2024-06-01&adults=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_RANGE");
}

#[actix_rt::test]
#[serial]
async fn availability_surfaces_collaborator_outage_as_bad_gateway() {
    // Unroutable collaborator: the proxy reports the outage, not a 500.
    let app = test::init_service(common::availability_app("http://127.0.0.1:1")).await;

    let req = test::TestRequest::get()
        .uri("/api/availability?checkIn=2024-06-01&checkOut=2024-06-04&adults=2&children=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AVAILABILITY_UNAVAILABLE");
}
