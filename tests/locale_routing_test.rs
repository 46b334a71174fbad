use actix_web::{http::header, test, web, App};

use minamiya_api::middleware::locale::LocaleRedirect;
use minamiya_api::routes;
use minamiya_api::services::i18n::Translations;

fn site_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            actix_web::body::EitherBody<actix_web::body::BoxBody>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(LocaleRedirect)
        .app_data(web::Data::new(Translations::load()))
        .route("/health", web::get().to(|| async { "OK" }))
        .service(web::scope("/{locale}").route("", web::get().to(routes::pages::welcome)))
}

#[actix_rt::test]
async fn root_redirects_to_the_default_locale() {
    let app = test::init_service(site_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/ja"
    );
}

#[actix_rt::test]
async fn unprefixed_paths_keep_their_suffix() {
    let app = test::init_service(site_app()).await;

    let req = test::TestRequest::get().uri("/rooms").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/ja/rooms"
    );
}

#[actix_rt::test]
async fn recognized_locales_are_served_directly() {
    let app = test::init_service(site_app()).await;

    let req = test::TestRequest::get().uri("/en").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["locale"], "en");
    assert_eq!(body["siteName"], "Minamiya");
}

#[actix_rt::test]
async fn health_is_not_redirected() {
    let app = test::init_service(site_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
