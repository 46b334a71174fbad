use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::services::i18n::{Locale, DEFAULT_LOCALE};

/// Redirects page requests without a recognized locale prefix to the default
/// locale. API and health paths are never redirected.
pub struct LocaleRedirect;

impl<S, B> Transform<S, ServiceRequest> for LocaleRedirect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = LocaleRedirectService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleRedirectService { service }))
    }
}

pub struct LocaleRedirectService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for LocaleRedirectService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();

        if needs_locale_prefix(&path) {
            let suffix = if path == "/" { "" } else { path.as_str() };
            let target = format!("/{}{}", DEFAULT_LOCALE.as_str(), suffix);

            let (request, _) = req.into_parts();
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, target))
                .finish()
                .map_into_right_body();

            return Box::pin(ready(Ok(ServiceResponse::new(request, response))));
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
    }
}

fn needs_locale_prefix(path: &str) -> bool {
    if path.starts_with("/api") || path.starts_with("/health") {
        return false;
    }
    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    Locale::from_prefix(first_segment).is_none()
}
