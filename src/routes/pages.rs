use actix_web::{web, HttpResponse, Responder};

use crate::services::i18n::{Locale, Translations, Translator, DEFAULT_LOCALE};

/// Localized landing payload for a locale-prefixed path. The prefix has
/// already been normalized by the redirect middleware.
pub async fn welcome(
    translations: web::Data<Translations>,
    path: web::Path<String>,
) -> impl Responder {
    let locale = Locale::from_prefix(&path.into_inner()).unwrap_or(DEFAULT_LOCALE);

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale.as_str(),
        "siteName": translations.resolve(locale, "common.siteName"),
        "title": translations.resolve(locale, "home.heroTitle"),
        "subtitle": translations.resolve(locale, "home.heroSubtitle"),
    }))
}
