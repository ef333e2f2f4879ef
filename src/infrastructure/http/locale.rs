use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};

use crate::domain::i18n::Locale;

pub const LANG_PARAM: &str = "lang";
pub const LANG_COOKIE: &str = "lang";

/// Locale chosen for the current request, available to handlers and the
/// problem boundary as a request extension
#[derive(Debug, Clone, PartialEq)]
pub struct RequestLocale(pub Locale);

/// Resolve the request locale: `lang` query parameter, then `lang` cookie,
/// then `Accept-Language`, then the configured default. Invalid values at
/// any step are ignored.
pub async fn locale_middleware(
    State(default_locale): State<Locale>,
    mut request: Request,
    next: Next,
) -> Response {
    let locale = resolve_locale(request.uri(), request.headers(), &default_locale);
    request.extensions_mut().insert(RequestLocale(locale));
    next.run(request).await
}

pub fn resolve_locale(uri: &Uri, headers: &HeaderMap, default_locale: &Locale) -> Locale {
    query_locale(uri)
        .or_else(|| cookie_locale(headers))
        .or_else(|| {
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .and_then(Locale::from_accept_language)
        })
        .unwrap_or_else(|| default_locale.clone())
}

fn query_locale(uri: &Uri) -> Option<Locale> {
    uri.query()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == LANG_PARAM)
        .and_then(|(_, value)| Locale::parse(value))
}

fn cookie_locale(headers: &HeaderMap) -> Option<Locale> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == LANG_COOKIE)
        .and_then(|(_, value)| Locale::parse(value))
}
