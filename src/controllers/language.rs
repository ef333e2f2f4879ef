use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    domain::i18n::Locale,
    error::{AppError, AppResult, FieldViolation},
    infrastructure::http::{
        extract::AppQuery,
        locale::{LANG_COOKIE, LANG_PARAM},
    },
};

pub const INVALID_LANGUAGE: &str = "Unsupported language";

#[derive(Debug, Deserialize)]
pub struct ChangeLanguageParams {
    pub lang: Option<String>,
}

/// GET /internal/changeLanguage?lang=xx - Remember the language in a cookie
/// and send the browser back to the root page
pub async fn change_language(
    AppQuery(params): AppQuery<ChangeLanguageParams>,
) -> AppResult<Response> {
    let locale = params
        .lang
        .as_deref()
        .and_then(Locale::parse)
        .ok_or_else(|| AppError::Validation(vec![FieldViolation::new(LANG_PARAM, INVALID_LANGUAGE)]))?;

    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", LANG_COOKIE, locale);
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Internal(format!("invalid language cookie: {}", e)))?;

    tracing::debug!(locale = %locale, "Language changed");

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}
