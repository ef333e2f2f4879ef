use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::locale::RequestLocale;
use crate::domain::problem::{
    translator::API_DEFAULT_REQUEST_FAILED_MESSAGE, ErrorTranslator, ProblemReport,
    APPLICATION_PROBLEM_JSON,
};
use crate::error::{AppError, CapturedFault};

/// Boundary between handlers and the transport: any response carrying a
/// `CapturedFault` is replaced by the translated problem report. Headers set
/// by inner layers (cookies, ids) are kept; the body and status are not.
pub async fn problem_boundary(
    State(translator): State<Arc<ErrorTranslator>>,
    request: Request,
    next: Next,
) -> Response {
    let locale = request
        .extensions()
        .get::<RequestLocale>()
        .map(|RequestLocale(locale)| locale.clone())
        .unwrap_or_else(|| translator.messages().default_locale().clone());
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let Some(CapturedFault(fault)) = response.extensions_mut().remove::<CapturedFault>() else {
        return response;
    };

    let report = translator.translate(&fault, &locale).with_instance(path);
    let mut problem = problem_response(report);

    for (name, value) in response.headers() {
        if *name != header::CONTENT_TYPE && *name != header::CONTENT_LENGTH {
            problem.headers_mut().append(name.clone(), value.clone());
        }
    }

    problem
}

pub fn problem_response(report: ProblemReport) -> Response {
    (
        report.status_code(),
        [(header::CONTENT_TYPE, APPLICATION_PROBLEM_JSON)],
        Json(report),
    )
        .into_response()
}

/// Panics inside handlers become unclassified faults so they reach the
/// boundary like any other error.
pub fn panic_to_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());

    AppError::Internal(format!("handler panicked: {}", message)).into_response()
}

/// Unknown routes answer with a not-found problem instead of an empty 404
pub async fn route_not_found(request: Request) -> AppError {
    AppError::NotFound(format!("no route for {} {}", request.method(), request.uri().path()))
}

/// Known path, unsupported method. Attached to every route so the 405
/// goes through the boundary like any other fault.
pub async fn method_not_allowed(request: Request) -> AppError {
    AppError::request(
        StatusCode::METHOD_NOT_ALLOWED,
        API_DEFAULT_REQUEST_FAILED_MESSAGE,
        format!("{} not allowed on {}", request.method(), request.uri().path()),
    )
}
