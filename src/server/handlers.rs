//! Request handlers for the dispatch server.

use super::AppState;
use crate::domain::FieldErrors;
use crate::error::DispatchError;
use crate::metrics::MetricsSummary;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

/// Message returned when both emails were sent.
pub const SENT_MESSAGE: &str = "Emails enviados correctamente";

#[derive(Debug, Serialize)]
struct SentBody {
    success: bool,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    version: &'static str,
    uptime: u64,
    metrics: MetricsSummary,
}

/// The dispatch endpoint.
///
/// `OPTIONS` answers the CORS preflight with an empty 200. Every other
/// method is treated as a send. A body that cannot be read (for example one
/// over the size limit) gets the same JSON error shape as any other failure.
pub async fn send_contact_email(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Unreadable request body: {}", rejection.body_text());
            state.dispatch.metrics().record_dispatch_rejected();
            let body = ErrorBody {
                success: false,
                error: rejection.body_text(),
                fields: None,
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    match state.dispatch.handle(&body).await {
        Ok(_) => (
            StatusCode::OK,
            Json(SentBody {
                success: true,
                message: SENT_MESSAGE,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: DispatchError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = match error {
        DispatchError::InvalidSubmission(fields) => ErrorBody {
            success: false,
            error: "Invalid submission".to_string(),
            fields: Some(fields),
        },
        other => ErrorBody {
            success: false,
            error: other.to_string(),
            fields: None,
        },
    };

    (status, Json(body)).into_response()
}

/// Liveness check with uptime and dispatch counters.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthBody {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started_at.elapsed().as_secs(),
        metrics: state.dispatch.metrics().summary(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
