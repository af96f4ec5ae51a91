// HTTP response utilities for JSON envelopes and CSV downloads
use crate::domain::csv_export::{CsvExport, CSV_CONTENT_TYPE};
use crate::domain::error::DashboardError;
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;

/// `{ success, data | error, seq }`. `seq` echoes the caller's request number
/// so a page can drop responses that arrive after a newer one.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

pub fn status_for(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::Network(_) => StatusCode::BAD_GATEWAY,
        DashboardError::Validation(_) => StatusCode::BAD_REQUEST,
        DashboardError::DataUnavailable(_) => StatusCode::NOT_FOUND,
        DashboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn json_response<T: Serialize>(data: T, seq: Option<u64>) -> Response<Body> {
    Json(Envelope {
        success: true,
        data: Some(data),
        error: None,
        seq,
    })
    .into_response()
}

/// Turn a failure into a transient notice for the page
pub fn error_response(error: DashboardError, seq: Option<u64>) -> Response<Body> {
    let status = status_for(&error);
    match &error {
        DashboardError::Network(_) | DashboardError::Internal(_) => {
            tracing::error!("Request failed: {}", error)
        }
        _ => tracing::warn!("Request rejected: {}", error),
    }

    let body = Envelope::<()> {
        success: false,
        data: None,
        error: Some(error.to_string()),
        seq,
    };
    (status, Json(body)).into_response()
}

pub fn json_result<T: Serialize>(result: Result<T, DashboardError>, seq: Option<u64>) -> Response<Body> {
    match result {
        Ok(data) => json_response(data, seq),
        Err(e) => error_response(e, seq),
    }
}

/// CSV attachment, or 204 when there is nothing to download
pub fn csv_response(export: Option<CsvExport>) -> Response<Body> {
    let Some(export) = export else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    let disposition = match HeaderValue::from_str(&disposition) {
        Ok(value) => value,
        Err(e) => {
            return error_response(
                DashboardError::Internal(format!("bad export filename: {}", e)),
                None,
            );
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, CSV_CONTENT_TYPE)
        .header(header::CONTENT_DISPOSITION, disposition)
        .header(header::CONTENT_LENGTH, export.body.len())
        .body(Body::from(export.body))
        .unwrap_or_else(|e| {
            error_response(DashboardError::Internal(format!("response build error: {}", e)), None)
        })
}
