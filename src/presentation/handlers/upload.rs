use std::io;

use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Extension, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::domain::{AnalysisReport, Classification, UploadValidationError, UploadedFile};
use crate::infrastructure::observability::{RequestId, preview_transcript};
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ClassificationResponse {
    pub predicted_label: String,
    pub probability: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub transcription: String,
    pub classification: Option<ClassificationResponse>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Classification> for ClassificationResponse {
    fn from(classification: &Classification) -> Self {
        Self {
            predicted_label: classification.label.as_str().to_string(),
            probability: classification.probability.map(f64::from),
        }
    }
}

impl From<&AnalysisReport> for UploadResponse {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            transcription: report.transcription_text(),
            classification: report.classification.as_ref().map(ClassificationResponse::from),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn validation_error(error: UploadValidationError) -> Response {
    tracing::warn!(error = %error, "Upload rejected");
    error_response(StatusCode::BAD_REQUEST, error.to_string())
}

#[tracing::instrument(skip_all, fields(request_id = %request_id.0))]
pub async fn upload_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => return validation_error(UploadValidationError::MissingFilePart),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        // Only a part named `file` that carries a filename counts as the upload.
        if field.name() != Some(FILE_FIELD) || field.file_name().is_none() {
            continue;
        }

        return process_file_field(&state, field).await;
    }
}

/// `GET /upload` never carries a file.
pub async fn upload_without_file_handler() -> Response {
    validation_error(UploadValidationError::MissingFilePart)
}

async fn process_file_field(state: &AppState, field: Field<'_>) -> Response {
    let filename = field.file_name().unwrap_or_default().to_string();

    let upload = match UploadedFile::accept(&filename) {
        Ok(u) => u,
        Err(e) => return validation_error(e),
    };

    tracing::debug!(
        upload_id = %upload.id.as_uuid(),
        filename = %upload.filename,
        extension = %upload.extension,
        "Processing audio upload"
    );

    let stream = field.map_err(io::Error::other).boxed();

    match state.analysis_service.analyze_upload(&upload, stream).await {
        Ok(report) => {
            tracing::info!(
                upload_id = %upload.id.as_uuid(),
                status = %report.transcription.status(),
                transcription = %preview_transcript(&report.transcription_text()),
                label = report.classification.map(|c| c.label.as_str()),
                "Upload processed"
            );
            (StatusCode::OK, Json(UploadResponse::from(&report))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error during file upload");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
