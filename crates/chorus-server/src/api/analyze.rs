use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request, State},
    http::StatusCode,
    Extension, Json,
};
use chorus_analysis::{run_analysis, Report, TextModel};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct AnalyzeRequest {
    #[serde(default)]
    pub comments: Option<Vec<String>>,
}

/// JSON body of `POST /analyze`.
///
/// An empty body is read as a request without `comments`, whatever its
/// content type. Any other body goes through the `Json` extractor and keeps
/// its rejection status.
pub(super) struct AnalyzeBody(pub AnalyzeRequest);

impl<S: Send + Sync> FromRequest<S> for AnalyzeBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let extensions = req.extensions().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(AnalyzeRequest::default()));
        }

        let mut rebuilt = Request::new(Body::from(bytes));
        *rebuilt.headers_mut() = headers;
        *rebuilt.extensions_mut() = extensions;
        let Json(body) = Json::<AnalyzeRequest>::from_request(rebuilt, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
        Ok(Self(body))
    }
}

pub(super) async fn analyze<M: TextModel + 'static>(
    State(state): State<AppState<M>>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<AnalyzeBody, ApiError>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    let AnalyzeBody(body) = payload.inspect_err(|rejection| {
        tracing::warn!(
            request_id = %req_id.0,
            status = %rejection.status,
            error = %rejection.error,
            "rejected analyze request body"
        );
    })?;

    let comments = body.comments.unwrap_or_default();
    if comments.is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "No comments"));
    }

    let report = run_analysis(state.model.as_ref(), &comments)
        .await
        .map_err(|e| {
            tracing::error!(request_id = %req_id.0, error = %e, "analysis failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(ApiResponse::ok(report)))
}
