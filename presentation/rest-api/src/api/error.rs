use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use poem::{Endpoint, IntoResponse, Request, Response, http::StatusCode};
use poem_openapi::{
    Object,
    error::{ContentTypeError, ParseParamError, ParseRequestPayloadError},
    payload::Json,
};

/// Error body returned by every failing endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Short category, e.g. "Product not found"
    pub message: String,
    /// Detail for this occurrence
    pub error: String,
    pub status: u16,
    /// RFC 3339, UTC
    pub timestamp: String,
    /// Request path that failed
    pub path: String,
    /// Field name to violation message, only for validation failures
    #[oai(skip_serializing_if_is_none)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str, error: impl Into<String>, path: &str) -> Self {
        Self {
            message: message.to_string(),
            error: error.into(),
            status: status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: path.to_string(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>);
}

/// Rewrites extractor rejections (unparsable query values, mistyped or malformed
/// bodies) into the standard error body. Parser messages are logged, not returned.
pub async fn envelope_rejections<E: Endpoint>(
    ep: Arc<E>,
    req: Request,
) -> poem::Result<Response> {
    let path = req.uri().path().to_string();

    let err = match ep.call(req).await {
        Ok(resp) => return Ok(resp.into_response()),
        Err(err) => err,
    };

    let detail = if let Some(param) = err.downcast_ref::<ParseParamError>() {
        format!("Parameter '{}' has an invalid value", param.name)
    } else if err.is::<ParseRequestPayloadError>() || err.is::<ContentTypeError>() {
        "Request body is malformed or has fields of the wrong type".to_string()
    } else {
        return Err(err);
    };
    tracing::debug!(error = %err, path = %path, "request rejected by extractor");

    let body = ErrorResponse::new(StatusCode::BAD_REQUEST, "Invalid parameter", detail, &path);
    Ok(Json(body)
        .with_status(StatusCode::BAD_REQUEST)
        .into_response())
}
