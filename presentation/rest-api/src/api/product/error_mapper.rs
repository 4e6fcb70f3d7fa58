use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::ParameterError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>) {
        let body = match self {
            ProductError::NotFound(key) => ErrorResponse::new(
                StatusCode::NOT_FOUND,
                "Product not found",
                format!("Product not found with key: {key}"),
                path,
            ),
            ProductError::Validation(errors) => {
                let fields: BTreeMap<String, String> = errors
                    .iter()
                    .map(|v| (v.field.to_string(), v.message.clone()))
                    .collect();
                ErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    "Validation failed",
                    "One or more fields failed validation",
                    path,
                )
                .with_errors(fields)
            }
            ProductError::InvalidParameter(err) => return err.into_error_response(path),
            other @ (ProductError::InvalidSeedRecord { .. } | ProductError::Repository(_)) => {
                tracing::error!(error = ?other, path, "unexpected product error");
                unexpected(path)
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body))
    }
}

impl IntoErrorResponse for ParameterError {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>) {
        let body = ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "Invalid parameter",
            self.detail(),
            path,
        );
        (StatusCode::BAD_REQUEST, Json(body))
    }
}

fn unexpected(path: &str) -> ErrorResponse {
    ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred",
        "The server encountered an unexpected error",
        path,
    )
}
