//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use wiregraph_analyze::{AnalyzeError, ErrorEnvelope};
use wiregraph_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Analyze(AnalyzeError::Catalog(err))
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        let ApiError::Analyze(err) = self;
        match err {
            AnalyzeError::ComponentNotFound { .. } => StatusCode::NOT_FOUND,
            AnalyzeError::MalformedGraph { .. } | AnalyzeError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AnalyzeError::Catalog(catalog) => match catalog {
                CatalogError::NotFound { .. }
                | CatalogError::MissingFile { .. }
                | CatalogError::EmptyCatalog { .. } => StatusCode::NOT_FOUND,
                CatalogError::MissingSelector
                | CatalogError::NoGraphNumber { .. }
                | CatalogError::Ambiguous { .. } => StatusCode::BAD_REQUEST,
                CatalogError::InvalidJson { .. } | CatalogError::Io(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let ApiError::Analyze(err) = self;
        ErrorEnvelope::from(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }
        (status, Json(self.envelope())).into_response()
    }
}
