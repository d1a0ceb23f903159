use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
};

use stockyard_reports::ReportFormat;

use crate::app::errors;
use crate::app::services::AppServices;

/// `GET /products/report/:format` — snapshot the catalog and hand the rows
/// to the configured renderer.
pub async fn generate_report(
    Extension(services): Extension<Arc<AppServices>>,
    Path(format): Path<String>,
) -> axum::response::Response {
    let format: ReportFormat = match format.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let rows = match services.snapshots.build_snapshot() {
        Ok(rows) => rows,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let bytes = match services.renderer.render(format, &rows) {
        Ok(bytes) => bytes,
        Err(e) => return errors::render_error_to_response(e),
    };

    tracing::info!(format = ?format, rows = rows.len(), "report generated");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        bytes,
    )
        .into_response()
}
