use crate::models::document_to_json;
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// The stored label document for a barcode, unmodified.
pub async fn get_label(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(barcode_id) =
        path.map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;
    if barcode_id.is_empty() {
        return Err(missing_barcode_error());
    }

    tracing::info!(barcode_id = %barcode_id, "Fetching label");

    let label = state
        .store
        .label_by_barcode(&barcode_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(barcode_id = %barcode_id, "Label not found");
            AppError::NotFound(anyhow::anyhow!(
                "Label not found for barcode ID {}",
                barcode_id
            ))
        })?;

    Ok(Json(document_to_json(label)))
}

/// `/labels` and `/labels/` carry no identifier at all.
pub async fn missing_barcode() -> AppError {
    missing_barcode_error()
}

fn missing_barcode_error() -> AppError {
    AppError::BadRequest(anyhow::anyhow!("Barcode ID is required"))
}
