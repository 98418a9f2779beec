use crate::dtos::OrderDetailsResponse;
use crate::models::OrderHeader;
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use mongodb::bson::Bson;
use serde_json::Value;
use service_core::error::AppError;

/// Headers of every order referenced by at least one label.
pub async fn list_order_headers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let order_numbers: Vec<Bson> = state
        .store
        .distinct_order_numbers()
        .await?
        .into_iter()
        .filter(|nr| !matches!(nr, Bson::Null | Bson::Undefined))
        .collect();

    if order_numbers.is_empty() {
        tracing::warn!("No label references an order");
        return Err(AppError::NotFound(anyhow::anyhow!("No valid orders found")));
    }

    tracing::info!(valid_orders = order_numbers.len(), "Fetching order headers");

    let headers = state.store.order_headers(&order_numbers).await?;
    if headers.is_empty() {
        tracing::warn!(
            valid_orders = order_numbers.len(),
            "Labels reference orders that have no header"
        );
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No order headers found for valid orders"
        )));
    }

    Ok(Json(headers.into_iter().map(OrderHeader::into_json).collect()))
}

/// Per-item breakdown of one order's labels.
pub async fn get_order_details(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<OrderDetailsResponse>, AppError> {
    let Path(raw) =
        path.map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;
    let order_nr = parse_order_nr(&raw)?;

    tracing::info!(order_nr, "Fetching order details");

    let labels = state.store.labels_for_order(order_nr).await?;
    if labels.is_empty() {
        tracing::warn!(order_nr, "No labels for order");
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No labels found for order number {}",
            order_nr
        )));
    }

    Ok(Json(OrderDetailsResponse::from_labels(order_nr, labels)))
}

fn parse_order_nr(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| {
        AppError::BadRequest(anyhow::anyhow!(
            "Invalid order number '{}': OrderNr must be an integer",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(parse_order_nr("42").unwrap(), 42);
        assert_eq!(parse_order_nr("-3").unwrap(), -3);
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["abc", "12abc", "1.5", "", " 7"] {
            assert!(
                matches!(parse_order_nr(raw), Err(AppError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
