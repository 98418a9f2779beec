pub mod health;
pub mod labels;
pub mod orders;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use labels::{get_label, missing_barcode};
pub use orders::{get_order_details, list_order_headers};

use service_core::error::AppError;

/// Catch-all for unknown paths and methods.
pub async fn route_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Route not found"))
}
