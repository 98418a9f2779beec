use crate::models::{Label, OrderHeader};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use service_core::error::AppError;

pub const LABELS_COLLECTION: &str = "Labels";
pub const ORDER_HEADERS_COLLECTION: &str = "OrderHeaders";

/// Read access to the `Labels` and `OrderHeaders` collections.
#[async_trait]
pub trait LabelStore: Send + Sync {
    /// Distinct `OrderNr` values across all labels.
    async fn distinct_order_numbers(&self) -> Result<Vec<Bson>, AppError>;

    /// Headers whose `OrderNr` is one of `order_numbers`, in store order.
    async fn order_headers(&self, order_numbers: &[Bson]) -> Result<Vec<OrderHeader>, AppError>;

    /// Every label of one order, in store order.
    async fn labels_for_order(&self, order_nr: i64) -> Result<Vec<Label>, AppError>;

    /// The raw label document with exactly this `barcodeId`.
    async fn label_by_barcode(&self, barcode_id: &str) -> Result<Option<Document>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
