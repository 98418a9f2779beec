use crate::models::{Label, OrderHeader};
use crate::services::store::LabelStore;
use async_trait::async_trait;
use mongodb::bson::{from_document, Bson, Document};
use service_core::error::AppError;

/// A [`LabelStore`] over documents held in memory.
///
/// Matching follows MongoDB's rules for the queries the service issues:
/// numbers compare by value across Int32/Int64/Double, and results keep
/// insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    labels: Vec<Document>,
    order_headers: Vec<Document>,
    available: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            order_headers: Vec::new(),
            available: true,
        }
    }

    /// A store whose every query fails, as if the database were unreachable.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Document>) -> Self {
        self.labels.extend(labels);
        self
    }

    pub fn with_order_headers(mut self, headers: impl IntoIterator<Item = Document>) -> Self {
        self.order_headers.extend(headers);
        self
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.available {
            Ok(())
        } else {
            Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store is marked unavailable"
            )))
        }
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(f) => Some(*f),
        _ => None,
    }
}

fn values_match(a: &Bson, b: &Bson) -> bool {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

#[async_trait]
impl LabelStore for InMemoryStore {
    async fn distinct_order_numbers(&self) -> Result<Vec<Bson>, AppError> {
        self.check_available()?;
        let mut distinct: Vec<Bson> = Vec::new();
        for value in self.labels.iter().filter_map(|label| label.get("OrderNr")) {
            if !distinct.iter().any(|seen| values_match(seen, value)) {
                distinct.push(value.clone());
            }
        }
        Ok(distinct)
    }

    async fn order_headers(&self, order_numbers: &[Bson]) -> Result<Vec<OrderHeader>, AppError> {
        self.check_available()?;
        Ok(self
            .order_headers
            .iter()
            .filter(|header| {
                header.get("OrderNr").is_some_and(|nr| {
                    order_numbers
                        .iter()
                        .any(|wanted| values_match(wanted, nr))
                })
            })
            .cloned()
            .map(OrderHeader::from)
            .collect())
    }

    async fn labels_for_order(&self, order_nr: i64) -> Result<Vec<Label>, AppError> {
        self.check_available()?;
        let wanted = Bson::Int64(order_nr);
        self.labels
            .iter()
            .filter(|label| {
                label
                    .get("OrderNr")
                    .is_some_and(|nr| values_match(&wanted, nr))
            })
            .map(|label| {
                from_document(label.clone()).map_err(|e| AppError::DatabaseError(e.into()))
            })
            .collect()
    }

    async fn label_by_barcode(&self, barcode_id: &str) -> Result<Option<Document>, AppError> {
        self.check_available()?;
        Ok(self
            .labels
            .iter()
            .find(|label| label.get_str("barcodeId").is_ok_and(|id| id == barcode_id))
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_labels([
                doc! { "OrderNr": 1, "barcodeId": "A", "ItemNumber": "I1" },
                doc! { "OrderNr": 1_i64, "barcodeId": "B", "ItemNumber": "I2" },
                doc! { "OrderNr": 2.0, "barcodeId": "C", "ItemNumber": "I3" },
                doc! { "barcodeId": "D" },
            ])
            .with_order_headers([
                doc! { "OrderNr": 1, "Customer": "one" },
                doc! { "OrderNr": 2, "Customer": "two" },
                doc! { "OrderNr": 3, "Customer": "three" },
            ])
    }

    #[tokio::test]
    async fn distinct_collapses_numeric_widths() {
        let distinct = store().distinct_order_numbers().await.unwrap();
        assert_eq!(distinct, vec![Bson::Int32(1), Bson::Double(2.0)]);
    }

    #[tokio::test]
    async fn headers_match_by_numeric_value() {
        let store = store();
        let headers = store
            .order_headers(&[Bson::Double(2.0), Bson::Int64(1)])
            .await
            .unwrap();
        let numbers: Vec<_> = headers.iter().filter_map(|h| h.order_nr().cloned()).collect();
        assert_eq!(numbers, vec![Bson::Int32(1), Bson::Int32(2)]);
    }

    #[tokio::test]
    async fn labels_for_order_keeps_store_order() {
        let labels = store().labels_for_order(1).await.unwrap();
        let barcodes: Vec<_> = labels.iter().map(|l| l.barcode_or_fallback(1)).collect();
        assert_eq!(barcodes, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn barcode_lookup_is_exact() {
        let store = store();
        assert!(store.label_by_barcode("C").await.unwrap().is_some());
        assert!(store.label_by_barcode("c").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_query() {
        let store = InMemoryStore::unavailable();
        assert!(matches!(
            store.distinct_order_numbers().await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(store.ping().await.is_err());
    }
}
