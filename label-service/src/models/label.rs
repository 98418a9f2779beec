use super::json::{display_value, document_to_json};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A per-item label from the `Labels` collection.
///
/// Only the fields the order-detail view reads are modelled; the raw-label
/// endpoint serves the stored document itself. Every field is tolerated as
/// absent since the upstream data-entry system enforces no schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "OrderNr", default)]
    pub order_nr: Option<Bson>,
    #[serde(rename = "barcodeId", default)]
    pub barcode_id: Option<Bson>,
    #[serde(rename = "PlantDate", default)]
    pub plant_date: Option<Bson>,
    #[serde(rename = "ItemNumber", default)]
    pub item_number: Option<Bson>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<Bson>,
    #[serde(rename = "ItemDescription", default)]
    pub item_description: Option<Bson>,
    #[serde(rename = "PickAreaName", default)]
    pub pick_area_name: Option<Bson>,
    #[serde(rename = "SmallText", default)]
    pub small_text: Option<Bson>,
    #[serde(rename = "UOM", default)]
    pub uom: Option<Bson>,
}

impl Label {
    /// The stored barcode, or `"<OrderNr>-<ItemNumber>"` when the label has none.
    ///
    /// Consumers rely on a barcode-shaped string always being present.
    pub fn barcode_or_fallback(&self, order_nr: i64) -> String {
        match self.barcode_id.as_ref().map(display_value) {
            Some(barcode) if !barcode.is_empty() => barcode,
            _ => fallback_barcode(order_nr, self.item_number.as_ref()),
        }
    }
}

pub fn fallback_barcode(order_nr: i64, item_number: Option<&Bson>) -> String {
    format!(
        "{}-{}",
        order_nr,
        item_number.map(display_value).unwrap_or_default()
    )
}

/// An order-level document from `OrderHeaders`, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHeader(Document);

impl OrderHeader {
    pub fn order_nr(&self) -> Option<&Bson> {
        self.0.get("OrderNr")
    }

    pub fn into_json(self) -> Value {
        document_to_json(self.0)
    }
}

impl From<Document> for OrderHeader {
    fn from(doc: Document) -> Self {
        Self(doc)
    }
}
