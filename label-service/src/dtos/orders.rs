use crate::models::{bson_to_json, Label};
use mongodb::bson::Bson;
use serde::Serialize;
use serde_json::Value;

/// Per-item breakdown of one order, built from its labels.
#[derive(Debug, Serialize)]
pub struct OrderDetailsResponse {
    #[serde(rename = "OrderNr")]
    pub order_nr: i64,
    #[serde(rename = "PlantDate")]
    pub plant_date: Value,
    #[serde(rename = "Details")]
    pub details: Vec<OrderDetailItem>,
}

#[derive(Debug, Serialize)]
pub struct OrderDetailItem {
    #[serde(rename = "ItemNumber")]
    pub item_number: Value,
    #[serde(rename = "Quantity")]
    pub quantity: Value,
    #[serde(rename = "ItemDescription")]
    pub item_description: Value,
    #[serde(rename = "PickAreaName")]
    pub pick_area_name: Value,
    #[serde(rename = "SmallText")]
    pub small_text: Value,
    #[serde(rename = "UOM")]
    pub uom: Value,
    #[serde(rename = "BarcodeID")]
    pub barcode_id: String,
}

fn render(value: Option<Bson>) -> Value {
    value.map(bson_to_json).unwrap_or(Value::Null)
}

impl OrderDetailItem {
    pub fn from_label(order_nr: i64, label: Label) -> Self {
        let barcode_id = label.barcode_or_fallback(order_nr);
        Self {
            item_number: render(label.item_number),
            quantity: render(label.quantity),
            item_description: render(label.item_description),
            pick_area_name: render(label.pick_area_name),
            small_text: render(label.small_text),
            uom: render(label.uom),
            barcode_id,
        }
    }
}

impl OrderDetailsResponse {
    /// `order_nr` is echoed from the request; `PlantDate` comes from the
    /// first label in store order.
    pub fn from_labels(order_nr: i64, labels: Vec<Label>) -> Self {
        let plant_date = render(labels.first().and_then(|label| label.plant_date.clone()));
        Self {
            order_nr,
            plant_date,
            details: labels
                .into_iter()
                .map(|label| OrderDetailItem::from_label(order_nr, label))
                .collect(),
        }
    }
}
