pub mod orders;

pub use orders::{OrderDetailItem, OrderDetailsResponse};
