use crate::config::MongoConfig;
use crate::config::SERVICE_NAME;
use crate::models::{Label, OrderHeader};
use crate::services::store::{LabelStore, LABELS_COLLECTION, ORDER_HEADERS_COLLECTION};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(config.uri.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse MongoDB connection string: {}", e);
                AppError::from(e)
            })?;
        client_options.app_name = Some(SERVICE_NAME.to_string());
        if let Some(secs) = config.server_selection_timeout_secs {
            client_options.server_selection_timeout = Some(Duration::from_secs(secs));
        }

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(&config.database);
        tracing::info!(database = %config.database, "MongoDB client created");
        Ok(Self { client, db })
    }

    pub fn labels(&self) -> Collection<Label> {
        self.db.collection(LABELS_COLLECTION)
    }

    pub fn raw_labels(&self) -> Collection<Document> {
        self.db.collection(LABELS_COLLECTION)
    }

    pub fn order_headers_collection(&self) -> Collection<Document> {
        self.db.collection(ORDER_HEADERS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl LabelStore for MongoDb {
    async fn distinct_order_numbers(&self) -> Result<Vec<Bson>, AppError> {
        Ok(self.raw_labels().distinct("OrderNr", None, None).await?)
    }

    async fn order_headers(&self, order_numbers: &[Bson]) -> Result<Vec<OrderHeader>, AppError> {
        let filter = doc! { "OrderNr": { "$in": order_numbers.to_vec() } };
        let headers: Vec<Document> = self
            .order_headers_collection()
            .find(filter, None)
            .await?
            .try_collect()
            .await?;
        Ok(headers.into_iter().map(OrderHeader::from).collect())
    }

    async fn labels_for_order(&self, order_nr: i64) -> Result<Vec<Label>, AppError> {
        let labels = self
            .labels()
            .find(doc! { "OrderNr": order_nr }, None)
            .await?
            .try_collect()
            .await?;
        Ok(labels)
    }

    async fn label_by_barcode(&self, barcode_id: &str) -> Result<Option<Document>, AppError> {
        Ok(self
            .raw_labels()
            .find_one(doc! { "barcodeId": barcode_id }, None)
            .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
