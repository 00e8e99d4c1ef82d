use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use shop_core::error::AppError;

/// Store adapter for the catalog: filtered finds, inserts with generated
/// identifiers, and exact-match lookups against a named collection.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Build the store handle. The driver connects lazily, so this succeeds
    /// even while the server is unreachable; failures surface on first use.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB store handle ready");
        Ok(Self { client, db })
    }

    /// Up to `limit` raw documents matching `filter`, in the store's natural
    /// order (insertion order for an append-only collection).
    pub async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await
            .map_err(AppError::from)?;
        cursor.try_collect().await.map_err(AppError::from)
    }

    /// Persist a validated item and return its newly assigned identifier,
    /// stringified from the store's native representation.
    pub async fn insert<T: serde::Serialize>(
        &self,
        collection: &str,
        item: &T,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<T>(collection)
            .insert_one(item, None)
            .await
            .map_err(AppError::from)?;
        Ok(id_to_string(result.inserted_id))
    }

    /// Exact-match lookup by identifier. A syntactically invalid identifier
    /// is rejected before any store round trip, and never reads as absent.
    pub async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>, AppError> {
        let object_id = ObjectId::parse_str(id).map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Invalid perfume id '{}': {}", id, e))
        })?;
        self.db
            .collection::<Document>(collection)
            .find_one(doc! { "_id": object_id }, None)
            .await
            .map_err(AppError::from)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
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

    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
