//! MongoDB store backend
//!
//! Typed collections over one database. Connection setup appends a short
//! server-selection timeout so startup fails fast when the server is
//! unreachable instead of hanging for the driver default.

use bson::{doc, oid::ObjectId};
use futures_util::StreamExt;
use mongodb::options::FindOptions;
use mongodb::{Client, Collection, Database};
use tracing::{error, info};

use crate::content::{now_iso, Record};
use crate::store::{stamp_new, Filter, Patch, Query};
use crate::types::{BackstageError, Result};

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to MongoDB and verify the connection with a ping
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        info!("Connecting to MongoDB at {}", uri);

        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| BackstageError::Store(format!("Failed to connect to MongoDB: {}", e)))?;

        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| BackstageError::Store(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self { db })
    }

    fn collection<T: Record>(&self) -> Collection<T> {
        self.db.collection::<T>(T::COLLECTION)
    }

    pub async fn list<T: Record>(&self, query: Query) -> Result<Vec<T>> {
        let filter = match &query.filter {
            Some(f) => f.to_document()?,
            None => doc! {},
        };

        let mut options = FindOptions::builder()
            .sort(query.sort_for::<T>().to_document())
            .build();
        options.limit = query.limit;

        let cursor = self
            .collection::<T>()
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| BackstageError::Store(format!("Find failed: {}", e)))?;

        let records: Vec<T> = cursor
            .filter_map(|doc| async {
                match doc {
                    Ok(record) => Some(record),
                    Err(e) => {
                        error!("Error reading document from {}: {}", T::COLLECTION, e);
                        None
                    }
                }
            })
            .collect()
            .await;

        Ok(records)
    }

    pub async fn get<T: Record>(&self, id: &str) -> Result<Option<T>> {
        self.collection::<T>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| BackstageError::Store(format!("Find failed: {}", e)))
    }

    pub async fn create<T: Record>(&self, mut record: T) -> Result<T> {
        if record.id().is_empty() {
            record.set_id(ObjectId::new().to_hex());
        }
        stamp_new(&mut record);

        self.collection::<T>()
            .insert_one(&record)
            .await
            .map_err(|e| BackstageError::Store(format!("Insert failed: {}", e)))?;

        Ok(record)
    }

    pub async fn update<T: Record>(&self, id: &str, patch: Patch) -> Result<T> {
        let mut set = patch.to_set_document()?;
        set.insert("metadata.updated_at", now_iso());

        let result = self
            .collection::<T>()
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await
            .map_err(|e| BackstageError::Store(format!("Update failed: {}", e)))?;

        // matched, not modified: a no-op patch on an existing record succeeds
        if result.matched_count == 0 {
            return Err(BackstageError::NotFound(T::ENTITY.to_string()));
        }

        self.get(id)
            .await?
            .ok_or_else(|| BackstageError::NotFound(T::ENTITY.to_string()))
    }

    pub async fn delete<T: Record>(&self, id: &str) -> Result<()> {
        let result = self
            .collection::<T>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| BackstageError::Store(format!("Delete failed: {}", e)))?;

        if result.deleted_count == 0 {
            return Err(BackstageError::NotFound(T::ENTITY.to_string()));
        }
        Ok(())
    }

    pub async fn batch_update<T: Record>(&self, filter: Filter, patch: Patch) -> Result<u64> {
        let mut set = patch.to_set_document()?;
        set.insert("metadata.updated_at", now_iso());

        let result = self
            .collection::<T>()
            .update_many(filter.to_document()?, doc! { "$set": set })
            .await
            .map_err(|e| BackstageError::Store(format!("Batch update failed: {}", e)))?;

        Ok(result.modified_count)
    }

    pub async fn count<T: Record>(&self, filter: Option<Filter>) -> Result<u64> {
        let filter = match &filter {
            Some(f) => f.to_document()?,
            None => doc! {},
        };
        self.collection::<T>()
            .count_documents(filter)
            .await
            .map_err(|e| BackstageError::Store(format!("Count failed: {}", e)))
    }
}
