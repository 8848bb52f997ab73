//! In-memory store backend
//!
//! Process-local collections of serialized rows, seeded from fixtures at
//! startup. Explicitly non-durable: contents are gone on process exit, so
//! this backend stands in for a real database in development and tests.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::{now_iso, Record};
use crate::store::{lookup, stamp_new, Filter, Patch, Query};
use crate::types::{BackstageError, Result};

/// Rows per collection, kept in insertion order
type Collections = HashMap<&'static str, Vec<Value>>;

#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list<T: Record>(&self, query: Query) -> Result<Vec<T>> {
        let collections = self.collections.read().await;
        let mut rows: Vec<Value> = collections
            .get(T::COLLECTION)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filter.as_ref().map_or(true, |f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(collections);

        let sort = query.sort_for::<T>();
        // Stable sort keeps insertion order among ties
        rows.sort_by(|a, b| {
            let ord = compare(lookup(a, sort.field()), lookup(b, sort.field()));
            if sort.ascending() {
                ord
            } else {
                ord.reverse()
            }
        });
        if let Some(limit) = query.limit {
            rows.truncate(limit.max(0) as usize);
        }

        rows.into_iter().map(decode).collect()
    }

    pub async fn get<T: Record>(&self, id: &str) -> Result<Option<T>> {
        let collections = self.collections.read().await;
        let Some(rows) = collections.get(T::COLLECTION) else {
            return Ok(None);
        };
        match rows.iter().find(|row| row_id(row) == Some(id)) {
            Some(row) => decode(row.clone()).map(Some),
            None => Ok(None),
        }
    }

    pub async fn create<T: Record>(&self, mut record: T) -> Result<T> {
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        stamp_new(&mut record);

        let row = serde_json::to_value(&record)
            .map_err(|e| BackstageError::Store(format!("Row encode failed: {}", e)))?;

        let mut collections = self.collections.write().await;
        let rows = collections.entry(T::COLLECTION).or_default();
        if rows.iter().any(|r| row_id(r) == Some(record.id())) {
            return Err(BackstageError::Store(format!(
                "Duplicate id in {}: {}",
                T::COLLECTION,
                record.id()
            )));
        }
        rows.push(row);
        Ok(record)
    }

    pub async fn update<T: Record>(&self, id: &str, patch: Patch) -> Result<T> {
        let mut collections = self.collections.write().await;
        let row = collections
            .get_mut(T::COLLECTION)
            .and_then(|rows| rows.iter_mut().find(|row| row_id(row) == Some(id)))
            .ok_or_else(|| BackstageError::NotFound(T::ENTITY.to_string()))?;

        patch.apply(row);
        touch(row);
        decode(row.clone())
    }

    pub async fn delete<T: Record>(&self, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        let rows = collections
            .get_mut(T::COLLECTION)
            .ok_or_else(|| BackstageError::NotFound(T::ENTITY.to_string()))?;
        let before = rows.len();
        rows.retain(|row| row_id(row) != Some(id));
        if rows.len() == before {
            return Err(BackstageError::NotFound(T::ENTITY.to_string()));
        }
        Ok(())
    }

    pub async fn batch_update<T: Record>(&self, filter: Filter, patch: Patch) -> Result<u64> {
        let mut collections = self.collections.write().await;
        let Some(rows) = collections.get_mut(T::COLLECTION) else {
            return Ok(0);
        };
        let mut updated = 0u64;
        for row in rows.iter_mut().filter(|row| filter.matches(row)) {
            patch.apply(row);
            touch(row);
            updated += 1;
        }
        Ok(updated)
    }

    pub async fn count<T: Record>(&self, filter: Option<Filter>) -> Result<u64> {
        let collections = self.collections.read().await;
        let Some(rows) = collections.get(T::COLLECTION) else {
            return Ok(0);
        };
        let count = rows
            .iter()
            .filter(|row| filter.as_ref().map_or(true, |f| f.matches(row)))
            .count();
        Ok(count as u64)
    }
}

fn row_id(row: &Value) -> Option<&str> {
    row.get("_id").and_then(Value::as_str)
}

fn touch(row: &mut Value) {
    if let Some(Value::Object(meta)) = row.get_mut("metadata") {
        meta.insert("updated_at".to_string(), Value::String(now_iso()));
    }
}

fn decode<T: Record>(row: Value) -> Result<T> {
    serde_json::from_value(row)
        .map_err(|e| BackstageError::Store(format!("Row decode failed: {}", e)))
}

/// Field comparison for sorting. Missing fields sort before present ones;
/// numbers compare numerically, everything else as its JSON form.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}
