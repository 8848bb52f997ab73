//! Store adapter
//!
//! One uniform capability set over two interchangeable backends selected by
//! explicit configuration: a fixture-seeded in-memory collection set and a
//! MongoDB document store. Instances are constructed once and injected into
//! the action layer; nothing here is a process-wide singleton.

pub mod fixtures;
pub mod memory;
pub mod mongo;

use bson::{doc, Document};
use serde_json::Value;

use crate::content::Record;
use crate::types::{BackstageError, Result};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Equality filter on one named field (dotted paths reach nested fields)
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub(crate) fn matches(&self, row: &Value) -> bool {
        lookup(row, &self.field) == Some(&self.value)
    }

    pub(crate) fn to_document(&self) -> Result<Document> {
        let value = bson::to_bson(&self.value)
            .map_err(|e| BackstageError::Store(format!("Invalid filter value: {}", e)))?;
        Ok(doc! { &self.field: value })
    }
}

/// Sort clause; collections have a default from their [`Record`] impl
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    field: String,
    ascending: bool,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }

    fn default_for<T: Record>() -> Self {
        Self {
            field: T::ORDER_FIELD.to_string(),
            ascending: T::ORDER_ASC,
        }
    }

    pub(crate) fn field(&self) -> &str {
        &self.field
    }

    pub(crate) fn ascending(&self) -> bool {
        self.ascending
    }

    pub(crate) fn to_document(&self) -> Document {
        doc! { &self.field: if self.ascending { 1 } else { -1 } }
    }
}

/// Listing query: optional equality filter, sort, and row limit
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub(crate) filter: Option<Filter>,
    pub(crate) sort: Option<Sort>,
    pub(crate) limit: Option<i64>,
}

impl Query {
    /// Everything in the collection, in its default order
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sorted(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn sort_for<T: Record>(&self) -> Sort {
        self.sort.clone().unwrap_or_else(|| Sort::default_for::<T>())
    }
}

/// Ordered set of named-field replacements applied by `update` and
/// `batch_update`. A patch never rewrites fields it does not name; the
/// backends bump `metadata.updated_at` themselves.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    fields: Vec<(String, Value)>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one top-level payload field
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// Clear an optional field (written as null)
    pub fn unset(self, field: impl Into<String>) -> Self {
        self.set(field, Value::Null)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Last value written for a field, if any
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(f, _)| f.as_str())
    }

    /// Merge into a serialized row (memory backend)
    pub(crate) fn apply(&self, row: &mut Value) {
        if let Value::Object(map) = row {
            for (field, value) in &self.fields {
                map.insert(field.clone(), value.clone());
            }
        }
    }

    /// Convert to a `$set` document (mongo backend)
    pub(crate) fn to_set_document(&self) -> Result<Document> {
        let mut set = Document::new();
        for (field, value) in &self.fields {
            let value = bson::to_bson(value)
                .map_err(|e| BackstageError::Store(format!("Invalid patch value: {}", e)))?;
            set.insert(field, value);
        }
        Ok(set)
    }
}

/// Resolve a dotted field path inside a serialized row.
pub(crate) fn lookup<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = row;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Fill in store-assigned timestamps on create. Fixture rows carry explicit
/// timestamps and keep them.
pub(crate) fn stamp_new<T: Record>(record: &mut T) {
    let meta = record.metadata_mut();
    if meta.created_at.is_empty() {
        let now = crate::content::now_iso();
        meta.created_at = now.clone();
        meta.updated_at = now;
    } else if meta.updated_at.is_empty() {
        meta.updated_at = meta.created_at.clone();
    }
}

/// The store adapter: one API, two backends.
///
/// Which backend backs a process is an explicit configuration choice
/// (`--store-backend`), never an import-path accident. All operations are
/// generic over [`Record`]; `update`/`delete` on a missing identifier
/// return `NotFound`, and any provider failure surfaces as
/// [`BackstageError::Store`] for the action layer to translate.
#[derive(Clone)]
pub enum ContentStore {
    /// Process-local, fixture-seeded, non-durable
    Memory(MemoryStore),
    /// MongoDB document collections
    Mongo(MongoStore),
}

impl ContentStore {
    /// An empty in-memory store
    pub fn memory() -> Self {
        ContentStore::Memory(MemoryStore::new())
    }

    /// An in-memory store pre-loaded with the fixture content set
    pub async fn seeded_memory() -> Result<Self> {
        let store = Self::memory();
        fixtures::seed(&store).await?;
        Ok(store)
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            ContentStore::Memory(_) => "memory",
            ContentStore::Mongo(_) => "mongo",
        }
    }

    /// List records matching the query, in its (or the collection's) order
    pub async fn list<T: Record>(&self, query: Query) -> Result<Vec<T>> {
        match self {
            ContentStore::Memory(store) => store.list(query).await,
            ContentStore::Mongo(store) => store.list(query).await,
        }
    }

    /// Fetch one record by identifier
    pub async fn get<T: Record>(&self, id: &str) -> Result<Option<T>> {
        match self {
            ContentStore::Memory(store) => store.get(id).await,
            ContentStore::Mongo(store) => store.get(id).await,
        }
    }

    /// Insert a record, assigning identifier and timestamps when absent,
    /// and return it as stored
    pub async fn create<T: Record>(&self, record: T) -> Result<T> {
        match self {
            ContentStore::Memory(store) => store.create(record).await,
            ContentStore::Mongo(store) => store.create(record).await,
        }
    }

    /// Patch named fields and return the updated record
    pub async fn update<T: Record>(&self, id: &str, patch: Patch) -> Result<T> {
        match self {
            ContentStore::Memory(store) => store.update(id, patch).await,
            ContentStore::Mongo(store) => store.update(id, patch).await,
        }
    }

    /// Remove a record. Identifiers are never reused afterwards.
    pub async fn delete<T: Record>(&self, id: &str) -> Result<()> {
        match self {
            ContentStore::Memory(store) => store.delete::<T>(id).await,
            ContentStore::Mongo(store) => store.delete::<T>(id).await,
        }
    }

    /// Apply one patch to every record matching the filter; returns how
    /// many records changed
    pub async fn batch_update<T: Record>(&self, filter: Filter, patch: Patch) -> Result<u64> {
        match self {
            ContentStore::Memory(store) => store.batch_update::<T>(filter, patch).await,
            ContentStore::Mongo(store) => store.batch_update::<T>(filter, patch).await,
        }
    }

    /// Count records, optionally restricted by an equality filter
    pub async fn count<T: Record>(&self, filter: Option<Filter>) -> Result<u64> {
        match self {
            ContentStore::Memory(store) => store.count::<T>(filter).await,
            ContentStore::Mongo(store) => store.count::<T>(filter).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Award, Service};
    use serde_json::json;

    #[test]
    fn filter_converts_to_equality_document() {
        let filter = Filter::eq("category", "branding");
        assert_eq!(
            filter.to_document().unwrap(),
            doc! { "category": "branding" }
        );
    }

    #[test]
    fn filter_matches_nested_paths() {
        let row = json!({ "metadata": { "created_at": "2024-01-01T00:00:00.000Z" } });
        let filter = Filter::eq("metadata.created_at", "2024-01-01T00:00:00.000Z");
        assert!(filter.matches(&row));
        assert!(!Filter::eq("metadata.created_at", "other").matches(&row));
    }

    #[test]
    fn default_sort_follows_the_record() {
        let newest_first = Query::all().sort_for::<Award>();
        assert_eq!(newest_first.to_document(), doc! { "metadata.created_at": -1 });

        let manual = Query::all().sort_for::<Service>();
        assert_eq!(manual.to_document(), doc! { "order": 1 });
    }

    #[test]
    fn explicit_sort_overrides_the_default() {
        let query = Query::all().sorted(Sort::asc("title"));
        assert_eq!(query.sort_for::<Award>().to_document(), doc! { "title": 1 });
    }

    #[test]
    fn patch_merges_only_named_fields() {
        let mut row = json!({ "title": "Old", "featured": false, "order": 3 });
        Patch::new().set("title", "New").apply(&mut row);
        assert_eq!(row, json!({ "title": "New", "featured": false, "order": 3 }));
    }

    #[test]
    fn patch_last_write_wins() {
        let patch = Patch::new().set("status", "draft").set("status", "published");
        assert_eq!(patch.get_str("status"), Some("published"));
    }

    #[test]
    fn unset_writes_null() {
        let patch = Patch::new().unset("scheduled_for");
        assert_eq!(patch.get("scheduled_for"), Some(&serde_json::Value::Null));
        assert_eq!(
            patch.to_set_document().unwrap(),
            doc! { "scheduled_for": bson::Bson::Null }
        );
    }

    #[test]
    fn lookup_walks_dotted_paths() {
        let row = json!({ "a": { "b": { "c": 7 } } });
        assert_eq!(lookup(&row, "a.b.c"), Some(&json!(7)));
        assert_eq!(lookup(&row, "a.missing"), None);
    }
}
