//! Item catalog with a title index.

use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One raw catalog row as loaded from external storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    pub genre: String,
    pub description: String,
}

/// An immutable catalog item
///
/// `feature_text` is the concatenation of the record's descriptive
/// fields and is the sole input to vectorization.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: usize,
    pub title: String,
    pub feature_text: String,
}

/// The full item catalog, loaded once
///
/// Titles are required to be unique; the title index resolves a display
/// key to an item id without scanning.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    title_index: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from raw records, assigning stable ids in input order
    pub fn from_records(records: Vec<ItemRecord>) -> Result<Self> {
        let mut items = Vec::with_capacity(records.len());
        let mut title_index = AHashMap::with_capacity(records.len());

        for (id, record) in records.into_iter().enumerate() {
            if title_index.contains_key(&record.title) {
                return Err(Error::DuplicateTitle(record.title));
            }
            title_index.insert(record.title.clone(), id);
            items.push(Item {
                id,
                title: record.title,
                feature_text: format!("{} {}", record.genre, record.description),
            });
        }

        Ok(Self { items, title_index })
    }

    /// Parse a JSON array of records and build a catalog
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ItemRecord> =
            serde_json::from_str(json).map_err(|e| Error::CatalogParse(e.to_string()))?;
        Self::from_records(records)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Resolve a title to its item id
    pub fn lookup_by_title(&self, title: &str) -> Result<usize> {
        self.title_index
            .get(title)
            .copied()
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))
    }

    /// Feature strings in item order, the vectorizer's corpus
    pub fn feature_texts(&self) -> Vec<String> {
        self.items.iter().map(|i| i.feature_text.clone()).collect()
    }

    /// Titles in item order
    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|i| i.title.clone()).collect()
    }
}
