//! The generic "data" record shape: configuration entries, templates and
//! rules managed by an admin page.

use collected_rust::{Draft, Record, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub category: String,
    pub status: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for DataRecord {
    const COLLECTION: &'static str = "data_records";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.owner]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "category" => Some(&self.category),
            "status" => Some(&self.status),
            "owner" => Some(&self.owner),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataDraft {
    pub name: String,
    pub category: String,
    pub status: String,
    pub owner: String,
    pub description: String,
}

impl DataDraft {
    /// A blank form: enum fields default to the first configured variant.
    pub fn blank(categories: &[&str], statuses: &[&str]) -> Self {
        DataDraft {
            category: categories.first().copied().unwrap_or("").to_string(),
            status: statuses.first().copied().unwrap_or("").to_string(),
            ..DataDraft::default()
        }
    }
}

impl Draft for DataDraft {
    type Output = DataRecord;

    fn seed(record: &DataRecord) -> Self {
        DataDraft {
            name: record.name.clone(),
            category: record.category.clone(),
            status: record.status.clone(),
            owner: record.owner.clone(),
            description: record.description.clone().unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "category" => Some(&self.category),
            "status" => Some(&self.status),
            "owner" => Some(&self.owner),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn build(&self, meta: RecordMeta) -> DataRecord {
        DataRecord {
            meta,
            name: self.name.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            owner: self.owner.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }

    fn apply(&self, record: &mut DataRecord) {
        record.name = self.name.clone();
        record.category = self.category.clone();
        record.status = self.status.clone();
        record.owner = self.owner.clone();
        record.description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
    }
}
