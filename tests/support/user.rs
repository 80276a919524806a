//! The user account record shape managed by an admin page.

use collected_rust::{Draft, Record, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "role" => Some(&self.role),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl UserDraft {
    pub fn blank(roles: &[&str], statuses: &[&str]) -> Self {
        UserDraft {
            role: roles.first().copied().unwrap_or("").to_string(),
            status: statuses.first().copied().unwrap_or("").to_string(),
            ..UserDraft::default()
        }
    }
}

impl Draft for UserDraft {
    type Output = User;

    fn seed(record: &User) -> Self {
        UserDraft {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            status: record.status.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "role" => Some(&self.role),
            "status" => Some(&self.status),
            _ => None,
        }
    }

    fn build(&self, meta: RecordMeta) -> User {
        User {
            meta,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status.clone(),
        }
    }

    fn apply(&self, record: &mut User) {
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.role = self.role.clone();
        record.status = self.status.clone();
    }
}
