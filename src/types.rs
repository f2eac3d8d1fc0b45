//! Persisted records owned by a user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A named collection of tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub goal_ratios: Option<BTreeMap<String, f64>>,
    pub is_todo_group: bool,
    pub created_at: i64,
}

/// A tag inside a tag group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub user_id: String,
    pub group_id: Uuid,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: i64,
}

/// A todo item. Root todos have no parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub user_id: String,
    pub tag_group_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    /// Attached tags, in attachment order.
    pub tag_ids: Vec<Uuid>,
    pub created_at: i64,
}

impl Todo {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
