//! Creation contracts for tag groups, tags and todos.
//!
//! Materialization only issues create requests and reads back the generated
//! ids. Implementations run every call in the scope of one owning user.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Request to create a tag group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroupCreate {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub goal_ratios: Option<BTreeMap<String, f64>>,
    pub is_todo_group: bool,
}

/// Request to create a tag inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCreate {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub group_id: Uuid,
}

/// Request to create a todo.
///
/// `tag_ids` is `None` when the todo asked for no tags at all, and `Some` (possibly
/// empty) when it named tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    pub description: Option<String>,
    pub tag_group_id: Uuid,
    pub tag_ids: Option<Vec<Uuid>>,
    pub parent_id: Option<Uuid>,
}

/// Persistence operations consumed by the preset materializer.
pub trait WorkspaceStore {
    fn create_tag_group(&mut self, group: TagGroupCreate) -> Result<Uuid>;

    fn create_tag(&mut self, tag: TagCreate) -> Result<Uuid>;

    fn create_todo(&mut self, todo: TodoCreate) -> Result<Uuid>;
}
