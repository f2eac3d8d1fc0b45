//! Todo storage operations and tag links.

use super::tag_groups::ensure_owned_group;
use super::{Database, now_ms, optional_uuid_column, row_exists, uuid_column};
use crate::store::TodoCreate;
use crate::types::Todo;
use anyhow::{Result, anyhow};
use rusqlite::{Connection, Row, params};
use std::collections::HashMap;
use uuid::Uuid;

/// Parse a todo row. Tag links are filled in separately.
pub fn parse_todo_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: uuid_column(row, "id")?,
        user_id: row.get("user_id")?,
        tag_group_id: uuid_column(row, "tag_group_id")?,
        parent_id: optional_uuid_column(row, "parent_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        tag_ids: Vec::new(),
        created_at: row.get("created_at")?,
    })
}

/// Insert a todo owned by `user_id` and link its tags.
///
/// The parent, when given, must already exist in the same tag group. Every tag
/// must belong to the user.
pub fn insert_todo(conn: &Connection, user_id: &str, todo: &TodoCreate) -> Result<Uuid> {
    ensure_owned_group(conn, user_id, todo.tag_group_id)?;

    if let Some(parent_id) = todo.parent_id {
        let parent_ok = row_exists(
            conn,
            "SELECT 1 FROM todos WHERE id = ?1 AND user_id = ?2 AND tag_group_id = ?3",
            params![
                parent_id.to_string(),
                user_id,
                todo.tag_group_id.to_string()
            ],
        )?;
        if !parent_ok {
            return Err(anyhow!("Parent todo not found: {}", parent_id));
        }
    }

    for tag_id in todo.tag_ids.iter().flatten() {
        let owned = row_exists(
            conn,
            "SELECT 1 FROM tags WHERE id = ?1 AND user_id = ?2",
            params![tag_id.to_string(), user_id],
        )?;
        if !owned {
            return Err(anyhow!("Tag not found: {}", tag_id));
        }
    }

    let id = Uuid::now_v7();
    conn.execute(
        "INSERT INTO todos (id, user_id, tag_group_id, parent_id, title, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id.to_string(),
            user_id,
            todo.tag_group_id.to_string(),
            todo.parent_id.map(|p| p.to_string()),
            todo.title,
            todo.description,
            now_ms(),
        ],
    )?;

    for tag_id in todo.tag_ids.iter().flatten() {
        conn.execute(
            "INSERT OR IGNORE INTO todo_tags (todo_id, tag_id) VALUES (?1, ?2)",
            params![id.to_string(), tag_id.to_string()],
        )?;
    }

    Ok(id)
}

/// Tag links for every todo of a group, keyed by todo id.
fn tag_links_for_group(conn: &Connection, group_id: Uuid) -> Result<HashMap<Uuid, Vec<Uuid>>> {
    let mut stmt = conn.prepare(
        "SELECT tt.todo_id, tt.tag_id FROM todo_tags tt
         JOIN todos t ON t.id = tt.todo_id
         WHERE t.tag_group_id = ?1
         ORDER BY tt.rowid",
    )?;

    let mut links: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    let rows = stmt.query_map(params![group_id.to_string()], |row| {
        Ok((uuid_column(row, "todo_id")?, uuid_column(row, "tag_id")?))
    })?;
    for row in rows {
        let (todo_id, tag_id) = row?;
        links.entry(todo_id).or_default().push(tag_id);
    }

    Ok(links)
}

impl Database {
    /// Todos of a tag group in creation order, with their tag links.
    pub fn get_todos_by_group(&self, group_id: Uuid) -> Result<Vec<Todo>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT * FROM todos WHERE tag_group_id = ?1 ORDER BY rowid")?;
            let mut todos = stmt
                .query_map(params![group_id.to_string()], parse_todo_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            let mut links = tag_links_for_group(conn, group_id)?;
            for todo in &mut todos {
                todo.tag_ids = links.remove(&todo.id).unwrap_or_default();
            }

            Ok(todos)
        })
    }

    /// Direct children of a todo, in creation order.
    pub fn get_child_todos(&self, parent_id: Uuid) -> Result<Vec<Todo>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT * FROM todos WHERE parent_id = ?1 ORDER BY rowid")?;
            let todos = stmt
                .query_map(params![parent_id.to_string()], parse_todo_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(todos)
        })
    }
}
