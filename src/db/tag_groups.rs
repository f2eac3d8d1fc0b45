//! Tag group storage operations.

use super::{Database, now_ms, row_exists, text_conversion_error, uuid_column};
use crate::store::TagGroupCreate;
use crate::types::TagGroup;
use anyhow::{Result, anyhow};
use rusqlite::{Connection, Row, params};
use std::collections::BTreeMap;
use uuid::Uuid;

pub fn parse_tag_group_row(row: &Row) -> rusqlite::Result<TagGroup> {
    let goal_ratios_json: Option<String> = row.get("goal_ratios")?;
    let goal_ratios = goal_ratios_json
        .map(|s| serde_json::from_str::<BTreeMap<String, f64>>(&s))
        .transpose()
        .map_err(|e| text_conversion_error(row, "goal_ratios", e))?;

    Ok(TagGroup {
        id: uuid_column(row, "id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        description: row.get("description")?,
        goal_ratios,
        is_todo_group: row.get("is_todo_group")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a tag group owned by `user_id` using an existing connection.
pub fn insert_tag_group(conn: &Connection, user_id: &str, group: &TagGroupCreate) -> Result<Uuid> {
    let id = Uuid::now_v7();
    let goal_ratios = group
        .goal_ratios
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        "INSERT INTO tag_groups (id, user_id, name, color, description, goal_ratios, is_todo_group, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id.to_string(),
            user_id,
            group.name,
            group.color,
            group.description,
            goal_ratios,
            group.is_todo_group,
            now_ms(),
        ],
    )?;

    Ok(id)
}

/// Check that a tag group exists and belongs to `user_id`.
pub(crate) fn ensure_owned_group(conn: &Connection, user_id: &str, group_id: Uuid) -> Result<()> {
    let owned = row_exists(
        conn,
        "SELECT 1 FROM tag_groups WHERE id = ?1 AND user_id = ?2",
        params![group_id.to_string(), user_id],
    )?;

    if owned {
        Ok(())
    } else {
        Err(anyhow!("Tag group not found: {}", group_id))
    }
}

impl Database {
    /// Get a tag group by id.
    pub fn get_tag_group(&self, group_id: Uuid) -> Result<Option<TagGroup>> {
        self.with_conn(|conn| {
            let result = conn.query_row(
                "SELECT * FROM tag_groups WHERE id = ?1",
                params![group_id.to_string()],
                parse_tag_group_row,
            );

            match result {
                Ok(group) => Ok(Some(group)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    /// All tag groups owned by a user, oldest first.
    pub fn list_tag_groups(&self, user_id: &str) -> Result<Vec<TagGroup>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT * FROM tag_groups WHERE user_id = ?1 ORDER BY rowid")?;
            let groups = stmt
                .query_map(params![user_id], parse_tag_group_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(groups)
        })
    }
}
