//! Tag storage operations.

use super::tag_groups::ensure_owned_group;
use super::{Database, now_ms, uuid_column};
use crate::store::TagCreate;
use crate::types::Tag;
use anyhow::Result;
use rusqlite::{Connection, Row, params};
use uuid::Uuid;

pub fn parse_tag_row(row: &Row) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: uuid_column(row, "id")?,
        user_id: row.get("user_id")?,
        group_id: uuid_column(row, "group_id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a tag into one of `user_id`'s tag groups.
pub fn insert_tag(conn: &Connection, user_id: &str, tag: &TagCreate) -> Result<Uuid> {
    ensure_owned_group(conn, user_id, tag.group_id)?;

    let id = Uuid::now_v7();
    conn.execute(
        "INSERT INTO tags (id, user_id, group_id, name, color, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id.to_string(),
            user_id,
            tag.group_id.to_string(),
            tag.name,
            tag.color,
            tag.description,
            now_ms(),
        ],
    )?;

    Ok(id)
}

impl Database {
    /// Tags of a group, in creation order.
    pub fn get_tags_by_group(&self, group_id: Uuid) -> Result<Vec<Tag>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT * FROM tags WHERE group_id = ?1 ORDER BY rowid")?;
            let tags = stmt
                .query_map(params![group_id.to_string()], parse_tag_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tags)
        })
    }
}
