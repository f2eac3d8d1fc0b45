//! [`WorkspaceStore`] backed by a SQLite connection and an owning user.

use super::{tag_groups, tags, todos};
use crate::store::{TagCreate, TagGroupCreate, TodoCreate, WorkspaceStore};
use anyhow::Result;
use rusqlite::Connection;
use uuid::Uuid;

/// Create operations that run as one user on a borrowed connection.
///
/// Usually built over a transaction by [`super::Database::in_user_transaction`].
pub struct UserScope<'c> {
    conn: &'c Connection,
    user_id: &'c str,
}

impl<'c> UserScope<'c> {
    pub fn new(conn: &'c Connection, user_id: &'c str) -> Self {
        Self { conn, user_id }
    }

    pub fn user_id(&self) -> &str {
        self.user_id
    }
}

impl WorkspaceStore for UserScope<'_> {
    fn create_tag_group(&mut self, group: TagGroupCreate) -> Result<Uuid> {
        tag_groups::insert_tag_group(self.conn, self.user_id, &group)
    }

    fn create_tag(&mut self, tag: TagCreate) -> Result<Uuid> {
        tags::insert_tag(self.conn, self.user_id, &tag)
    }

    fn create_todo(&mut self, todo: TodoCreate) -> Result<Uuid> {
        todos::insert_todo(self.conn, self.user_id, &todo)
    }
}
