//! Preset materialization.
//!
//! Creates one tag group, its tags and the todo tree of a preset through a
//! [`WorkspaceStore`]. Todos are created depth-first in document order, so a
//! parent row always exists before its children reference it.

use super::schema::{Preset, PresetInitializeResult, PresetTodo};
use crate::store::{TagCreate, TagGroupCreate, TodoCreate, WorkspaceStore};
use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Count every todo in a forest, descendants included.
pub fn count_todos(todos: &[PresetTodo]) -> usize {
    todos.len() + todos.iter().map(|t| count_todos(t.children())).sum::<usize>()
}

/// Create the records described by `preset` in `store`.
///
/// Fails on the first rejected create request. Rows created before the failure
/// are only rolled back if the store runs inside a transaction.
pub fn materialize<S>(
    preset_name: &str,
    preset: &Preset,
    store: &mut S,
) -> Result<PresetInitializeResult>
where
    S: WorkspaceStore + ?Sized,
{
    let group = &preset.tag_group;
    let tag_group_id = store
        .create_tag_group(TagGroupCreate {
            name: group.name.clone(),
            color: group.color.clone(),
            description: group.description.clone(),
            goal_ratios: group.goal_ratios.clone(),
            is_todo_group: group.is_todo_group,
        })
        .with_context(|| format!("Failed to create tag group '{}'", group.name))?;
    debug!(%tag_group_id, name = %group.name, "Created tag group");

    // Later duplicates overwrite earlier ones
    let mut tag_ids: HashMap<&str, Uuid> = HashMap::new();
    for tag in &preset.tags {
        let tag_id = store
            .create_tag(TagCreate {
                name: tag.name.clone(),
                color: tag.color.clone(),
                description: tag.description.clone(),
                group_id: tag_group_id,
            })
            .with_context(|| format!("Failed to create tag '{}'", tag.name))?;
        debug!(%tag_id, name = %tag.name, "Created tag");
        tag_ids.insert(tag.name.as_str(), tag_id);
    }

    let mut builder = TodoBuilder {
        store,
        tag_group_id,
        tag_ids: &tag_ids,
    };
    let todos_created = builder.create_all(&preset.todos, None)?;

    info!(
        preset = preset_name,
        %tag_group_id,
        tags_created = preset.tags.len(),
        todos_created,
        "Materialized preset"
    );

    Ok(PresetInitializeResult {
        preset_name: preset_name.to_string(),
        tag_group_id,
        tags_created: preset.tags.len(),
        todos_created,
    })
}

struct TodoBuilder<'a, S: ?Sized> {
    store: &'a mut S,
    tag_group_id: Uuid,
    tag_ids: &'a HashMap<&'a str, Uuid>,
}

impl<S: WorkspaceStore + ?Sized> TodoBuilder<'_, S> {
    /// Create `todos` under `parent_id` and recurse into their children.
    /// Returns the number of todos created, descendants included.
    fn create_all(&mut self, todos: &[PresetTodo], parent_id: Option<Uuid>) -> Result<usize> {
        let mut created = 0;

        for todo in todos {
            let tag_ids = self.resolve_tags(todo);
            let todo_id = self
                .store
                .create_todo(TodoCreate {
                    title: todo.title.clone(),
                    description: todo.description.clone(),
                    tag_group_id: self.tag_group_id,
                    tag_ids,
                    parent_id,
                })
                .with_context(|| format!("Failed to create todo '{}'", todo.title))?;
            debug!(%todo_id, parent_id = ?parent_id, title = %todo.title, "Created todo");
            created += 1;

            created += self.create_all(todo.children(), Some(todo_id))?;
        }

        Ok(created)
    }

    fn resolve_tags(&self, todo: &PresetTodo) -> Option<Vec<Uuid>> {
        let names = todo.tag_names.as_deref().filter(|names| !names.is_empty())?;
        Some(
            names
                .iter()
                .filter_map(|name| self.tag_ids.get(name.as_str()).copied())
                .collect(),
        )
    }
}
