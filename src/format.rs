//! Output formatting utilities for markdown and JSON.

use crate::preset::{Preset, PresetInfo, PresetInitializeResult, PresetTodo};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    #[value(alias = "md")]
    Markdown,
}

/// Pretty JSON for any serializable result.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Format the preset catalog as a markdown table.
pub fn format_preset_list_markdown(presets: &[PresetInfo]) -> String {
    if presets.is_empty() {
        return "No presets available.\n".to_string();
    }

    let mut md = String::new();
    md.push_str("| name | tags | todos | description |\n");
    md.push_str("|------|------|-------|-------------|\n");
    for info in presets {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            info.name,
            info.tag_count,
            info.todo_count,
            info.description.as_deref().unwrap_or("")
        ));
    }
    md
}

/// Format one preset, including its todo tree.
pub fn format_preset_markdown(preset: &Preset) -> String {
    let mut md = String::new();

    md.push_str(&format!("## Preset: {}\n", preset.name));
    if let Some(ref desc) = preset.description {
        md.push_str(desc);
        md.push('\n');
    }

    let group = &preset.tag_group;
    md.push_str(&format!("\n### Tag group: {} ({})\n", group.name, group.color));
    if let Some(ref desc) = group.description {
        md.push_str(&format!("- **description**: {}\n", desc));
    }
    md.push_str(&format!("- **todo group**: {}\n", group.is_todo_group));
    if let Some(ref ratios) = group.goal_ratios {
        let parts: Vec<String> = ratios.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        md.push_str(&format!("- **goal ratios**: {}\n", parts.join(", ")));
    }

    if !preset.tags.is_empty() {
        md.push_str("\n### Tags\n");
        for tag in &preset.tags {
            md.push_str(&format!("- {} ({})", tag.name, tag.color));
            if let Some(ref desc) = tag.description {
                md.push_str(&format!(": {}", desc));
            }
            md.push('\n');
        }
    }

    if !preset.todos.is_empty() {
        md.push_str("\n### Todos\n");
        push_todo_tree(&mut md, &preset.todos, 0);
    }

    md
}

fn push_todo_tree(md: &mut String, todos: &[PresetTodo], depth: usize) {
    for todo in todos {
        md.push_str(&"  ".repeat(depth));
        md.push_str(&format!("- {}", todo.title));
        if let Some(names) = todo.tag_names.as_ref().filter(|n| !n.is_empty()) {
            let tags: Vec<String> = names.iter().map(|n| format!("`{}`", n)).collect();
            md.push_str(&format!(" [{}]", tags.join(", ")));
        }
        md.push('\n');
        push_todo_tree(md, todo.children(), depth + 1);
    }
}

/// Format the outcome of an initialization.
pub fn format_init_result_markdown(result: &PresetInitializeResult) -> String {
    let mut md = String::new();
    md.push_str(&format!("## Initialized preset: {}\n", result.preset_name));
    md.push_str(&format!("- **tag_group_id**: `{}`\n", result.tag_group_id));
    md.push_str(&format!("- **tags_created**: {}\n", result.tags_created));
    md.push_str(&format!("- **todos_created**: {}\n", result.todos_created));
    md
}

/// Format what an initialization would create.
pub fn format_dry_run_markdown(info: &PresetInfo) -> String {
    let mut md = String::new();
    md.push_str(&format!("## Dry run: {}\n", info.name));
    md.push_str("- **tag groups**: 1\n");
    md.push_str(&format!("- **tags**: {}\n", info.tag_count));
    md.push_str(&format!("- **todos**: {}\n", info.todo_count));
    md
}
