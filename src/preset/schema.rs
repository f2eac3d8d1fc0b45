//! Preset document schema.
//!
//! A preset is a JSON template holding one tag group, a flat list of tags and a
//! forest of todos. Colors are validated while deserializing, so a document with
//! a bad color fails to parse as a whole.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use uuid::Uuid;

static HEX_COLOR: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color pattern"));

/// Check a `#RRGGBB` color code.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if is_hex_color(&value) {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "invalid color '{}': expected #RRGGBB",
            value
        )))
    }
}

fn default_true() -> bool {
    true
}

/// Tag group definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTagGroup {
    pub name: String,
    #[serde(deserialize_with = "deserialize_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_ratios: Option<BTreeMap<String, f64>>,
    #[serde(default = "default_true")]
    pub is_todo_group: bool,
}

/// Tag definition. Belongs to the preset's tag group once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTag {
    pub name: String,
    #[serde(deserialize_with = "deserialize_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Todo definition, possibly with nested children.
///
/// `tag_names` refer to entries of [`Preset::tags`]; names that do not match any
/// tag are dropped when the preset is materialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PresetTodo>>,
}

impl PresetTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the child todos (builder pattern).
    pub fn with_children(mut self, children: Vec<PresetTodo>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the tag names (builder pattern).
    pub fn with_tags(mut self, tag_names: &[&str]) -> Self {
        self.tag_names = Some(tag_names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Child todos, empty for a leaf.
    pub fn children(&self) -> &[PresetTodo] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// Root of a preset document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tag_group: PresetTagGroup,
    #[serde(default)]
    pub tags: Vec<PresetTag>,
    #[serde(default)]
    pub todos: Vec<PresetTodo>,
}

impl Preset {
    /// Parse a preset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Summary of a preset for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tag_count: usize,
    /// Every todo in the tree, descendants included.
    pub todo_count: usize,
}

impl From<&Preset> for PresetInfo {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name.clone(),
            description: preset.description.clone(),
            tag_count: preset.tags.len(),
            todo_count: super::count_todos(&preset.todos),
        }
    }
}

/// Outcome of materializing a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetInitializeResult {
    pub preset_name: String,
    pub tag_group_id: Uuid,
    pub tags_created: usize,
    pub todos_created: usize,
}
