//! Presets: file-backed templates that bulk-create a tag group, its tags and a
//! todo tree for one user.

pub mod materialize;
pub mod repository;
pub mod schema;

pub use materialize::{count_todos, materialize};
pub use repository::PresetRepository;
pub use schema::{
    Preset, PresetInfo, PresetInitializeResult, PresetTag, PresetTagGroup, PresetTodo,
};
