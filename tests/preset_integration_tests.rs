//! Integration tests for preset listing, loading and initialization.
//!
//! These tests use an in-memory SQLite database and either the bundled
//! presets or temporary preset directories.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use todo_presets::db::Database;
use todo_presets::error::PresetError;
use todo_presets::preset::{PresetRepository, count_todos};
use todo_presets::service::PresetService;
use uuid::Uuid;

const STUDY_SCENARIO: &str = r##"{"name":"study","tag_group":{"name":"Study","color":"#FF0000"},"tags":[{"name":"Math","color":"#00FF00"}],"todos":[{"title":"Read","tag_names":["Math"],"children":[{"title":"Chapter 1"}]}]}"##;

/// Helper to create a fresh in-memory database for testing.
fn setup_db() -> Database {
    Database::open_in_memory().expect("Failed to create in-memory database")
}

fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("presets")
}

fn bundled_service(user_id: &str) -> PresetService {
    PresetService::new(PresetRepository::new(bundled_dir()), setup_db(), user_id)
}

fn temp_service(files: &[(&str, &str)]) -> (TempDir, PresetService) {
    let dir = TempDir::new().unwrap();
    for (file, content) in files {
        std::fs::write(dir.path().join(file), content).unwrap();
    }
    let service = PresetService::new(PresetRepository::new(dir.path()), setup_db(), "alice");
    (dir, service)
}

mod bundled_preset_tests {
    use super::*;

    #[test]
    fn list_includes_study_and_project() {
        let service = bundled_service("alice");

        let presets = service.list_presets().unwrap();
        let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();

        assert!(names.contains(&"study"));
        assert!(names.contains(&"project"));
        for preset in &presets {
            assert!(!preset.name.is_empty());
            assert!(preset.tag_count >= 1);
            assert!(preset.todo_count >= 1);
        }
    }

    #[test]
    fn get_study_preset() {
        let service = bundled_service("alice");

        let preset = service.get_preset("study").unwrap();

        assert_eq!(preset.name, "study");
        assert!(!preset.tags.is_empty());
        assert!(!preset.todos.is_empty());
    }

    #[test]
    fn listing_counts_match_loaded_presets() {
        let service = bundled_service("alice");

        for info in service.list_presets().unwrap() {
            let preset = service.get_preset(&info.name).unwrap();
            assert_eq!(info.tag_count, preset.tags.len());
            assert_eq!(info.todo_count, count_todos(&preset.todos));
        }
    }

    #[test]
    fn initialize_every_bundled_preset() {
        let service = bundled_service("alice");

        for info in service.list_presets().unwrap() {
            let result = service.initialize_from_preset(&info.name).unwrap();
            assert_eq!(result.preset_name, info.name);
            assert_eq!(result.tags_created, info.tag_count);
            assert_eq!(result.todos_created, info.todo_count);
        }
    }
}

mod initialize_tests {
    use super::*;

    #[test]
    fn study_scenario_creates_group_tag_and_two_todos() {
        let (_dir, service) = temp_service(&[("study.json", STUDY_SCENARIO)]);
        let db = service.database();

        let result = service.initialize_from_preset("study").unwrap();

        assert_eq!(result.preset_name, "study");
        assert_eq!(result.tags_created, 1);
        assert_eq!(result.todos_created, 2);

        let groups = db.list_tag_groups("alice").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, result.tag_group_id);
        assert_eq!(groups[0].name, "Study");
        assert!(groups[0].is_todo_group);

        let tags = db.get_tags_by_group(result.tag_group_id).unwrap();
        assert_eq!(tags.len(), 1);
        let math = &tags[0];
        assert_eq!(math.name, "Math");

        let todos = db.get_todos_by_group(result.tag_group_id).unwrap();
        assert_eq!(todos.len(), 2);
        let read = todos.iter().find(|t| t.title == "Read").unwrap();
        let chapter = todos.iter().find(|t| t.title == "Chapter 1").unwrap();
        assert!(read.is_root());
        assert_eq!(read.tag_ids, vec![math.id]);
        assert_eq!(chapter.parent_id, Some(read.id));
        assert!(chapter.tag_ids.is_empty());
    }

    #[test]
    fn creates_exactly_counted_records() {
        let db = setup_db();
        let repo = PresetRepository::new(bundled_dir());
        let service = PresetService::new(repo.clone(), db.clone(), "alice");
        let preset = repo.load("project").unwrap();

        let result = service.initialize_from_preset("project").unwrap();

        assert_eq!(db.list_tag_groups("alice").unwrap().len(), 1);
        assert_eq!(
            db.get_tags_by_group(result.tag_group_id).unwrap().len(),
            preset.tags.len()
        );
        assert_eq!(
            db.get_todos_by_group(result.tag_group_id).unwrap().len(),
            count_todos(&preset.todos)
        );
    }

    #[test]
    fn parents_are_created_before_children() {
        let db = setup_db();
        let service = PresetService::new(PresetRepository::new(bundled_dir()), db.clone(), "alice");

        let result = service.initialize_from_preset("study").unwrap();
        let todos = db.get_todos_by_group(result.tag_group_id).unwrap();

        let mut seen: HashSet<Uuid> = HashSet::new();
        for todo in &todos {
            if let Some(parent) = todo.parent_id {
                assert!(seen.contains(&parent), "{} has a forward parent", todo.title);
            }
            seen.insert(todo.id);
        }
        assert!(todos.iter().any(|t| t.is_root()));
        assert!(todos.iter().any(|t| !t.is_root()));
        assert!(todos.iter().any(|t| !t.tag_ids.is_empty()));
    }

    #[test]
    fn unknown_tag_names_are_omitted() {
        let preset = r##"{"name": "loose",
            "tag_group": {"name": "G", "color": "#101010"},
            "tags": [{"name": "Known", "color": "#202020"}],
            "todos": [{"title": "Mixed", "tag_names": ["Known", "Unknown"]},
                      {"title": "Ghost", "tag_names": ["Nobody"]}]}"##;
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("loose.json"), preset).unwrap();
        let db = setup_db();
        let service = PresetService::new(PresetRepository::new(dir.path()), db.clone(), "alice");

        let result = service.initialize_from_preset("loose").unwrap();

        assert_eq!(result.todos_created, 2);
        let tags = db.get_tags_by_group(result.tag_group_id).unwrap();
        let todos = db.get_todos_by_group(result.tag_group_id).unwrap();
        assert_eq!(todos[0].tag_ids, vec![tags[0].id]);
        assert!(todos[1].tag_ids.is_empty());
    }

    #[test]
    fn records_are_owned_by_the_service_user() {
        let db = setup_db();
        let repo = PresetRepository::new(bundled_dir());
        let alice = PresetService::new(repo.clone(), db.clone(), "alice");
        let bob = PresetService::new(repo, db.clone(), "bob");

        let a = alice.initialize_from_preset("study").unwrap();
        let b = bob.initialize_from_preset("study").unwrap();

        assert_ne!(a.tag_group_id, b.tag_group_id);
        assert_eq!(db.list_tag_groups("alice").unwrap().len(), 1);
        assert_eq!(db.list_tag_groups("bob").unwrap().len(), 1);
        let todos = db.get_todos_by_group(b.tag_group_id).unwrap();
        assert!(todos.iter().all(|t| t.user_id == "bob"));
    }

    #[test]
    fn repeated_initialization_creates_fresh_records() {
        let db = setup_db();
        let service = PresetService::new(PresetRepository::new(bundled_dir()), db.clone(), "alice");

        let first = service.initialize_from_preset("study").unwrap();
        let second = service.initialize_from_preset("study").unwrap();

        assert_ne!(first.tag_group_id, second.tag_group_id);
        assert_eq!(db.list_tag_groups("alice").unwrap().len(), 2);
    }

    #[test]
    fn failing_todo_leaves_no_rows() {
        let preset = r##"{"name": "bad",
            "tag_group": {"name": "G", "color": "#101010"},
            "tags": [{"name": "T", "color": "#202020"}],
            "todos": [{"title": "Ok", "children": [{"title": ""}]}]}"##;
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.json"), preset).unwrap();
        let db = setup_db();
        let service = PresetService::new(PresetRepository::new(dir.path()), db.clone(), "alice");

        let err = service.initialize_from_preset("bad").unwrap_err();

        assert!(matches!(err, PresetError::Storage(_)));
        assert!(db.list_tag_groups("alice").unwrap().is_empty());
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn get_unknown_preset_is_not_found() {
        let service = bundled_service("alice");

        let err = service.get_preset("non_existent_preset").unwrap_err();

        match &err {
            PresetError::NotFound { name } => assert_eq!(name, "non_existent_preset"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(err.to_string().contains("non_existent_preset"));
    }

    #[test]
    fn initialize_unknown_preset_is_not_found() {
        let db = setup_db();
        let service = PresetService::new(PresetRepository::new(bundled_dir()), db.clone(), "alice");

        let err = service.initialize_from_preset("non_existent_preset").unwrap_err();

        assert!(matches!(err, PresetError::NotFound { ref name } if name == "non_existent_preset"));
        assert!(db.list_tag_groups("alice").unwrap().is_empty());
    }

    #[test]
    fn initialize_malformed_preset_fails() {
        let (_dir, service) = temp_service(&[(
            "broken.json",
            r##"{"name": "broken", "tag_group": {"name": "G", "color": "not-a-color"}}"##,
        )]);

        let err = service.initialize_from_preset("broken").unwrap_err();

        assert!(matches!(err, PresetError::Malformed { .. }));
    }

    #[test]
    fn listing_skips_malformed_but_keeps_valid() {
        let (_dir, service) = temp_service(&[
            ("study.json", STUDY_SCENARIO),
            ("broken.json", "{"),
        ]);

        let presets = service.list_presets().unwrap();

        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].name, "study");
        assert_eq!(presets[0].todo_count, 2);
    }

    #[test]
    fn listing_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let service = PresetService::new(
            PresetRepository::new(dir.path().join("absent")),
            setup_db(),
            "alice",
        );

        assert!(service.list_presets().unwrap().is_empty());
    }
}
