use preference_store::{MemoryStore, StoreConfig};
use todo_core::{
    EditSlot, PreferenceLoad, PreferenceStore, PreferencesConfig, ThemeMode, TodoConfig,
    TodoSession, THEME_KEY,
};

fn memory_session() -> TodoSession {
    TodoSession::new(PreferenceStore::open(Box::new(MemoryStore::new())))
}

#[test]
fn submit_clears_input_only_on_success() {
    let mut session = memory_session();

    session.set_new_item_text("   ");
    assert_eq!(session.submit_new_item(), None);
    assert_eq!(session.new_item_text(), "   ");
    assert!(session.items().is_empty());

    session.set_new_item_text("buy milk");
    let id = session.submit_new_item().expect("item added");
    assert_eq!(session.new_item_text(), "");
    assert_eq!(session.items().item(id).unwrap().text, "buy milk");
}

#[test]
fn revision_advances_only_on_change() {
    let mut session = memory_session();
    assert_eq!(session.revision(), 0);

    session.add("");
    session.remove(todo_core::ItemId(5));
    session.commit_edit();
    assert_eq!(session.revision(), 0);

    let id = session.add("task").unwrap();
    assert_eq!(session.revision(), 1);
    session.toggle_complete(id);
    assert_eq!(session.revision(), 2);
    session.toggle_theme();
    assert_eq!(session.revision(), 3);

    session.set_new_item_text("a");
    session.set_new_item_text("a");
    assert_eq!(session.revision(), 4);
}

#[test]
fn snapshot_reflects_all_state() {
    let mut session = memory_session();
    let id = session.add("write report").unwrap();
    session.begin_edit(id);
    session.update_draft("write summary");
    session.set_new_item_text("next");
    session.toggle_theme();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].text, "write report");
    assert_eq!(
        snapshot.editing,
        EditSlot::Editing {
            id,
            draft: "write summary".to_string(),
        }
    );
    assert_eq!(snapshot.theme, ThemeMode::Dark);
    assert_eq!(snapshot.new_item_text, "next");
    assert_eq!(snapshot.revision, session.revision());
}

#[test]
fn snapshot_serializes_for_view_layer() {
    let mut session = memory_session();
    let id = session.add("x").unwrap();
    session.begin_edit(id);

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(value["theme"], "light");
    assert_eq!(value["editing"]["state"], "editing");
    assert_eq!(value["editing"]["id"], 1);
    assert_eq!(value["editing"]["draft"], "x");
    assert_eq!(value["items"][0]["completed"], false);
}

#[test]
fn session_edit_flow() {
    let mut session = memory_session();
    let id = session.add("old").unwrap();

    session.begin_edit(id);
    session.update_draft("new");
    session.commit_edit();

    assert_eq!(session.items().item(id).unwrap().text, "new");
    assert_eq!(session.edit_slot(), &EditSlot::Viewing);
}

#[test]
fn session_remove_during_edit_returns_to_viewing() {
    let mut session = memory_session();
    let id = session.add("doomed").unwrap();
    session.begin_edit(id);
    assert!(session.remove(id));
    assert_eq!(session.edit_slot(), &EditSlot::Viewing);

    session.begin_edit(id);
    assert_eq!(session.edit_slot(), &EditSlot::Viewing);
}

#[test]
fn session_from_default_config_uses_memory_and_light() {
    let session = TodoSession::from_config(&TodoConfig::default());
    assert_eq!(session.theme(), ThemeMode::Light);
}

#[test]
fn eager_config_applies_persisted_theme_immediately() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, br#"{"theme": "dark"}"#).expect("write");

    let config = TodoConfig {
        preferences: PreferencesConfig {
            store: StoreConfig::json_file(&path),
            load: PreferenceLoad::Eager,
        },
    };
    let session = TodoSession::from_config(&config);
    assert_eq!(session.theme(), ThemeMode::Dark);
    assert_eq!(session.revision(), 0);
}

#[test]
fn deferred_config_shows_default_until_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, br#"{"theme": "dark"}"#).expect("write");

    let config = TodoConfig {
        preferences: PreferencesConfig {
            store: StoreConfig::json_file(&path),
            load: PreferenceLoad::Deferred,
        },
    };
    let mut session = TodoSession::from_config(&config);
    assert_eq!(session.theme(), ThemeMode::Light);

    assert_eq!(session.load_preference(), ThemeMode::Dark);
    assert_eq!(session.revision(), 1);
    assert_eq!(session.load_preference(), ThemeMode::Dark);
    assert_eq!(session.revision(), 1);
}

#[test]
fn toggle_theme_persists_through_config_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");
    let config = TodoConfig {
        preferences: PreferencesConfig {
            store: StoreConfig::json_file(&path),
            load: PreferenceLoad::Eager,
        },
    };

    let mut session = TodoSession::from_config(&config);
    session.toggle_theme();
    assert_eq!(
        session.preference().store().get(THEME_KEY).unwrap(),
        Some("dark".to_string())
    );

    let restarted = TodoSession::from_config(&config);
    assert_eq!(restarted.theme(), ThemeMode::Dark);
    assert!(restarted.items().is_empty());
}
