use crate::config::{PreferenceLoad, TodoConfig};
use crate::items::{EditSlot, ItemListStore};
use crate::preference::PreferenceStore;
use crate::validation::Validator;
use preference_store::StoreFactory;
use serde::Serialize;
use todo_model::{Item, ItemId, ThemeMode};

/// Owned copy of everything the view layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoSnapshot {
    pub items: Vec<Item>,
    pub editing: EditSlot,
    pub theme: ThemeMode,
    pub new_item_text: String,
    pub revision: u64,
}

/// Both stores behind one entry point, sharing a render trigger.
///
/// `revision` advances on every mutation that changed state; the stores
/// themselves never reference each other.
pub struct TodoSession {
    items: ItemListStore,
    preference: PreferenceStore,
    new_item_text: String,
    revision: u64,
}

impl TodoSession {
    pub fn new(preference: PreferenceStore) -> Self {
        Self {
            items: ItemListStore::new(),
            preference,
            new_item_text: String::new(),
            revision: 0,
        }
    }

    pub fn from_config(config: &TodoConfig) -> Self {
        let store = StoreFactory::create(&config.preferences.store);
        let preference = match config.preferences.load {
            PreferenceLoad::Eager => PreferenceStore::open(store),
            PreferenceLoad::Deferred => PreferenceStore::deferred(store),
        };
        Self::new(preference)
    }

    pub fn items(&self) -> &ItemListStore {
        &self.items
    }

    pub fn preference(&self) -> &PreferenceStore {
        &self.preference
    }

    pub fn edit_slot(&self) -> &EditSlot {
        self.items.edit_slot()
    }

    pub fn theme(&self) -> ThemeMode {
        self.preference.mode()
    }

    pub fn new_item_text(&self) -> &str {
        &self.new_item_text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            items: self.items.items().to_vec(),
            editing: self.items.edit_slot().clone(),
            theme: self.preference.mode(),
            new_item_text: self.new_item_text.clone(),
            revision: self.revision,
        }
    }

    fn touch(&mut self, changed: bool) -> bool {
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        changed
    }

    pub fn set_new_item_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = text != self.new_item_text;
        self.new_item_text = text;
        self.touch(changed)
    }

    /// Adds the pending input and clears it. Blank input is kept as typed.
    pub fn submit_new_item(&mut self) -> Option<ItemId> {
        if Validator::is_blank(&self.new_item_text) {
            return None;
        }
        let text = std::mem::take(&mut self.new_item_text);
        let id = self.items.add(text);
        self.touch(id.is_some());
        id
    }

    pub fn add(&mut self, raw_text: impl Into<String>) -> Option<ItemId> {
        let id = self.items.add(raw_text);
        self.touch(id.is_some());
        id
    }

    pub fn remove(&mut self, id: ItemId) -> bool {
        let changed = self.items.remove(id);
        self.touch(changed)
    }

    pub fn toggle_complete(&mut self, id: ItemId) -> bool {
        let changed = self.items.toggle_complete(id);
        self.touch(changed)
    }

    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let changed = self.items.begin_edit(id);
        self.touch(changed)
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        let changed = self.items.update_draft(text);
        self.touch(changed)
    }

    pub fn commit_edit(&mut self) -> bool {
        let changed = self.items.commit_edit();
        self.touch(changed)
    }

    pub fn cancel_edit(&mut self) -> bool {
        let changed = self.items.cancel_edit();
        self.touch(changed)
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.preference.toggle();
        self.touch(true);
        mode
    }

    /// Applies the persisted theme for sessions opened with deferred loading.
    pub fn load_preference(&mut self) -> ThemeMode {
        let before = self.preference.mode();
        let mode = self.preference.load();
        self.touch(mode != before);
        mode
    }
}
