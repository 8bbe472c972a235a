pub mod edit;

pub use edit::EditSlot;

use crate::validation::Validator;
use todo_model::{Item, ItemId};

/// Ordered item list plus the single edit slot.
///
/// Every mutator silently ignores unknown ids and reports whether any state
/// changed, so a caller can decide whether to re-render.
#[derive(Debug)]
pub struct ItemListStore {
    items: Vec<Item>,
    edit: EditSlot,
    next_item_id: u64,
}

impl Default for ItemListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            edit: EditSlot::Viewing,
            next_item_id: 1,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn edit_slot(&self) -> &EditSlot {
        &self.edit
    }

    // Ids come from a per-store counter and are never handed out twice,
    // including ids of removed items.
    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Appends `raw_text` verbatim. Blank input is ignored and yields `None`.
    pub fn add(&mut self, raw_text: impl Into<String>) -> Option<ItemId> {
        let text = raw_text.into();
        if Validator::is_blank(&text) {
            return None;
        }
        let id = self.allocate_id();
        log::debug!("Adding item {id}");
        self.items.push(Item::new(id, text));
        Some(id)
    }

    /// Removing the item under edit also cancels the edit.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        log::debug!("Removed item {id}");
        if self.edit.is_editing_item(id) {
            log::debug!("Edit of item {id} cancelled by removal");
            self.edit = EditSlot::Viewing;
        }
        true
    }

    pub fn toggle_complete(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.completed = !item.completed;
        log::debug!("Item {id} completed={}", item.completed);
        true
    }

    /// Starts editing `id`, replacing any other in-progress edit without
    /// saving it. Unknown ids leave the slot untouched.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item(id) else {
            return false;
        };
        let draft = item.text.clone();
        if let Some(previous) = self.edit.active_id().filter(|prev| *prev != id) {
            log::debug!("Discarding uncommitted draft for item {previous}");
        }
        log::debug!("Editing item {id}");
        self.edit = EditSlot::Editing { id, draft };
        true
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit {
            EditSlot::Editing { draft, .. } => {
                *draft = text.into();
                true
            }
            EditSlot::Viewing => false,
        }
    }

    /// Writes the draft verbatim, empty drafts included, and returns to viewing.
    pub fn commit_edit(&mut self) -> bool {
        let EditSlot::Editing { id, draft } = self.edit.take() else {
            return false;
        };
        match self.item_mut(id) {
            Some(item) => {
                item.text = draft;
                log::debug!("Committed edit of item {id}");
            }
            None => log::warn!("Edit target {id} no longer exists, draft dropped"),
        }
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        match self.edit.take() {
            EditSlot::Editing { id, .. } => {
                log::debug!("Cancelled edit of item {id}");
                true
            }
            EditSlot::Viewing => false,
        }
    }
}
