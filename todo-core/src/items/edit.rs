use serde::{Deserialize, Serialize};
use todo_model::ItemId;

/// In-place editing session. At most one item is edited at a time and the
/// draft only exists while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditSlot {
    #[default]
    Viewing,
    Editing {
        id: ItemId,
        draft: String,
    },
}

impl EditSlot {
    pub fn active_id(&self) -> Option<ItemId> {
        match self {
            EditSlot::Viewing => None,
            EditSlot::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditSlot::Viewing => None,
            EditSlot::Editing { draft, .. } => Some(draft.as_str()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSlot::Editing { .. })
    }

    pub fn is_editing_item(&self, item_id: ItemId) -> bool {
        self.active_id() == Some(item_id)
    }

    pub(crate) fn take(&mut self) -> EditSlot {
        std::mem::take(self)
    }
}
