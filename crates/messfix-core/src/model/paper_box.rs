use indexmap::IndexSet;
use messfix_core_types::EntityId;
use serde::{Deserialize, Serialize};

/// Box - the top-level container, holding folders
///
/// Named `PaperBox` to stay clear of `std::boxed::Box`. A box whose folder
/// set becomes empty is removed from the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperBox {
    pub id: EntityId,

    /// Folders in insertion order
    pub folder_ids: IndexSet<EntityId>,
}

impl PaperBox {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            folder_ids: IndexSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folder_ids.is_empty()
    }

    pub fn contains_folder(&self, folder_id: EntityId) -> bool {
        self.folder_ids.contains(&folder_id)
    }

    /// Append a folder unless it is already a member
    pub fn add_folder(&mut self, folder_id: EntityId) -> bool {
        self.folder_ids.insert(folder_id)
    }

    /// Remove a folder, preserving the order of the remaining ones
    pub fn remove_folder(&mut self, folder_id: EntityId) -> bool {
        self.folder_ids.shift_remove(&folder_id)
    }
}
