use indexmap::IndexMap;
use messfix_core_types::EntityId;
use serde::{Deserialize, Serialize};

use crate::errors::{MessFixError, Result};
use crate::model::{Folder, Paper, PaperBox};

/// Arena of boxes, folders and papers keyed by id
///
/// Used both for the persistent hierarchy that survives across calls and
/// for the transient hierarchy rebuilt from every snapshot. Back-references
/// (`Paper::folder_id`, `Folder::box_id`) are plain ids, so the structure
/// has no ownership cycles.
///
/// All three maps keep insertion order; removal shifts later entries down
/// so iteration order stays stable. Reconciliation tie-breaks depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub(crate) boxes: IndexMap<EntityId, PaperBox>,
    pub(crate) folders: IndexMap<EntityId, Folder>,
    pub(crate) papers: IndexMap<EntityId, Paper>,
}

impl Hierarchy {
    /// Create a new empty hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty() && self.folders.is_empty() && self.papers.is_empty()
    }

    /// Get a box by ID
    ///
    /// # Errors
    ///
    /// Returns `BoxNotFound` if the box doesn't exist.
    pub fn get_box(&self, id: EntityId) -> Result<&PaperBox> {
        self.boxes
            .get(&id)
            .ok_or(MessFixError::BoxNotFound { box_id: id })
    }

    /// Get a mutable reference to a box by ID
    ///
    /// # Errors
    ///
    /// Returns `BoxNotFound` if the box doesn't exist.
    pub fn get_box_mut(&mut self, id: EntityId) -> Result<&mut PaperBox> {
        self.boxes
            .get_mut(&id)
            .ok_or(MessFixError::BoxNotFound { box_id: id })
    }

    /// Get a folder by ID
    ///
    /// # Errors
    ///
    /// Returns `FolderNotFound` if the folder doesn't exist.
    pub fn get_folder(&self, id: EntityId) -> Result<&Folder> {
        self.folders
            .get(&id)
            .ok_or(MessFixError::FolderNotFound { folder_id: id })
    }

    /// Get a mutable reference to a folder by ID
    ///
    /// # Errors
    ///
    /// Returns `FolderNotFound` if the folder doesn't exist.
    pub fn get_folder_mut(&mut self, id: EntityId) -> Result<&mut Folder> {
        self.folders
            .get_mut(&id)
            .ok_or(MessFixError::FolderNotFound { folder_id: id })
    }

    /// Get a paper by ID
    ///
    /// # Errors
    ///
    /// Returns `PaperNotFound` if the paper doesn't exist.
    pub fn get_paper(&self, id: EntityId) -> Result<&Paper> {
        self.papers
            .get(&id)
            .ok_or(MessFixError::PaperNotFound { paper_id: id })
    }

    /// Get a mutable reference to a paper by ID
    ///
    /// # Errors
    ///
    /// Returns `PaperNotFound` if the paper doesn't exist.
    pub fn get_paper_mut(&mut self, id: EntityId) -> Result<&mut Paper> {
        self.papers
            .get_mut(&id)
            .ok_or(MessFixError::PaperNotFound { paper_id: id })
    }

    pub fn contains_box(&self, id: EntityId) -> bool {
        self.boxes.contains_key(&id)
    }

    pub fn contains_folder(&self, id: EntityId) -> bool {
        self.folders.contains_key(&id)
    }

    pub fn contains_paper(&self, id: EntityId) -> bool {
        self.papers.contains_key(&id)
    }

    /// Current folder of a known paper, if the paper is known at all
    pub fn folder_of(&self, paper_id: EntityId) -> Option<EntityId> {
        self.papers.get(&paper_id).map(|p| p.folder_id)
    }

    /// Boxes in map iteration order
    pub fn boxes(&self) -> impl Iterator<Item = &PaperBox> {
        self.boxes.values()
    }

    /// Folders in map iteration order
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    /// Papers in map iteration order
    pub fn papers(&self) -> impl Iterator<Item = &Paper> {
        self.papers.values()
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Number of known papers
    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    /// Insert or overwrite a box, keeping its map position if it existed
    pub fn insert_box(&mut self, paper_box: PaperBox) {
        self.boxes.insert(paper_box.id, paper_box);
    }

    /// Insert or overwrite a folder, keeping its map position if it existed
    pub fn insert_folder(&mut self, folder: Folder) {
        self.folders.insert(folder.id, folder);
    }

    /// Insert or overwrite a paper, keeping its map position if it existed
    pub fn insert_paper(&mut self, paper: Paper) {
        self.papers.insert(paper.id, paper);
    }

    pub(crate) fn remove_box(&mut self, id: EntityId) -> Option<PaperBox> {
        self.boxes.shift_remove(&id)
    }

    pub(crate) fn remove_folder(&mut self, id: EntityId) -> Option<Folder> {
        self.folders.shift_remove(&id)
    }

    /// Encode the hierarchy as a JSON value
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hierarchy() {
        let hierarchy = Hierarchy::new();
        assert!(hierarchy.is_empty());
        assert_eq!(hierarchy.box_count(), 0);
        assert_eq!(hierarchy.folder_count(), 0);
        assert_eq!(hierarchy.paper_count(), 0);
    }

    #[test]
    fn test_get_nonexistent_folder() {
        let hierarchy = Hierarchy::new();
        let result = hierarchy.get_folder(7);
        assert!(matches!(
            result,
            Err(MessFixError::FolderNotFound { folder_id: 7 })
        ));
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.insert_box(PaperBox::new(5));
        hierarchy.insert_box(PaperBox::new(1));
        hierarchy.insert_box(PaperBox::new(5));

        let order: Vec<_> = hierarchy.boxes().map(|b| b.id).collect();
        assert_eq!(order, vec![5, 1]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut hierarchy = Hierarchy::new();
        for id in [3, 1, 2] {
            hierarchy.insert_folder(Folder::new(id, 1));
        }
        hierarchy.remove_folder(1);

        let order: Vec<_> = hierarchy.folders().map(|f| f.id).collect();
        assert_eq!(order, vec![3, 2]);
    }

    #[test]
    fn test_json_value_keys_folders_by_id() {
        let mut hierarchy = Hierarchy::new();
        let mut folder = Folder::new(4, 2);
        folder.add_paper(9);
        hierarchy.insert_folder(folder);
        hierarchy.insert_paper(Paper::new(9, 4));

        let value = hierarchy.to_json_value().unwrap();
        assert_eq!(value["folders"]["4"]["box_id"], 2);
        assert_eq!(value["papers"]["9"]["folder_id"], 4);
    }
}
