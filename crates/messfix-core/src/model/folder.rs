use indexmap::IndexSet;
use messfix_core_types::EntityId;
use serde::{Deserialize, Serialize};

/// Folder - groups papers inside a box
///
/// The paper set keeps insertion order and holds each id at most once.
/// A folder whose paper set becomes empty is removed from the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: EntityId,

    /// Owning box
    pub box_id: EntityId,

    /// Papers in insertion order
    pub paper_ids: IndexSet<EntityId>,
}

impl Folder {
    /// Create an empty folder owned by `box_id`
    pub fn new(id: EntityId, box_id: EntityId) -> Self {
        Self {
            id,
            box_id,
            paper_ids: IndexSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paper_ids.is_empty()
    }

    pub fn contains_paper(&self, paper_id: EntityId) -> bool {
        self.paper_ids.contains(&paper_id)
    }

    /// Append a paper unless it is already a member
    ///
    /// Returns `true` if the paper was appended.
    pub fn add_paper(&mut self, paper_id: EntityId) -> bool {
        self.paper_ids.insert(paper_id)
    }

    /// Remove a paper, preserving the order of the remaining ones
    pub fn remove_paper(&mut self, paper_id: EntityId) -> bool {
        self.paper_ids.shift_remove(&paper_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_paper_keeps_insertion_order() {
        let mut folder = Folder::new(1, 1);
        folder.add_paper(9);
        folder.add_paper(2);
        folder.add_paper(5);
        let order: Vec<_> = folder.paper_ids.iter().copied().collect();
        assert_eq!(order, vec![9, 2, 5]);
    }

    #[test]
    fn test_add_paper_rejects_duplicates() {
        let mut folder = Folder::new(1, 1);
        assert!(folder.add_paper(3));
        assert!(!folder.add_paper(3));
        assert_eq!(folder.paper_ids.len(), 1);
    }

    #[test]
    fn test_remove_paper_preserves_order() {
        let mut folder = Folder::new(1, 1);
        for id in [4, 5, 6] {
            folder.add_paper(id);
        }
        assert!(folder.remove_paper(5));
        assert!(!folder.remove_paper(5));
        let order: Vec<_> = folder.paper_ids.iter().copied().collect();
        assert_eq!(order, vec![4, 6]);
    }
}
