//! Containment maintenance for the persistent hierarchy
//!
//! A folder or box whose child set becomes empty is removed at once, and
//! the removal cascades upward. These helpers are the only places where
//! persistent entities are destroyed.

use messfix_core_types::EntityId;

use crate::errors::Result;
use crate::model::Paper;
use crate::ops::Hierarchy;

/// What a pruning pass removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruned {
    /// The folder still has papers
    Kept,
    /// The folder was vacated and removed; its box still has folders
    Folder,
    /// The folder was removed and that emptied its box too
    FolderAndBox { box_id: EntityId },
}

/// Move a known paper from its current folder to `anchor_id`
///
/// The paper is appended to the anchor folder, then removed from the folder
/// it used to name, which is pruned if that vacated it.
///
/// # Errors
///
/// Returns `PaperNotFound`/`FolderNotFound` if the paper, its old folder or
/// the anchor folder is missing.
pub fn reassign_paper(
    hierarchy: &mut Hierarchy,
    paper_id: EntityId,
    anchor_id: EntityId,
) -> Result<Pruned> {
    hierarchy.get_folder(anchor_id)?;
    let old_folder_id = hierarchy.get_paper(paper_id)?.folder_id;

    hierarchy.get_folder_mut(old_folder_id)?.remove_paper(paper_id);
    hierarchy.insert_paper(Paper::new(paper_id, anchor_id));
    hierarchy.get_folder_mut(anchor_id)?.add_paper(paper_id);

    prune_folder(hierarchy, old_folder_id)
}

/// Remove a folder if its paper set is empty, cascading to its box
///
/// # Errors
///
/// Returns `FolderNotFound` if the folder is missing.
pub fn prune_folder(hierarchy: &mut Hierarchy, folder_id: EntityId) -> Result<Pruned> {
    let folder = hierarchy.get_folder(folder_id)?;
    if !folder.is_empty() {
        return Ok(Pruned::Kept);
    }

    let box_id = folder.box_id;
    hierarchy.remove_folder(folder_id);
    tracing::debug!(folder_id, box_id, "removed vacated folder");

    if detach_folder_from_box(hierarchy, folder_id, box_id) {
        Ok(Pruned::FolderAndBox { box_id })
    } else {
        Ok(Pruned::Folder)
    }
}

/// Remove a folder id from a box's folder set, removing the box if that
/// empties it
///
/// Returns `true` if the box was removed. A box that is not persisted yet
/// is left alone.
pub fn detach_folder_from_box(
    hierarchy: &mut Hierarchy,
    folder_id: EntityId,
    box_id: EntityId,
) -> bool {
    let Some(paper_box) = hierarchy.boxes.get_mut(&box_id) else {
        return false;
    };

    paper_box.remove_folder(folder_id);
    if !paper_box.is_empty() {
        return false;
    }

    hierarchy.remove_box(box_id);
    tracing::debug!(box_id, "removed vacated box");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MessFixError;
    use crate::model::{Folder, PaperBox};

    /// B1 { F1 { P1, P2 }, F2 { P3 } }
    fn sample() -> Hierarchy {
        let mut h = Hierarchy::new();
        let mut b1 = PaperBox::new(1);
        b1.add_folder(1);
        b1.add_folder(2);
        h.insert_box(b1);

        let mut f1 = Folder::new(1, 1);
        f1.add_paper(1);
        f1.add_paper(2);
        h.insert_folder(f1);

        let mut f2 = Folder::new(2, 1);
        f2.add_paper(3);
        h.insert_folder(f2);

        h.insert_paper(Paper::new(1, 1));
        h.insert_paper(Paper::new(2, 1));
        h.insert_paper(Paper::new(3, 2));
        h
    }

    #[test]
    fn test_reassign_keeps_non_empty_source() {
        let mut h = sample();
        let pruned = reassign_paper(&mut h, 1, 2).unwrap();

        assert_eq!(pruned, Pruned::Kept);
        assert_eq!(h.folder_of(1), Some(2));
        let f2: Vec<_> = h.get_folder(2).unwrap().paper_ids.iter().copied().collect();
        assert_eq!(f2, vec![3, 1]);
    }

    #[test]
    fn test_reassign_prunes_vacated_folder() {
        let mut h = sample();
        let pruned = reassign_paper(&mut h, 3, 1).unwrap();

        assert_eq!(pruned, Pruned::Folder);
        assert!(!h.contains_folder(2));
        assert!(!h.get_box(1).unwrap().contains_folder(2));
    }

    #[test]
    fn test_prune_cascades_to_box() {
        let mut h = sample();
        h.get_folder_mut(2).unwrap().remove_paper(3);
        h.get_folder_mut(1).unwrap().remove_paper(1);
        h.get_folder_mut(1).unwrap().remove_paper(2);

        assert_eq!(prune_folder(&mut h, 2).unwrap(), Pruned::Folder);
        assert_eq!(
            prune_folder(&mut h, 1).unwrap(),
            Pruned::FolderAndBox { box_id: 1 }
        );
        assert_eq!(h.box_count(), 0);
        assert_eq!(h.folder_count(), 0);
    }

    #[test]
    fn test_reassign_to_missing_anchor_fails_cleanly() {
        let mut h = sample();
        let before = h.clone();
        let result = reassign_paper(&mut h, 1, 99);

        assert!(matches!(
            result,
            Err(MessFixError::FolderNotFound { folder_id: 99 })
        ));
        assert_eq!(h, before);
    }
}
