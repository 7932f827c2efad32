use crate::errors::{MessFixError, Result};
use crate::ops::Hierarchy;
use crate::rules::invariants;

/// Validate the structural invariants of a persistent hierarchy
///
/// Checks, in order:
/// - no empty folders or boxes
/// - no box lists a missing folder
/// - every folder is listed by exactly the box it names
/// - no paper is listed by two folders
/// - every listed paper names the folder listing it
/// - every known paper names an existing folder
///
/// # Errors
///
/// Returns `InvariantViolation` describing the first failed check.
pub fn validate_hierarchy(hierarchy: &Hierarchy) -> Result<()> {
    let violation = |reason: String| Err(MessFixError::InvariantViolation { reason });

    if let Some(folder_id) = invariants::find_empty_folders(hierarchy).first() {
        return violation(format!("folder F{} has no papers", folder_id));
    }

    if let Some(box_id) = invariants::find_empty_boxes(hierarchy).first() {
        return violation(format!("box B{} has no folders", box_id));
    }

    if let Some((box_id, folder_id)) = invariants::find_dangling_folder_refs(hierarchy).first() {
        return violation(format!("box B{} lists missing folder F{}", box_id, folder_id));
    }

    if let Some((folder_id, box_id)) = invariants::find_unboxed_folders(hierarchy).first() {
        return violation(format!(
            "folder F{} is not listed by exactly its box B{}",
            folder_id, box_id
        ));
    }

    if let Some((paper_id, folders)) = invariants::find_shared_papers(hierarchy).first() {
        return violation(format!(
            "paper P{} is listed by folders {:?}",
            paper_id, folders
        ));
    }

    if let Some((folder_id, paper_id)) = invariants::find_misplaced_papers(hierarchy).first() {
        return violation(format!(
            "folder F{} lists paper P{} which names another folder",
            folder_id, paper_id
        ));
    }

    if let Some((paper_id, folder_id)) = invariants::find_stranded_papers(hierarchy).first() {
        return violation(format!(
            "paper P{} is not listed by its folder F{}",
            paper_id, folder_id
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, Paper, PaperBox};

    #[test]
    fn test_empty_hierarchy_is_valid() {
        assert!(validate_hierarchy(&Hierarchy::new()).is_ok());
    }

    #[test]
    fn test_well_formed_hierarchy_is_valid() {
        let mut h = Hierarchy::new();
        let mut b = PaperBox::new(1);
        b.add_folder(1);
        h.insert_box(b);
        let mut f = Folder::new(1, 1);
        f.add_paper(1);
        h.insert_folder(f);
        h.insert_paper(Paper::new(1, 1));

        assert!(validate_hierarchy(&h).is_ok());
    }

    #[test]
    fn test_empty_box_is_rejected() {
        let mut h = Hierarchy::new();
        h.insert_box(PaperBox::new(3));

        let result = validate_hierarchy(&h);
        assert!(matches!(
            result,
            Err(MessFixError::InvariantViolation { ref reason }) if reason.contains("B3")
        ));
    }
}
