use std::collections::HashMap;

use messfix_core_types::EntityId;

use crate::ops::Hierarchy;

/// Find persisted folders with no papers
pub fn find_empty_folders(hierarchy: &Hierarchy) -> Vec<EntityId> {
    hierarchy
        .folders()
        .filter(|f| f.is_empty())
        .map(|f| f.id)
        .collect()
}

/// Find persisted boxes with no folders
pub fn find_empty_boxes(hierarchy: &Hierarchy) -> Vec<EntityId> {
    hierarchy
        .boxes()
        .filter(|b| b.is_empty())
        .map(|b| b.id)
        .collect()
}

/// Find papers listed by more than one folder
///
/// Returns list of (paper_id, vec![folder_ids]) tuples
pub fn find_shared_papers(hierarchy: &Hierarchy) -> Vec<(EntityId, Vec<EntityId>)> {
    let mut paper_to_folders: HashMap<EntityId, Vec<EntityId>> = HashMap::new();

    for folder in hierarchy.folders() {
        for &paper_id in &folder.paper_ids {
            paper_to_folders.entry(paper_id).or_default().push(folder.id);
        }
    }

    let mut shared: Vec<_> = paper_to_folders
        .into_iter()
        .filter(|(_, folders)| folders.len() > 1)
        .collect();
    shared.sort_by_key(|(paper_id, _)| *paper_id);
    shared
}

/// Find folders that are not listed by exactly the box they name
///
/// Returns list of (folder_id, box_id) tuples
pub fn find_unboxed_folders(hierarchy: &Hierarchy) -> Vec<(EntityId, EntityId)> {
    hierarchy
        .folders()
        .filter(|folder| {
            let listed_by: Vec<EntityId> = hierarchy
                .boxes()
                .filter(|b| b.contains_folder(folder.id))
                .map(|b| b.id)
                .collect();
            listed_by != [folder.box_id]
        })
        .map(|f| (f.id, f.box_id))
        .collect()
}

/// Find boxes listing folders that do not exist
///
/// Returns list of (box_id, folder_id) tuples
pub fn find_dangling_folder_refs(hierarchy: &Hierarchy) -> Vec<(EntityId, EntityId)> {
    let mut dangling = Vec::new();

    for paper_box in hierarchy.boxes() {
        for &folder_id in &paper_box.folder_ids {
            if !hierarchy.contains_folder(folder_id) {
                dangling.push((paper_box.id, folder_id));
            }
        }
    }

    dangling
}

/// Find folders listing papers whose own entry names another folder
/// (or is missing)
///
/// Returns list of (folder_id, paper_id) tuples
pub fn find_misplaced_papers(hierarchy: &Hierarchy) -> Vec<(EntityId, EntityId)> {
    let mut misplaced = Vec::new();

    for folder in hierarchy.folders() {
        for &paper_id in &folder.paper_ids {
            if hierarchy.folder_of(paper_id) != Some(folder.id) {
                misplaced.push((folder.id, paper_id));
            }
        }
    }

    misplaced
}

/// Find papers not listed by the folder they name, including papers whose
/// folder does not exist
///
/// Returns list of (paper_id, folder_id) tuples
pub fn find_stranded_papers(hierarchy: &Hierarchy) -> Vec<(EntityId, EntityId)> {
    hierarchy
        .papers()
        .filter(|p| {
            !hierarchy
                .get_folder(p.folder_id)
                .is_ok_and(|f| f.contains_paper(p.id))
        })
        .map(|p| (p.id, p.folder_id))
        .collect()
}
