//! Merge step: folds one transient hierarchy into the persistent one
//!
//! ## Rules
//!
//! Transient folders are visited in transient map order. For each folder:
//!
//! 1. A folder without papers is dropped from its transient box.
//! 2. Its papers are scanned in order for the first one already persisted
//!    under a different folder. That conflict picks an anchor:
//!    - the folder's own id, when the folder is already persisted;
//!    - otherwise the conflicting paper's current folder, and the transient
//!      folder is dropped from its box.
//! 3. Without an anchor the folder is promoted. A new folder is inserted
//!    as is; an existing one keeps its papers and appends the new ones.
//! 4. With an anchor every paper of the folder is moved under the anchor,
//!    pruning any persisted folder (and box) that this vacates.
//!
//! An existing folder that is promoted or anchors its own merge moves to
//! the box the snapshot shows it in. Papers are never dropped by either
//! step, so merging the same snapshot twice changes nothing the second time.
//!
//! Afterwards every transient box that still holds folders and is not yet
//! persisted is adopted.

use messfix_core_types::EntityId;

use crate::errors::Result;
use crate::model::{Folder, Paper, PaperBox};
use crate::ops::containment::{self, Pruned};
use crate::ops::Hierarchy;

/// A transient folder whose papers were folded into an anchor folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderMerge {
    pub folder_id: EntityId,
    pub anchor_id: EntityId,
}

/// A persisted paper that changed folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperMove {
    pub paper_id: EntityId,
    pub from_folder_id: EntityId,
    pub to_folder_id: EntityId,
}

/// What one merge did to the persistent hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub skipped_empty_folders: Vec<EntityId>,
    pub promoted_folders: Vec<EntityId>,
    pub merged_folders: Vec<FolderMerge>,
    pub moved_papers: Vec<PaperMove>,
    pub removed_folders: Vec<EntityId>,
    pub removed_boxes: Vec<EntityId>,
    pub adopted_boxes: Vec<EntityId>,
}

impl MergeReport {
    /// Whether the merge left the persistent hierarchy structurally untouched
    ///
    /// Promoting an already-persisted folder still counts as a promotion,
    /// so this only looks at moves, removals and adoptions.
    pub fn is_structurally_noop(&self) -> bool {
        self.moved_papers.is_empty()
            && self.removed_folders.is_empty()
            && self.removed_boxes.is_empty()
            && self.adopted_boxes.is_empty()
    }

    fn record_pruned(&mut self, folder_id: EntityId, pruned: Pruned) {
        match pruned {
            Pruned::Kept => {}
            Pruned::Folder => self.removed_folders.push(folder_id),
            Pruned::FolderAndBox { box_id } => {
                self.removed_folders.push(folder_id);
                self.removed_boxes.push(box_id);
            }
        }
    }
}

/// Merge a transient hierarchy into the persistent one, in place
///
/// # Errors
///
/// Returns `FolderNotFound`, `BoxNotFound` or `PaperNotFound` if a lookup
/// that holds by construction fails. The persistent hierarchy may then be
/// partially updated; callers that need all-or-nothing behaviour merge into
/// a copy.
pub fn reconcile(actual: &mut Hierarchy, transient: Hierarchy) -> Result<MergeReport> {
    let Hierarchy {
        mut boxes, folders, ..
    } = transient;
    let mut report = MergeReport::default();

    for folder in folders.into_values() {
        if folder.is_empty() {
            if let Some(paper_box) = boxes.get_mut(&folder.box_id) {
                paper_box.remove_folder(folder.id);
            }
            report.skipped_empty_folders.push(folder.id);
            continue;
        }

        match find_conflict(actual, &folder) {
            None => promote_folder(actual, folder, &mut report)?,
            Some(established_id) => {
                let anchor_id = if actual.contains_folder(folder.id) {
                    relocate_folder(actual, folder.id, folder.box_id, &mut report)?;
                    folder.id
                } else {
                    if let Some(paper_box) = boxes.get_mut(&folder.box_id) {
                        paper_box.remove_folder(folder.id);
                    }
                    established_id
                };
                tracing::debug!(folder_id = folder.id, anchor_id, "merging folder into anchor");
                merge_into_anchor(actual, &folder, anchor_id, &mut report)?;
            }
        }
    }

    for paper_box in boxes.into_values() {
        adopt_box(actual, paper_box, &mut report);
    }

    Ok(report)
}

/// Current folder of the first paper persisted somewhere other than `folder`
fn find_conflict(actual: &Hierarchy, folder: &Folder) -> Option<EntityId> {
    folder
        .paper_ids
        .iter()
        .find_map(|&paper_id| actual.folder_of(paper_id).filter(|&id| id != folder.id))
}

fn promote_folder(actual: &mut Hierarchy, folder: Folder, report: &mut MergeReport) -> Result<()> {
    let folder_id = folder.id;
    for &paper_id in &folder.paper_ids {
        actual.insert_paper(Paper::new(paper_id, folder_id));
    }

    if actual.contains_folder(folder_id) {
        relocate_folder(actual, folder_id, folder.box_id, report)?;
        let existing = actual.get_folder_mut(folder_id)?;
        for &paper_id in &folder.paper_ids {
            existing.add_paper(paper_id);
        }
    } else {
        if let Some(paper_box) = actual.boxes.get_mut(&folder.box_id) {
            paper_box.add_folder(folder_id);
        }
        actual.insert_folder(folder);
    }

    report.promoted_folders.push(folder_id);
    Ok(())
}

/// Move a persisted folder into `box_id`
///
/// The old box loses the folder and is removed if that empties it. A box
/// that is not persisted yet picks the folder up when it is adopted.
fn relocate_folder(
    actual: &mut Hierarchy,
    folder_id: EntityId,
    box_id: EntityId,
    report: &mut MergeReport,
) -> Result<()> {
    let previous_box = actual.get_folder(folder_id)?.box_id;
    if previous_box != box_id {
        if containment::detach_folder_from_box(actual, folder_id, previous_box) {
            report.removed_boxes.push(previous_box);
        }
        actual.get_folder_mut(folder_id)?.box_id = box_id;
        tracing::debug!(folder_id, from_box_id = previous_box, to_box_id = box_id, "folder changed box");
    }
    if let Some(paper_box) = actual.boxes.get_mut(&box_id) {
        paper_box.add_folder(folder_id);
    }
    Ok(())
}

fn merge_into_anchor(
    actual: &mut Hierarchy,
    folder: &Folder,
    anchor_id: EntityId,
    report: &mut MergeReport,
) -> Result<()> {
    for &paper_id in &folder.paper_ids {
        match actual.folder_of(paper_id) {
            Some(from_folder_id) if from_folder_id != anchor_id => {
                let pruned = containment::reassign_paper(actual, paper_id, anchor_id)?;
                report.record_pruned(from_folder_id, pruned);
                report.moved_papers.push(PaperMove {
                    paper_id,
                    from_folder_id,
                    to_folder_id: anchor_id,
                });
            }
            _ => {
                actual.insert_paper(Paper::new(paper_id, anchor_id));
                actual.get_folder_mut(anchor_id)?.add_paper(paper_id);
            }
        }
    }

    report.merged_folders.push(FolderMerge {
        folder_id: folder.id,
        anchor_id,
    });
    Ok(())
}

/// Adopt a transient box that kept folders and is not persisted yet
///
/// Only folders that now live in this box are carried over. Folders the
/// merge dropped from the box are left out.
fn adopt_box(actual: &mut Hierarchy, mut paper_box: PaperBox, report: &mut MergeReport) {
    if paper_box.is_empty() || actual.contains_box(paper_box.id) {
        return;
    }

    let box_id = paper_box.id;
    paper_box
        .folder_ids
        .retain(|folder_id| actual.folders.get(folder_id).is_some_and(|f| f.box_id == box_id));
    if paper_box.is_empty() {
        return;
    }

    tracing::debug!(box_id, folders = paper_box.folder_ids.len(), "adopting box");
    actual.insert_box(paper_box);
    report.adopted_boxes.push(box_id);
}
