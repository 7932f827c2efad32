//! Snapshot parser
//!
//! Builds the transient hierarchy for one call from the raw records.
//!
//! The raw feed lists the deepest entries first (papers, then their folder,
//! then the box), so the records are scanned from last to first: every box
//! record opens a box, every folder record opens a folder inside the current
//! box, and every paper record lands in the current folder.

use messfix_core_types::EntityId;

use crate::model::{Folder, Paper, PaperBox};
use crate::ops::Hierarchy;
use crate::record::Record;

/// Build the transient hierarchy from parsed records
///
/// Malformed entries are discarded rather than reported: a folder with no
/// enclosing box, or a paper with no enclosing box or folder.
///
/// An id seen twice re-opens the same transient entity. The later-scanned
/// occurrence decides the parent, so each paper sits in one folder and each
/// folder in one box.
pub fn build_transient(records: &[Record]) -> Hierarchy {
    let mut transient = Hierarchy::new();
    let mut current_box: Option<EntityId> = None;
    let mut current_folder: Option<EntityId> = None;

    for record in records.iter().rev() {
        match *record {
            Record::Box(id) => {
                transient
                    .boxes
                    .entry(id)
                    .or_insert_with(|| PaperBox::new(id));
                current_box = Some(id);
                current_folder = None;
            }
            Record::Folder(id) => {
                let Some(box_id) = current_box else {
                    tracing::debug!(record = %record, "discarding folder without enclosing box");
                    continue;
                };
                attach_folder(&mut transient, id, box_id);
                current_folder = Some(id);
            }
            Record::Paper(id) => {
                let (Some(_), Some(folder_id)) = (current_box, current_folder) else {
                    tracing::debug!(record = %record, "discarding paper without enclosing folder");
                    continue;
                };
                attach_paper(&mut transient, id, folder_id);
            }
        }
    }

    transient
}

fn attach_folder(transient: &mut Hierarchy, folder_id: EntityId, box_id: EntityId) {
    let folder = transient
        .folders
        .entry(folder_id)
        .or_insert_with(|| Folder::new(folder_id, box_id));

    let previous_box = std::mem::replace(&mut folder.box_id, box_id);
    if previous_box != box_id {
        if let Some(previous) = transient.boxes.get_mut(&previous_box) {
            previous.remove_folder(folder_id);
        }
    }

    if let Some(paper_box) = transient.boxes.get_mut(&box_id) {
        paper_box.add_folder(folder_id);
    }
}

fn attach_paper(transient: &mut Hierarchy, paper_id: EntityId, folder_id: EntityId) {
    let paper = transient
        .papers
        .entry(paper_id)
        .or_insert_with(|| Paper::new(paper_id, folder_id));

    let previous_folder = std::mem::replace(&mut paper.folder_id, folder_id);
    if previous_folder != folder_id {
        if let Some(previous) = transient.folders.get_mut(&previous_folder) {
            previous.remove_paper(paper_id);
        }
    }

    if let Some(folder) = transient.folders.get_mut(&folder_id) {
        folder.add_paper(paper_id);
    }
}
