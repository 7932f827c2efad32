//! Serializer for the persistent hierarchy
//!
//! Output lists, box by box, each folder's papers followed by the folder and
//! then the box itself: `[P1,P2,F1,P3,F2,B1]`.

use crate::errors::Result;
use crate::ops::Hierarchy;
use crate::record::Record;

/// Flatten the hierarchy into output entries, deepest first
///
/// # Errors
///
/// Returns `FolderNotFound` if a box lists a folder missing from the
/// hierarchy.
pub fn hierarchy_records(hierarchy: &Hierarchy) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for paper_box in hierarchy.boxes() {
        for &folder_id in &paper_box.folder_ids {
            let folder = hierarchy.get_folder(folder_id)?;
            records.extend(folder.paper_ids.iter().map(|&id| Record::Paper(id)));
            records.push(Record::Folder(folder_id));
        }
        records.push(Record::Box(paper_box.id));
    }

    Ok(records)
}

/// Serialize the hierarchy as a bracketed, comma-separated entry list
///
/// # Errors
///
/// Returns `FolderNotFound` if a box lists a folder missing from the
/// hierarchy.
pub fn render_hierarchy(hierarchy: &Hierarchy) -> Result<String> {
    let entries: Vec<String> = hierarchy_records(hierarchy)?
        .iter()
        .map(Record::to_string)
        .collect();
    Ok(format!("[{}]", entries.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MessFixError;
    use crate::model::{Folder, Paper, PaperBox};

    #[test]
    fn test_render_empty_hierarchy() {
        assert_eq!(render_hierarchy(&Hierarchy::new()).unwrap(), "[]");
    }

    #[test]
    fn test_render_follows_stored_order() {
        let mut h = Hierarchy::new();

        let mut b2 = PaperBox::new(2);
        b2.add_folder(7);
        b2.add_folder(3);
        h.insert_box(b2);

        let mut f7 = Folder::new(7, 2);
        f7.add_paper(4);
        h.insert_folder(f7);

        let mut f3 = Folder::new(3, 2);
        f3.add_paper(9);
        f3.add_paper(1);
        h.insert_folder(f3);

        for (paper, folder) in [(4, 7), (9, 3), (1, 3)] {
            h.insert_paper(Paper::new(paper, folder));
        }

        assert_eq!(render_hierarchy(&h).unwrap(), "[P4,F7,P9,P1,F3,B2]");
    }

    #[test]
    fn test_render_reports_dangling_folder() {
        let mut h = Hierarchy::new();
        let mut b1 = PaperBox::new(1);
        b1.add_folder(5);
        h.insert_box(b1);

        assert!(matches!(
            render_hierarchy(&h),
            Err(MessFixError::FolderNotFound { folder_id: 5 })
        ));
    }
}
