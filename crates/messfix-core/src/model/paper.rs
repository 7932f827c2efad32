use messfix_core_types::EntityId;
use serde::{Deserialize, Serialize};

/// Paper - the atomic leaf of the hierarchy
///
/// A paper has no children. Reassigning its folder is the only mutation it
/// ever undergoes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub id: EntityId,

    /// Owning folder
    pub folder_id: EntityId,
}

impl Paper {
    pub fn new(id: EntityId, folder_id: EntityId) -> Self {
        Self { id, folder_id }
    }
}
