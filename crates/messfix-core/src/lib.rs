//! MessFix Core - incremental box/folder/paper reconciliation engine
//!
//! This crate folds noisy daily snapshots of a three-level hierarchy (boxes
//! holding folders holding papers) into one persistent hierarchy, including:
//! - Raw record parsing and transient hierarchy construction
//! - The merge rules (empty-folder skip, anchor selection, promotion)
//! - Containment maintenance with cascading removal of vacated containers
//! - Serialization of the persistent hierarchy
//! - Post-merge invariant validation
//! - A mutex-guarded stateful reconciler and a day-by-day session driver

pub mod apply;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod parse;
pub mod reconcile;
pub mod reconciler;
pub mod record;
pub mod render;
pub mod rules;
pub mod session;

// Used by the exported logging macros
pub use messfix_core_types;

// Re-export commonly used types
pub use apply::apply;
pub use errors::{ExError, ExErrorKind, MessFixError, Result};
pub use model::{Folder, Paper, PaperBox};
pub use ops::Hierarchy;
pub use reconcile::MergeReport;
pub use reconciler::Reconciler;
pub use record::Record;
pub use render::render_hierarchy;
pub use session::{run_days, DaySink, Transcript};
