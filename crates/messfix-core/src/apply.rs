//! Functional-boundary apply function
//!
//! `apply()` is the canonical entry point for folding one snapshot into a
//! persistent hierarchy.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: either the whole snapshot is merged and a valid new
//!   state is returned, or an error is returned and the caller's previous
//!   state is untouched
//! - **Parse before merge**: a bad record rejects the snapshot before any
//!   merging starts
//! - **Validated result**: the merged state passes `validate_hierarchy`
//!
//! ## Example
//!
//! ```
//! use messfix_core::{apply, render_hierarchy, Hierarchy};
//!
//! let (state, _report) = apply(Hierarchy::new(), &["P1", "F1", "B1"]).unwrap();
//! assert_eq!(render_hierarchy(&state).unwrap(), "[P1,F1,B1]");
//! ```

use crate::errors::Result;
use crate::ops::Hierarchy;
use crate::parse::build_transient;
use crate::reconcile::{reconcile, MergeReport};
use crate::record::parse_records;
use crate::rules::validate_hierarchy;

/// Apply a raw snapshot to a hierarchy, returning the new hierarchy
///
/// Takes ownership of the current state. On error the state is dropped;
/// callers that must keep it pass a clone.
///
/// # Errors
///
/// - `EmptyRecord`, `InvalidRecordType`, `InvalidRecordId` for bad records
/// - `FolderNotFound`, `BoxNotFound`, `PaperNotFound` for internal defects
/// - `InvariantViolation` if the merged state fails validation
pub fn apply<S: AsRef<str>>(mut state: Hierarchy, snapshot: &[S]) -> Result<(Hierarchy, MergeReport)> {
    let records = parse_records(snapshot)?;
    let transient = build_transient(&records);
    let report = reconcile(&mut state, transient)?;
    validate_hierarchy(&state)?;
    Ok((state, report))
}
