//! Stateful reconciler
//!
//! Owns the persistent hierarchy and folds one day's snapshot into it per
//! call. Calls on one instance are serialized by a mutex held for the whole
//! call, so no caller ever observes a half-merged hierarchy.

use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use messfix_core_types::schema::OP_APPLY_SNAPSHOT;

use crate::apply::apply;
use crate::errors::{MessFixError, Result};
use crate::ops::Hierarchy;
use crate::render::render_hierarchy;
use crate::{log_op_end, log_op_error, log_op_start};

#[derive(Debug, Default)]
struct ReconcilerState {
    hierarchy: Hierarchy,
    /// Number of `apply_snapshot` calls so far, failed ones included
    day: usize,
}

/// Incremental reconciliation engine
///
/// # Example
///
/// ```
/// use messfix_core::Reconciler;
///
/// let reconciler = Reconciler::new();
/// assert_eq!(reconciler.apply_snapshot(&["P1", "F1", "B1"]).unwrap(), "[P1,F1,B1]");
/// assert_eq!(
///     reconciler.apply_snapshot(&["P2", "P1", "F1", "B1"]).unwrap(),
///     "[P1,P2,F1,B1]"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Reconciler {
    state: Mutex<ReconcilerState>,
}

impl Reconciler {
    /// Create a reconciler with an empty persistent hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ReconcilerState>> {
        self.state.lock().map_err(|_| MessFixError::LockPoisoned)
    }

    /// Merge one day's raw snapshot and return the serialized hierarchy
    ///
    /// The merge runs on a copy of the persistent hierarchy which replaces
    /// the live one only once the merge, validation and serialization all
    /// succeeded. A failed call leaves the persistent hierarchy unchanged.
    ///
    /// # Errors
    ///
    /// - `EmptyRecord`, `InvalidRecordType`, `InvalidRecordId` for bad records
    /// - `InvariantViolation` or a not-found error for internal defects
    /// - `LockPoisoned` if an earlier call panicked mid-merge
    pub fn apply_snapshot<S: AsRef<str>>(&self, snapshot: &[S]) -> Result<String> {
        let mut state = self.lock()?;
        state.day += 1;
        let day = state.day;

        let start = Instant::now();
        log_op_start!(OP_APPLY_SNAPSHOT, day = day, records = snapshot.len());

        let merged = apply(state.hierarchy.clone(), snapshot)
            .and_then(|(next, report)| render_hierarchy(&next).map(|out| (next, report, out)));

        match merged {
            Ok((next, report, output)) => {
                tracing::debug!(
                    day,
                    promoted = report.promoted_folders.len(),
                    merged = report.merged_folders.len(),
                    moved = report.moved_papers.len(),
                    skipped = report.skipped_empty_folders.len(),
                    "snapshot merged"
                );
                state.hierarchy = next;
                log_op_end!(
                    OP_APPLY_SNAPSHOT,
                    duration_ms = start.elapsed().as_millis() as u64,
                    day = day,
                    box_count = state.hierarchy.box_count(),
                    folder_count = state.hierarchy.folder_count()
                );
                Ok(output)
            }
            Err(err) => {
                log_op_error!(
                    OP_APPLY_SNAPSHOT,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    day = day
                );
                Err(err)
            }
        }
    }

    /// Serialize the current persistent hierarchy without changing it
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned`, or `FolderNotFound` on an internal defect.
    pub fn render(&self) -> Result<String> {
        render_hierarchy(&self.lock()?.hierarchy)
    }

    /// Clone of the current persistent hierarchy
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if an earlier call panicked mid-merge.
    pub fn snapshot_state(&self) -> Result<Hierarchy> {
        Ok(self.lock()?.hierarchy.clone())
    }

    /// Number of snapshots applied so far, failed ones included
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if an earlier call panicked mid-merge.
    pub fn day(&self) -> Result<usize> {
        Ok(self.lock()?.day)
    }
}
