//! Per-assignee task count aggregation.
//!
//! # Responsibility
//! - Derive the assignee -> task-count view from a task snapshot.
//!
//! # Invariants
//! - Grouping is case-sensitive exact-string matching; no trimming or
//!   case-folding happens here. Callers normalize at insertion time.
//! - Result ordering is deterministic (sorted by assignee name).

use crate::model::task::Task;
use std::collections::BTreeMap;

/// Counts tasks per distinct assignee in a single pass.
///
/// Pure function over the given snapshot; an empty input yields an empty map.
pub fn summarize_by_assignee(tasks: &[Task]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.assignee.clone()).or_insert(0) += 1;
    }
    counts
}
