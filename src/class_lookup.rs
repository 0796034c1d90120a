// src/class_lookup.rs
//
// Class-name lookup by sorted position. Class-name sets come in unordered;
// the id of a class is its 0-indexed rank in ascending lexicographic order.

use std::collections::HashSet;

use crate::error::EvalError;

/// Resolve the class name occupying sorted position `class_id`.
///
/// # Arguments
/// * `class_id` - 0-indexed position in the ascending lexicographic order
/// * `class_names` - The set of unique class names to choose from
///
/// # Returns
/// The name at sorted position `class_id`, borrowed from the set.
///
/// # Errors
/// `EvalError::ClassIdOutOfRange` when `class_id >= class_names.len()`.
///
/// HashSet iteration order is arbitrary and varies between runs, so the set
/// must be materialized into a sorted list before positional access.
pub fn class_name_for_id(
    class_id: usize,
    class_names: &HashSet<String>,
) -> Result<&str, EvalError> {
    let mut ordered: Vec<&str> = class_names.iter().map(String::as_str).collect();
    ordered.sort_unstable();
    ordered
        .get(class_id)
        .copied()
        .ok_or(EvalError::ClassIdOutOfRange {
            id: class_id,
            len: class_names.len(),
        })
}
