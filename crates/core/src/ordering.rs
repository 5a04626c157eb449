//! Reorder request contract for drag-and-drop collections.
//!
//! Photo sets, photos within a set, and videos all persist their visual
//! order as an integer `order_index`. A reorder request submits the full id
//! list in the new order; the repositories then assign `order_index`
//! values `0..N-1` by list position. This module holds the shared request
//! validation.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Wire shape of a reorder request: every member id in the new order.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<DbId>,
}

/// Validate a reorder id list: non-empty and free of duplicates.
pub fn validate_reorder_ids(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation(
            "Reorder requires at least one id".into(),
        ));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "Duplicate id {id} in reorder list"
            )));
        }
    }
    Ok(())
}
