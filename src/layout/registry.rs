// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{Anchor, ColumnId, TableId};

/// The canvas-wide mapping from table and column identity to measured anchors.
///
/// Entries are replaced wholesale per table: after a recompute completes a
/// table either carries a full, same-generation anchor set or none at all.
/// Mutated only from the single event-handling thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionRegistry {
    anchors: BTreeMap<TableId, BTreeMap<ColumnId, Anchor>>,
}

impl PositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole anchor set for `table_id`.
    pub fn replace_table(&mut self, table_id: TableId, anchors: BTreeMap<ColumnId, Anchor>) {
        self.anchors.insert(table_id, anchors);
    }

    /// Discards every anchor belonging to `table_id`.
    ///
    /// Called when the table leaves the open set; stale entries must not
    /// outlive their node.
    pub fn remove_table(&mut self, table_id: &TableId) {
        self.anchors.remove(table_id);
    }

    pub fn resolve(&self, table_id: &TableId, column_id: &ColumnId) -> Option<Anchor> {
        self.anchors.get(table_id)?.get(column_id).copied()
    }

    pub fn table_anchors(&self, table_id: &TableId) -> Option<&BTreeMap<ColumnId, Anchor>> {
        self.anchors.get(table_id)
    }

    pub fn table_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
