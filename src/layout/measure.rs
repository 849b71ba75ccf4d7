// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::registry::PositionRegistry;
use crate::model::{Anchor, ColumnId, RowRect, TableId};

/// Calibration between a measured row rectangle and the visual connector dot.
///
/// The dot glyph occupies one terminal cell; the measured row centre must be
/// pulled to that cell's centre or connectors land half a cell off. Retune
/// here, never at call sites.
pub const ANCHOR_DOT_OFFSET_X: f64 = -0.5;
pub const ANCHOR_DOT_OFFSET_Y: f64 = -0.5;

/// The explicit measure capability a canvas node exposes.
///
/// Returns the rendered rectangle of every currently visible column row,
/// keyed by column id. Rows clipped out of the node's frame are absent; their
/// anchors stay unresolved until the node grows. Decouples the registry from
/// any particular rendering substrate: the TUI node measures from its frame,
/// tests supply fixed rectangles.
pub trait ColumnMeasure {
    fn measure_columns(&self) -> BTreeMap<ColumnId, RowRect>;
}

/// Measures `node` and atomically replaces `table_id`'s registry entry.
///
/// Triggers: node mount, column-set change, node drag, node resize, global
/// viewport resize. Idempotent for unchanged geometry; each table's recompute
/// is independent of every other table's.
pub fn recompute_anchors(
    registry: &mut PositionRegistry,
    table_id: &TableId,
    node: &impl ColumnMeasure,
) {
    let anchors = node
        .measure_columns()
        .into_iter()
        .map(|(column_id, rect)| (column_id, anchor_from_row(rect)))
        .collect();
    registry.replace_table(table_id.clone(), anchors);
}

fn anchor_from_row(rect: RowRect) -> Anchor {
    Anchor::new(
        rect.x + rect.width / 2.0 + ANCHOR_DOT_OFFSET_X,
        rect.y + rect.height / 2.0 + ANCHOR_DOT_OFFSET_Y,
        rect.width,
        rect.x,
        rect.x + rect.width,
    )
}
