// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::anchor::Anchor;
use super::ids::{ColumnId, TableId};
use super::table::Column;
use crate::layout::PositionRegistry;

/// An unresolved endpoint reference: which column of which table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRef {
    pub table_id: TableId,
    pub column_id: ColumnId,
}

impl EndpointRef {
    pub fn new(table_id: TableId, column_id: ColumnId) -> Self {
        Self { table_id, column_id }
    }
}

/// One resolved connector endpoint: column metadata plus its anchor at the
/// time of the last successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionEnd {
    table_id: TableId,
    column: Column,
    anchor: Anchor,
}

impl ConnectionEnd {
    pub fn new(table_id: TableId, column: Column, anchor: Anchor) -> Self {
        Self { table_id, column, anchor }
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }
}

/// A directed visual link between two column anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    from: ConnectionEnd,
    to: ConnectionEnd,
}

impl Connection {
    pub fn from(&self) -> &ConnectionEnd {
        &self.from
    }

    pub fn to(&self) -> &ConnectionEnd {
        &self.to
    }

    pub fn touches_table(&self, table_id: &TableId) -> bool {
        self.from.table_id() == table_id || self.to.table_id() == table_id
    }
}

/// The ordered connector collection.
///
/// Insertion order is render/z-order. Duplicate from/to pairs are permitted;
/// there is no uniqueness constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionList {
    connections: Vec<Connection>,
}

impl ConnectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Adds a connection, resolving both endpoints against the registry at
    /// call time.
    ///
    /// If either endpoint is unresolved the call stores nothing and returns
    /// `false`. Nothing partial is ever kept; the silent no-op is deliberate
    /// and surfaced only as a diagnostic by the caller.
    pub fn add(
        &mut self,
        from: EndpointRef,
        to: EndpointRef,
        from_column: Column,
        to_column: Column,
        registry: &PositionRegistry,
    ) -> bool {
        let Some(from_anchor) = registry.resolve(&from.table_id, &from.column_id) else {
            return false;
        };
        let Some(to_anchor) = registry.resolve(&to.table_id, &to.column_id) else {
            return false;
        };

        self.connections.push(Connection {
            from: ConnectionEnd::new(from.table_id, from_column, from_anchor),
            to: ConnectionEnd::new(to.table_id, to_column, to_anchor),
        });
        true
    }

    /// Removes every connection touching `table_id`.
    ///
    /// Surviving connections keep their relative order. Returns how many were
    /// removed.
    pub fn remove_for_table(&mut self, table_id: &TableId) -> usize {
        let before = self.connections.len();
        self.connections.retain(|conn| !conn.touches_table(table_id));
        before - self.connections.len()
    }

    /// Re-resolves every connection's endpoints from current registry state.
    ///
    /// A connection whose endpoints both resolve gets fresh coordinates; one
    /// that fails to resolve (mid-resize, clipped row) keeps its last known
    /// coordinates rather than being dropped, so connectors never flicker
    /// through transient unmeasured states.
    pub fn refresh_all(&mut self, registry: &PositionRegistry) {
        for conn in &mut self.connections {
            let from_anchor =
                registry.resolve(conn.from.table_id(), conn.from.column().column_id());
            let to_anchor = registry.resolve(conn.to.table_id(), conn.to.column().column_id());

            if let (Some(from_anchor), Some(to_anchor)) = (from_anchor, to_anchor) {
                conn.from.set_anchor(from_anchor);
                conn.to.set_anchor(to_anchor);
            }
        }
    }
}
