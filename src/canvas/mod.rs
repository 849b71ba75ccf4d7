// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The droppable canvas: the open-table set and everything derived from it.
//!
//! All mutation funnels through [`Canvas`] so the ordering contract holds:
//! within one interaction, anchors are recomputed before any dependent
//! connection refresh runs, and connectors never render against pre-move
//! geometry.

pub mod glow;
pub mod node;

use std::time::Instant;

use crate::layout::{recompute_anchors, PositionRegistry};
use crate::model::{Column, ConnectionList, EndpointRef, Table, TableId};

pub use glow::{GlowState, GLOW_DURATION};
pub use node::{
    NodeFrame, TableNode, DEFAULT_NODE_WIDTH, MIN_NODE_HEIGHT, MIN_NODE_WIDTH, NODE_BORDER,
    NODE_CHROME_ROWS, NODE_HEADER_ROWS, NODE_ROW_HEIGHT,
};

/// Result of a table-placement drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Appended to the open set.
    Placed(TableId),
    /// Id collision: no second copy; the existing node glows instead.
    Glowing(TableId),
}

/// Result of a column-connection drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Added,
    /// Same-table self-connection attempts are rejected.
    SameTable,
    /// An endpoint's anchor was unknown at drop time; nothing was stored.
    Unresolved,
}

/// The canvas state: ordered open tables, their anchors, and the connectors.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    nodes: Vec<TableNode>,
    registry: PositionRegistry,
    connections: ConnectionList,
    glow: GlowState,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[TableNode] {
        &self.nodes
    }

    pub fn node(&self, table_id: &TableId) -> Option<&TableNode> {
        self.nodes.iter().find(|node| node.table().id() == table_id)
    }

    pub fn registry(&self) -> &PositionRegistry {
        &self.registry
    }

    pub fn connections(&self) -> &ConnectionList {
        &self.connections
    }

    pub fn glow(&self) -> &GlowState {
        &self.glow
    }

    pub fn is_open(&self, table_id: &TableId) -> bool {
        self.node(table_id).is_some()
    }

    /// Places a dropped table descriptor at `(x, y)`.
    ///
    /// A duplicate id never inserts a second copy: the existing node's glow
    /// is (re)activated instead and the open set is untouched.
    pub fn place_table(&mut self, table: Table, x: f64, y: f64, now: Instant) -> PlaceOutcome {
        let table_id = table.id().clone();
        if self.is_open(&table_id) {
            self.glow.activate(table_id.clone(), now);
            return PlaceOutcome::Glowing(table_id);
        }

        let node = TableNode::new(table, x, y);
        recompute_anchors(&mut self.registry, &table_id, &node);
        self.nodes.push(node);
        PlaceOutcome::Placed(table_id)
    }

    /// Removes a table and cascades: its connections and anchors go with it.
    ///
    /// Surviving connections keep their relative order; no orphan may remain.
    pub fn remove_table(&mut self, table_id: &TableId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.table().id() != table_id);
        if self.nodes.len() == before {
            return false;
        }

        self.connections.remove_for_table(table_id);
        self.registry.remove_table(table_id);
        true
    }

    /// Moves a node, then republishes its anchors and refreshes connectors.
    pub fn move_node(&mut self, table_id: &TableId, x: f64, y: f64) -> bool {
        self.with_node(table_id, |node| node.move_to(x, y))
    }

    /// Resizes a node, then republishes its anchors and refreshes connectors.
    ///
    /// Shrinking below the column count clips rows: their anchors drop out of
    /// the registry while affected connections keep their last coordinates.
    pub fn resize_node(&mut self, table_id: &TableId, width: f64, height: f64) -> bool {
        self.with_node(table_id, |node| node.resize_to(width, height))
    }

    /// Global viewport resize: re-measures every node, then refreshes.
    pub fn viewport_resized(&mut self) {
        for node in &self.nodes {
            recompute_anchors(&mut self.registry, node.table().id(), node);
        }
        self.connections.refresh_all(&self.registry);
    }

    /// Connects two column endpoints, resolving anchors at this moment.
    ///
    /// Same-table attempts are rejected; an unresolved endpoint makes the
    /// whole call a silent no-op per the drop contract.
    pub fn connect(
        &mut self,
        from: EndpointRef,
        from_column: Column,
        to: EndpointRef,
        to_column: Column,
    ) -> ConnectOutcome {
        if from.table_id == to.table_id {
            return ConnectOutcome::SameTable;
        }

        if self.connections.add(from, to, from_column, to_column, &self.registry) {
            ConnectOutcome::Added
        } else {
            ConnectOutcome::Unresolved
        }
    }

    /// Expires the glow once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        self.glow.tick(now);
    }

    fn with_node(&mut self, table_id: &TableId, mutate: impl FnOnce(&mut TableNode)) -> bool {
        let Some(index) = self.nodes.iter().position(|node| node.table().id() == table_id) else {
            return false;
        };
        mutate(&mut self.nodes[index]);

        // Anchor recompute must be visible to the connection list before the
        // refresh runs, or connectors would render against pre-move geometry.
        recompute_anchors(&mut self.registry, table_id, &self.nodes[index]);
        self.connections.refresh_all(&self.registry);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, ConnectOutcome, PlaceOutcome};
    use crate::model::{fixtures, ColumnId, EndpointRef, TableId};
    use std::time::Instant;

    fn tid(value: &str) -> TableId {
        TableId::new(value).expect("table id")
    }

    fn cid(value: &str) -> ColumnId {
        ColumnId::new(value).expect("column id")
    }

    fn canvas_with_two_tables() -> Canvas {
        let mut canvas = Canvas::new();
        let now = Instant::now();
        canvas.place_table(fixtures::employees(), 0.0, 0.0, now);
        canvas.place_table(fixtures::employee_salary(), 50.0, 10.0, now);
        canvas
    }

    fn connect_first_pair(canvas: &mut Canvas) -> ConnectOutcome {
        let from_col = fixtures::employees().columns()[0].clone();
        let to_col = fixtures::employee_salary().columns()[1].clone();
        canvas.connect(
            EndpointRef::new(tid("table_1"), cid("column_1")),
            from_col,
            EndpointRef::new(tid("table_2"), cid("column_2")),
            to_col,
        )
    }

    #[test]
    fn placing_a_new_table_adds_exactly_one_entry() {
        let mut canvas = Canvas::new();
        let outcome = canvas.place_table(fixtures::employees(), 5.0, 5.0, Instant::now());

        assert_eq!(outcome, PlaceOutcome::Placed(tid("table_1")));
        assert_eq!(canvas.nodes().len(), 1);
        assert!(canvas.registry().table_anchors(&tid("table_1")).is_some());
    }

    #[test]
    fn duplicate_placement_glows_instead_of_inserting() {
        let mut canvas = canvas_with_two_tables();
        let now = Instant::now();

        let outcome = canvas.place_table(fixtures::employees(), 90.0, 90.0, now);

        assert_eq!(outcome, PlaceOutcome::Glowing(tid("table_1")));
        assert_eq!(canvas.nodes().len(), 2);
        assert!(canvas.glow().is_glowing(&tid("table_1"), now));
        // The existing node did not move to the new drop point.
        assert_eq!(canvas.node(&tid("table_1")).expect("node").frame().x, 0.0);
    }

    #[test]
    fn connect_rejects_same_table() {
        let mut canvas = canvas_with_two_tables();
        let col_a = fixtures::employees().columns()[0].clone();
        let col_b = fixtures::employees().columns()[1].clone();

        let outcome = canvas.connect(
            EndpointRef::new(tid("table_1"), cid("column_1")),
            col_a,
            EndpointRef::new(tid("table_1"), cid("column_2")),
            col_b,
        );

        assert_eq!(outcome, ConnectOutcome::SameTable);
        assert!(canvas.connections().is_empty());
    }

    #[test]
    fn connect_resolves_against_current_anchors() {
        let mut canvas = canvas_with_two_tables();
        assert_eq!(connect_first_pair(&mut canvas), ConnectOutcome::Added);

        let conn = canvas.connections().get(0).expect("connection");
        let from_anchor = canvas
            .registry()
            .resolve(&tid("table_1"), &cid("column_1"))
            .expect("anchor");
        assert_eq!(conn.from().anchor(), from_anchor);
    }

    #[test]
    fn connect_to_clipped_column_is_a_silent_no_op() {
        let mut canvas = canvas_with_two_tables();
        // Shrink table_2 so column_2 (row index 1) is clipped out.
        canvas.resize_node(&tid("table_2"), 30.0, 5.0);

        assert_eq!(connect_first_pair(&mut canvas), ConnectOutcome::Unresolved);
        assert!(canvas.connections().is_empty());
    }

    #[test]
    fn moving_a_node_republishes_anchors_then_refreshes_connectors() {
        let mut canvas = canvas_with_two_tables();
        connect_first_pair(&mut canvas);
        let before = canvas.connections().get(0).expect("connection").from().anchor();

        canvas.move_node(&tid("table_1"), 20.0, 40.0);

        let after = canvas.connections().get(0).expect("connection").from().anchor();
        assert_eq!(after.x, before.x + 20.0);
        assert_eq!(after.y, before.y + 40.0);
    }

    #[test]
    fn shrinking_mid_connection_keeps_last_known_coordinates() {
        let mut canvas = canvas_with_two_tables();
        connect_first_pair(&mut canvas);
        let before = canvas.connections().get(0).expect("connection").to().anchor();

        canvas.resize_node(&tid("table_2"), 30.0, 5.0);

        let after = canvas.connections().get(0).expect("connection").to().anchor();
        assert_eq!(after, before);
    }

    #[test]
    fn removing_a_table_cascades_connections_and_anchors() {
        let mut canvas = canvas_with_two_tables();
        let now = Instant::now();
        canvas.place_table(fixtures::patients(), 100.0, 0.0, now);

        let pat_col = fixtures::patients().columns()[0].clone();
        let sal_col = fixtures::employee_salary().columns()[0].clone();
        connect_first_pair(&mut canvas);
        canvas.connect(
            EndpointRef::new(tid("table_3"), cid("column_1")),
            pat_col,
            EndpointRef::new(tid("table_2"), cid("column_1")),
            sal_col,
        );

        assert!(canvas.remove_table(&tid("table_2")));

        assert_eq!(canvas.nodes().len(), 2);
        assert!(canvas.connections().is_empty());
        assert!(canvas.registry().table_anchors(&tid("table_2")).is_none());
        assert!(!canvas.remove_table(&tid("table_2")));
    }

    #[test]
    fn viewport_resize_recomputes_every_table() {
        let mut canvas = canvas_with_two_tables();
        connect_first_pair(&mut canvas);
        let before = canvas.registry().clone();

        canvas.viewport_resized();

        assert_eq!(canvas.registry(), &before);
    }
}
