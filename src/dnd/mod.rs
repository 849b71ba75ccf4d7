// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The drag-and-drop protocol.
//!
//! Both drag kinds travel through one transfer-payload mechanism: a tagged
//! JSON message under the `table` or `column` channel. Parsing and shape
//! validation live here, centrally; handlers receive typed payloads. Every
//! failure mode is absorbed as a diagnosed no-op, never a user-facing error.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, ConnectOutcome, PlaceOutcome};
use crate::model::{Column, ColumnId, EndpointRef, IdError, Table, TableId};

/// Wire shape of a column inside a drag payload or catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub column_id: String,
    pub name: String,
    pub data_type: String,
}

/// Wire shape of a table inside a drag payload or catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub id: String,
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl From<&Column> for ColumnDescriptor {
    fn from(column: &Column) -> Self {
        Self {
            column_id: column.column_id().to_string(),
            name: column.name().to_owned(),
            data_type: column.data_type().to_owned(),
        }
    }
}

impl From<&Table> for TableDescriptor {
    fn from(table: &Table) -> Self {
        Self {
            id: table.id().to_string(),
            name: table.name().to_owned(),
            columns: table.columns().iter().map(ColumnDescriptor::from).collect(),
        }
    }
}

impl TryFrom<ColumnDescriptor> for Column {
    type Error = IdError;

    fn try_from(descriptor: ColumnDescriptor) -> Result<Self, Self::Error> {
        Ok(Column::new(
            ColumnId::new(descriptor.column_id)?,
            descriptor.name,
            descriptor.data_type,
        ))
    }
}

impl TryFrom<TableDescriptor> for Table {
    type Error = IdError;

    fn try_from(descriptor: TableDescriptor) -> Result<Self, Self::Error> {
        let columns = descriptor
            .columns
            .into_iter()
            .map(Column::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Table::new(TableId::new(descriptor.id)?, descriptor.name, columns))
    }
}

/// The tagged transfer payload carried by a drag session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum TransferPayload {
    /// A full table descriptor, originated by the palette.
    Table { table: TableDescriptor },
    /// A single column plus its source table, originated by a column row.
    Column { column: ColumnDescriptor, table_id: String },
}

impl TransferPayload {
    pub fn channel(&self) -> PayloadChannel {
        match self {
            Self::Table { .. } => PayloadChannel::Table,
            Self::Column { .. } => PayloadChannel::Column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadChannel {
    Table,
    Column,
}

impl fmt::Display for PayloadChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Why a drop was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// No payload arrived on the channel the drop target expects.
    MissingChannel { expected: PayloadChannel },
    /// The payload arrived but failed JSON parsing or shape validation.
    Malformed { reason: String },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChannel { expected } => {
                write!(f, "no {expected} payload in drop")
            }
            Self::Malformed { reason } => write!(f, "malformed drop payload: {reason}"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// Serializes a table drag payload at drag-start.
pub fn encode_table_payload(table: &Table) -> String {
    let payload = TransferPayload::Table { table: TableDescriptor::from(table) };
    serde_json::to_string(&payload).expect("table payload serializes")
}

/// Serializes a column drag payload at drag-start.
pub fn encode_column_payload(column: &Column, table_id: &TableId) -> String {
    let payload = TransferPayload::Column {
        column: ColumnDescriptor::from(column),
        table_id: table_id.to_string(),
    };
    serde_json::to_string(&payload).expect("column payload serializes")
}

/// Parses a raw transfer string into a typed payload.
pub fn parse_payload(raw: &str) -> Result<TransferPayload, PayloadError> {
    serde_json::from_str(raw).map_err(|err| PayloadError::Malformed { reason: err.to_string() })
}

/// Where a drop landed.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// The open canvas surface, at a canvas-local point.
    Surface { x: f64, y: f64 },
    /// A specific column row of an open table.
    ColumnRow { table_id: TableId, column: Column },
}

impl DropTarget {
    fn expected_channel(&self) -> PayloadChannel {
        match self {
            Self::Surface { .. } => PayloadChannel::Table,
            Self::ColumnRow { .. } => PayloadChannel::Column,
        }
    }
}

/// What a handled drop did, for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    TablePlaced(TableId),
    DuplicateTable(TableId),
    ConnectionAdded,
    SelfConnectionRejected,
    EndpointUnresolved,
}

/// Dispatches a drop: parse, validate, and apply against the canvas.
///
/// A payload on the wrong channel for the target counts as missing. All
/// errors leave the canvas untouched; the caller logs them as diagnostics.
pub fn handle_drop(
    canvas: &mut Canvas,
    raw: Option<&str>,
    target: DropTarget,
    now: Instant,
) -> Result<DropOutcome, PayloadError> {
    let expected = target.expected_channel();
    let raw = raw.ok_or(PayloadError::MissingChannel { expected })?;
    let payload = parse_payload(raw)?;
    if payload.channel() != expected {
        return Err(PayloadError::MissingChannel { expected });
    }

    match (payload, target) {
        (TransferPayload::Table { table }, DropTarget::Surface { x, y }) => {
            let table = Table::try_from(table)
                .map_err(|err| PayloadError::Malformed { reason: err.to_string() })?;
            match canvas.place_table(table, x, y, now) {
                PlaceOutcome::Placed(table_id) => Ok(DropOutcome::TablePlaced(table_id)),
                PlaceOutcome::Glowing(table_id) => Ok(DropOutcome::DuplicateTable(table_id)),
            }
        }
        (TransferPayload::Column { column, table_id }, DropTarget::ColumnRow { table_id: target_table, column: target_column }) => {
            let source_table = TableId::new(table_id)
                .map_err(|err| PayloadError::Malformed { reason: err.to_string() })?;
            let source_column = Column::try_from(column)
                .map_err(|err| PayloadError::Malformed { reason: err.to_string() })?;

            let from = EndpointRef::new(source_table, source_column.column_id().clone());
            let to = EndpointRef::new(target_table, target_column.column_id().clone());
            match canvas.connect(from, source_column, to, target_column) {
                ConnectOutcome::Added => Ok(DropOutcome::ConnectionAdded),
                ConnectOutcome::SameTable => Ok(DropOutcome::SelfConnectionRejected),
                ConnectOutcome::Unresolved => Ok(DropOutcome::EndpointUnresolved),
            }
        }
        // Channel/target agreement was checked above.
        _ => unreachable!("payload channel matches drop target"),
    }
}
