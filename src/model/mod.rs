// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Tables and columns are the durable descriptors; anchors and connections are
//! derived geometry resolved against the position registry.

pub mod anchor;
pub mod connection;
pub(crate) mod fixtures;
pub mod ids;
pub mod table;

pub use anchor::{Anchor, RowRect};
pub use connection::{Connection, ConnectionEnd, ConnectionList, EndpointRef};
pub use ids::{ColumnId, Id, IdError, TableId};
pub use table::{Column, Table};
