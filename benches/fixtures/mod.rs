// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use triton::canvas::Canvas;
use triton::model::{Column, ColumnId, EndpointRef, Table, TableId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumGrid,
    LargeDense,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumGrid => "medium_grid",
            Self::LargeDense => "large_dense",
        }
    }

    fn tables(self) -> usize {
        match self {
            Self::Small => 3,
            Self::MediumGrid => 12,
            Self::LargeDense => 40,
        }
    }

    fn columns(self) -> usize {
        match self {
            Self::Small => 4,
            Self::MediumGrid => 8,
            Self::LargeDense => 12,
        }
    }
}

fn table(index: usize, columns: usize) -> Table {
    let id = TableId::new(format!("t{index}")).expect("table id");
    let columns = (0..columns)
        .map(|col| {
            Column::new(
                ColumnId::new(format!("c{col}")).expect("column id"),
                format!("column_{col}"),
                "integer",
            )
        })
        .collect();
    Table::new(id, format!("table_{index}"), columns)
}

/// A canvas with `Case::tables()` nodes laid out on a grid and a connector
/// chained between every adjacent pair.
pub fn canvas(case: Case) -> Canvas {
    let mut canvas = Canvas::new();
    let now = Instant::now();
    let columns = case.columns();

    for index in 0..case.tables() {
        let x = (index % 6) as f64 * 36.0;
        let y = (index / 6) as f64 * 16.0;
        canvas.place_table(table(index, columns), x, y, now);
    }

    for index in 1..case.tables() {
        let from_table = table(index - 1, columns);
        let to_table = table(index, columns);
        let from_col = from_table.columns()[(index - 1) % columns].clone();
        let to_col = to_table.columns()[index % columns].clone();
        canvas.connect(
            EndpointRef::new(from_table.id().clone(), from_col.column_id().clone()),
            from_col,
            EndpointRef::new(to_table.id().clone(), to_col.column_id().clone()),
            to_col,
        );
    }

    canvas
}
