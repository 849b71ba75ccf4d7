// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ColumnId, TableId};

/// One column row of a table descriptor.
///
/// Immutable for the lifetime of its owning [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    column_id: ColumnId,
    name: String,
    data_type: String,
}

impl Column {
    pub fn new(column_id: ColumnId, name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            column_id,
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

/// A table descriptor: what the palette offers and what the canvas opens.
///
/// The open set owns its copies; the catalog the descriptor was dragged out of
/// is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: TableId,
    name: String,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(id: TableId, name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            id,
            name: name.into(),
            columns,
        }
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.column_id() == column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, Table};
    use crate::model::ids::{ColumnId, TableId};

    #[test]
    fn table_looks_up_columns_by_id() {
        let c1 = ColumnId::new("column_1").expect("column id");
        let c2 = ColumnId::new("column_2").expect("column id");
        let table = Table::new(
            TableId::new("table_1").expect("table id"),
            "employees",
            vec![
                Column::new(c1.clone(), "employee_id", "integer"),
                Column::new(c2.clone(), "email", "string"),
            ],
        );

        assert_eq!(table.column(&c1).map(Column::name), Some("employee_id"));
        assert_eq!(table.column(&c2).map(Column::data_type), Some("string"));
        assert!(table.column(&ColumnId::new("column_9").expect("column id")).is_none());
    }
}
