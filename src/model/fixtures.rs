// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ColumnId, TableId};
use super::table::{Column, Table};

fn tid(value: &str) -> TableId {
    TableId::new(value).expect("table id")
}

fn cid(value: &str) -> ColumnId {
    ColumnId::new(value).expect("column id")
}

fn col(id: &str, name: &str, data_type: &str) -> Column {
    Column::new(cid(id), name, data_type)
}

pub(crate) fn employees() -> Table {
    Table::new(
        tid("table_1"),
        "employees",
        vec![
            col("column_1", "employee_id", "integer"),
            col("column_2", "email", "string"),
            col("column_3", "department_id", "integer"),
        ],
    )
}

pub(crate) fn employee_salary() -> Table {
    Table::new(
        tid("table_2"),
        "employee_salary",
        vec![
            col("column_1", "age", "integer"),
            col("column_2", "employee_id", "integer"),
            col("column_3", "experience", "integer"),
        ],
    )
}

pub(crate) fn patients() -> Table {
    Table::new(
        tid("table_3"),
        "patients",
        vec![
            col("column_1", "first_name", "varchar(50)"),
            col("column_2", "last_name", "varchar(50)"),
            col("column_3", "gender", "varchar(10)"),
            col("column_4", "date_of_birth", "date"),
        ],
    )
}

pub(crate) fn sample_tables() -> Vec<Table> {
    vec![employees(), employee_salary(), patients()]
}
