// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The injected, read-only table source the palette is handed at startup.
//!
//! Either the built-in sample set or a JSON file holding an array of table
//! descriptors. The core only ever copies dragged-out values; the catalog is
//! never mutated.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::dnd::TableDescriptor;
use crate::model::{fixtures, Table};

/// A read-only, enumerable sequence of table descriptors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: Vec<Table>,
}

impl Catalog {
    /// The built-in sample set: employees, employee_salary, patients.
    pub fn builtin() -> Self {
        Self { tables: fixtures::sample_tables() }
    }

    pub fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Loads a catalog from a JSON array of table descriptors.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let descriptors: Vec<TableDescriptor> = serde_json::from_str(raw)
            .map_err(|err| CatalogError::Parse { reason: err.to_string() })?;
        let tables = descriptors
            .into_iter()
            .map(|descriptor| {
                let id = descriptor.id.clone();
                Table::try_from(descriptor)
                    .map_err(|err| CatalogError::InvalidTable { id, reason: err.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tables })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| CatalogError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Io { path: String, reason: String },
    Parse { reason: String },
    InvalidTable { id: String, reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "cannot read catalog {path}: {reason}"),
            Self::Parse { reason } => write!(f, "cannot parse catalog: {reason}"),
            Self::InvalidTable { id, reason } => {
                write!(f, "invalid table '{id}' in catalog: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};

    #[test]
    fn builtin_catalog_carries_the_sample_set() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.tables()[0].name(), "employees");
    }

    #[test]
    fn parses_a_descriptor_array() {
        let raw = r#"[
            {
                "id": "orders",
                "name": "orders",
                "columns": [
                    {"column_id": "c1", "name": "order_id", "data_type": "integer"},
                    {"column_id": "c2", "name": "customer_id", "data_type": "integer"}
                ]
            }
        ]"#;

        let catalog = Catalog::from_json_str(raw).expect("catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tables()[0].columns().len(), 2);
    }

    #[test]
    fn rejects_invalid_descriptors() {
        let err = Catalog::from_json_str("{}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));

        let raw = r#"[{"id": "", "name": "x", "columns": []}]"#;
        let err = Catalog::from_json_str(raw).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTable { .. }));
    }
}
