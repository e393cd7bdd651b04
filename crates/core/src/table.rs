//! Catalog table allow-list and the generic row set returned by ad-hoc
//! queries.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// The only tables the query console and exporter may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTable {
    Artists,
    Artworks,
    Museums,
    Collections,
}

impl CatalogTable {
    pub const ALL: [CatalogTable; 4] = [
        CatalogTable::Artists,
        CatalogTable::Artworks,
        CatalogTable::Museums,
        CatalogTable::Collections,
    ];

    /// SQL table name (also the URL segment of the list view).
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogTable::Artists => "artists",
            CatalogTable::Artworks => "artworks",
            CatalogTable::Museums => "museums",
            CatalogTable::Collections => "collections",
        }
    }

    /// Human-readable label for select boxes and headings.
    pub fn label(self) -> &'static str {
        match self {
            CatalogTable::Artists => "Artists",
            CatalogTable::Artworks => "Artworks",
            CatalogTable::Museums => "Museums",
            CatalogTable::Collections => "Collections",
        }
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogTable {
    type Err = CoreError;

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogTable::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid table name: '{s}'")))
    }
}

/// Rows from a statement whose shape is only known at run time.
///
/// Column order follows the store's order. Every value is rendered to
/// text; SQL `NULL` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn allow_listed_tables_parse() {
        for table in CatalogTable::ALL {
            assert_eq!(table.as_str().parse::<CatalogTable>().unwrap(), table);
        }
    }

    #[test]
    fn other_tables_rejected() {
        assert_matches!("users".parse::<CatalogTable>(), Err(CoreError::Validation(_)));
        assert!("Artists".parse::<CatalogTable>().is_err());
        assert!("artists; DROP TABLE artists".parse::<CatalogTable>().is_err());
        assert!("".parse::<CatalogTable>().is_err());
    }
}
