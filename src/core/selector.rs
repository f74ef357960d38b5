//! Row selection

use crate::error::{SoilError, SoilResult};
use crate::types::{Row, SoilTable};
use std::collections::BTreeSet;

/// Set of selected data-row indices. Iterates in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    pub fn new<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Every row of the table
    pub fn all(table: &SoilTable) -> Self {
        Self::new(0..table.row_count())
    }

    /// Rows whose layer label matches one of `labels`
    pub fn by_labels(table: &SoilTable, labels: &[String]) -> SoilResult<Self> {
        let mut indices = BTreeSet::new();
        for wanted in labels {
            let matches: Vec<usize> = table
                .rows
                .iter()
                .filter(|row| row.label() == *wanted)
                .map(|row| row.index)
                .collect();
            if matches.is_empty() {
                return Err(SoilError::Selection(format!(
                    "No soil layer labelled '{}'",
                    wanted
                )));
            }
            indices.extend(matches);
        }
        Ok(Self { indices })
    }

    /// Union of two selections
    pub fn merge(mut self, other: Selection) -> Self {
        self.indices.extend(other.indices);
        self
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Rows of `table` picked by `selection`, in table order
pub fn select_rows<'a>(table: &'a SoilTable, selection: &Selection) -> SoilResult<Vec<&'a Row>> {
    if selection.is_empty() {
        return Err(SoilError::EmptySelection);
    }
    selection
        .iter()
        .map(|index| {
            table.rows.get(index).ok_or_else(|| {
                SoilError::Selection(format!(
                    "Row {} is out of range (table has {} rows)",
                    index,
                    table.row_count()
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn table() -> SoilTable {
        SoilTable::from_cells(
            vec![],
            vec![
                vec![CellValue::Text("1".to_string())],
                vec![CellValue::Text("2a".to_string())],
                vec![CellValue::Empty],
            ],
        )
    }

    #[test]
    fn test_select_in_table_order() {
        let table = table();
        let rows = select_rows(&table, &Selection::new([2, 0, 2])).unwrap();
        let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_empty_selection_is_error() {
        let err = select_rows(&table(), &Selection::default()).unwrap_err();
        assert!(matches!(err, SoilError::EmptySelection));
    }

    #[test]
    fn test_out_of_range_is_error() {
        let err = select_rows(&table(), &Selection::new([5])).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_by_labels() {
        let table = table();
        let sel = Selection::by_labels(&table, &["2a".to_string(), "Row_2".to_string()]).unwrap();
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert!(Selection::by_labels(&table, &["9".to_string()]).is_err());
    }

    #[test]
    fn test_all_and_merge() {
        let table = table();
        assert_eq!(Selection::all(&table).len(), 3);
        let merged = Selection::new([0]).merge(Selection::new([2, 0]));
        assert_eq!(merged.iter().collect::<Vec<_>>(), vec![0, 2]);
    }
}
