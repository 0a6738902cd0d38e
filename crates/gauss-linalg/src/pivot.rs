//! Pivot bookkeeping.

/// Which column each reduced row pivots on.
///
/// Rows are filled top-down while the engine scans columns, so the rows that
/// have a pivot are exactly `0..rank()` and their pivot columns increase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PivotMap {
    columns: Vec<Option<usize>>,
}

impl PivotMap {
    /// Creates a map for `num_rows` rows, none of them pivoted yet.
    #[must_use]
    pub fn new(num_rows: usize) -> Self {
        Self {
            columns: vec![None; num_rows],
        }
    }

    pub(crate) fn assign(&mut self, row: usize, col: usize) {
        debug_assert!(self.columns[row].is_none(), "row {row} already has a pivot");
        self.columns[row] = Some(col);
    }

    /// The pivot column of `row`, if it has one.
    #[must_use]
    pub fn pivot_of(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied().flatten()
    }

    /// Number of pivots found, i.e. the rank of the coefficient matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    /// `(row, column)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
    }

    /// Pivot columns in row order, which is also increasing column order.
    #[must_use]
    pub fn pivot_columns(&self) -> Vec<usize> {
        self.columns.iter().filter_map(|c| *c).collect()
    }

    /// Returns true if some row pivots on `col`.
    #[must_use]
    pub fn is_pivot_column(&self, col: usize) -> bool {
        self.columns.contains(&Some(col))
    }

    /// Columns among `0..num_vars` without a pivot, in increasing order.
    #[must_use]
    pub fn free_columns(&self, num_vars: usize) -> Vec<usize> {
        (0..num_vars).filter(|&col| !self.is_pivot_column(col)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_and_free_columns() {
        let mut pivots = PivotMap::new(3);
        pivots.assign(0, 0);
        pivots.assign(1, 2);

        assert_eq!(pivots.rank(), 2);
        assert_eq!(pivots.pivot_of(1), Some(2));
        assert_eq!(pivots.pivot_of(2), None);
        assert_eq!(pivots.pivot_of(7), None);
        assert!(pivots.is_pivot_column(2));
        assert_eq!(pivots.free_columns(4), vec![1, 3]);
        assert_eq!(pivots.pivot_columns(), vec![0, 2]);
        assert_eq!(pivots.iter().collect::<Vec<_>>(), vec![(0, 0), (1, 2)]);
    }
}
