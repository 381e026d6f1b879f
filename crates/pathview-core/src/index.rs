//! Flat row-major addressing and 4-directional adjacency.

use crate::cell::Cell;

/// The four cardinal steps in fixed order: up, down, left, right.
///
/// Neighbor enumeration order decides which equal-cost predecessor a cell
/// keeps during relaxation, so it must stay stable.
const DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Grid dimensions plus pure addressing: bounds tests, flat row-major
/// encode/decode, and in-bounds neighbor enumeration.
///
/// Carries no state beyond the dimensions; copies are cheap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridIndex {
    rows: i32,
    cols: i32,
}

impl GridIndex {
    /// Create an index for a `rows × cols` grid. Negative dimensions clamp
    /// to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Convert a cell to its flat row-major index, or `None` if out of
    /// bounds.
    #[inline]
    pub fn idx(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Convert a flat index back to a cell. `idx` must be less than
    /// `len()`, so an empty grid has no valid argument.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        debug_assert!(idx < self.len());
        let cols = self.cols as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Append the in-bounds 4-directional neighbors of `cell` to `buf`, in
    /// the fixed order up, down, left, right. The caller clears `buf`
    /// before calling.
    pub fn neighbors(self, cell: Cell, buf: &mut Vec<Cell>) {
        for (dr, dc) in DIRS {
            let n = cell.shift(dr, dc);
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> CellIter {
        CellIter {
            index: self,
            pos: 0,
        }
    }
}

impl IntoIterator for GridIndex {
    type Item = Cell;
    type IntoIter = CellIter;

    #[inline]
    fn into_iter(self) -> CellIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`GridIndex`].
#[derive(Clone, Debug)]
pub struct CellIter {
    index: GridIndex,
    pos: usize,
}

impl Iterator for CellIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.pos >= self.index.len() {
            return None;
        }
        let c = self.index.cell(self.pos);
        self.pos += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.index.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellIter {}

// Deserialization goes through `new` so the dimension clamp holds for
// decoded input too.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridIndex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            rows: i32,
            cols: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(GridIndex::new(raw.rows, raw.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_bounds() {
        let ix = GridIndex::new(3, 5);
        assert!(ix.contains(Cell::new(0, 0)));
        assert!(ix.contains(Cell::new(2, 4)));
        assert!(!ix.contains(Cell::new(3, 0)));
        assert!(!ix.contains(Cell::new(0, 5)));
        assert!(!ix.contains(Cell::new(-1, 0)));
        assert!(!ix.contains(Cell::new(0, -1)));
    }

    #[test]
    fn idx_cell_round_trip() {
        let ix = GridIndex::new(4, 7);
        for (i, c) in ix.iter().enumerate() {
            assert_eq!(ix.idx(c), Some(i));
            assert_eq!(ix.cell(i), c);
        }
        assert_eq!(ix.idx(Cell::new(4, 0)), None);
    }

    #[test]
    fn neighbor_order_center() {
        let ix = GridIndex::new(3, 3);
        let mut buf = Vec::new();
        ix.neighbors(Cell::new(1, 1), &mut buf);
        // Up, down, left, right.
        assert_eq!(
            buf,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbor_order_corner() {
        let ix = GridIndex::new(3, 3);
        let mut buf = Vec::new();
        ix.neighbors(Cell::new(0, 0), &mut buf);
        // Up and left are filtered; down comes before right.
        assert_eq!(buf, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn iter_row_major() {
        let ix = GridIndex::new(2, 3);
        let cells: Vec<_> = ix.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[5], Cell::new(1, 2));
    }

    #[test]
    fn negative_dims_clamp() {
        let ix = GridIndex::new(-2, 4);
        assert!(ix.is_empty());
        assert_eq!(ix.iter().count(), 0);
    }

    #[test]
    #[should_panic]
    fn cell_out_of_range_panics() {
        GridIndex::new(3, -1).cell(0);
    }
}
