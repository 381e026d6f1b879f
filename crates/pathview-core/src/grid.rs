//! The cost grid: per-cell traversal costs plus the start/goal endpoints.

use crate::cell::Cell;
use crate::index::GridIndex;

/// Traversal cost of an open cell.
pub const OPEN: i32 = 1;

/// Cost sentinel marking an impassable (wall) cell.
pub const BLOCKED: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Construction-time grid configuration.
///
/// Dimensions clamp to at least 1×1. Endpoints default to cells derived
/// from the dimensions, `(rows/2, cols/5)` for the start and
/// `(rows/2, 4*cols/5)` for the goal; the builder methods override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    rows: i32,
    cols: i32,
    start: Cell,
    goal: Cell,
}

impl GridConfig {
    /// Configuration for a `rows × cols` grid with derived endpoints.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            start: Self::default_start(rows, cols),
            goal: Self::default_goal(rows, cols),
        }
    }

    /// Override the start cell. Out-of-bounds cells are ignored.
    pub fn with_start(mut self, cell: Cell) -> Self {
        if GridIndex::new(self.rows, self.cols).contains(cell) {
            self.start = cell;
        }
        self
    }

    /// Override the goal cell. Out-of-bounds cells are ignored.
    pub fn with_goal(mut self, cell: Cell) -> Self {
        if GridIndex::new(self.rows, self.cols).contains(cell) {
            self.goal = cell;
        }
        self
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The configured start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The configured goal cell.
    pub fn goal(&self) -> Cell {
        self.goal
    }

    fn default_start(rows: i32, cols: i32) -> Cell {
        Cell::new(rows / 2, cols / 5)
    }

    fn default_goal(rows: i32, cols: i32) -> Cell {
        Cell::new(rows / 2, 4 * cols / 5)
    }
}

impl Default for GridConfig {
    /// The 25×50 grid of the historical canvas layout.
    fn default() -> Self {
        Self::new(25, 50)
    }
}

// ---------------------------------------------------------------------------
// CostGrid
// ---------------------------------------------------------------------------

/// A fixed-size grid of traversal costs with designated start and goal.
///
/// Every cell carries exactly one cost: [`OPEN`] for passable cells or
/// [`BLOCKED`] for walls. The endpoints are always in bounds and never
/// walls; guarded operations that would break that are silent no-ops,
/// matching the permissive pointer-driven mutation model of the consuming
/// layer. Resizing is not supported; a new grid replaces the old one.
#[derive(Debug, Clone)]
pub struct CostGrid {
    config: GridConfig,
    index: GridIndex,
    costs: Vec<i32>,
    start: Cell,
    goal: Cell,
}

impl CostGrid {
    /// Create a grid with every cost [`OPEN`] and endpoints from `config`.
    ///
    /// The configuration is re-validated on the way in, so endpoints from a
    /// hand-built (e.g. deserialized) config that fall outside the grid
    /// quietly revert to the derived defaults.
    ///
    /// The historical implementation forced the start cell's own cost to 0.
    /// Edge cost is always read from the destination cell, never the
    /// source, so that value could never reach a search while the start
    /// remained the source; the start is kept at [`OPEN`] here for
    /// uniformity, which also avoids leaving a stale free-to-enter cell
    /// behind when the start later moves.
    pub fn new(config: GridConfig) -> Self {
        let config = GridConfig::new(config.rows, config.cols)
            .with_start(config.start)
            .with_goal(config.goal);
        let index = GridIndex::new(config.rows, config.cols);
        Self {
            config,
            index,
            costs: vec![OPEN; index.len()],
            start: config.start,
            goal: config.goal,
        }
    }

    /// The configuration the grid was built from.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// The addressing index for this grid.
    #[inline]
    pub fn index(&self) -> GridIndex {
        self.index
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.index.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.index.cols()
    }

    /// The current start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The current goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Raw cost of `cell`. Out-of-bounds cells read as [`BLOCKED`]:
    /// outside the grid is impassable.
    #[inline]
    pub fn cost_of(&self, cell: Cell) -> i32 {
        match self.index.idx(cell) {
            Some(i) => self.costs[i],
            None => BLOCKED,
        }
    }

    /// Whether `cell` is a wall.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.cost_of(cell) == BLOCKED
    }

    /// Turn `cell` into a wall. Silent no-op when `cell` is out of bounds
    /// or is the current start or goal.
    pub fn set_wall(&mut self, cell: Cell) {
        if cell == self.start || cell == self.goal {
            return;
        }
        if let Some(i) = self.index.idx(cell) {
            self.costs[i] = BLOCKED;
        }
    }

    /// Reopen a single wall cell. No-op for non-wall cells, so costs other
    /// than [`BLOCKED`] are never disturbed.
    pub fn clear_wall(&mut self, cell: Cell) {
        if let Some(i) = self.index.idx(cell) {
            if self.costs[i] == BLOCKED {
                self.costs[i] = OPEN;
            }
        }
    }

    /// Reopen every wall cell. Idempotent; non-wall costs are untouched.
    pub fn clear_walls(&mut self) {
        for c in self.costs.iter_mut() {
            if *c == BLOCKED {
                *c = OPEN;
            }
        }
    }

    /// Restore the as-constructed state: every cost [`OPEN`] and the
    /// endpoints back at their configured cells.
    pub fn reset(&mut self) {
        self.costs.fill(OPEN);
        self.start = self.config.start;
        self.goal = self.config.goal;
    }

    /// Move the start cell. Rejected (silent no-op) when `cell` is out of
    /// bounds or a wall. No cost changes as a side effect.
    pub fn move_start(&mut self, cell: Cell) {
        if self.index.contains(cell) && !self.is_wall(cell) {
            self.start = cell;
        }
    }

    /// Move the goal cell. Rejected (silent no-op) when `cell` is out of
    /// bounds or a wall. No cost changes as a side effect.
    pub fn move_goal(&mut self, cell: Cell) {
        if self.index.contains(cell) && !self.is_wall(cell) {
            self.goal = cell;
        }
    }

    /// Raw cost write with no endpoint guard, for generators that rebuild
    /// the layout wholesale. `cost` must be > 0 ([`BLOCKED`] marks a
    /// wall). A generator must leave the endpoints on open cells before
    /// handing the grid back. No-op out of bounds.
    #[inline]
    pub fn set_cost(&mut self, cell: Cell, cost: i32) {
        if let Some(i) = self.index.idx(cell) {
            self.costs[i] = cost;
        }
    }

    /// Fill every cell with `cost` (raw, no endpoint guard). `cost` must
    /// be > 0 ([`BLOCKED`] marks a wall).
    pub fn fill(&mut self, cost: i32) {
        self.costs.fill(cost);
    }

    /// Append the in-bounds neighbors of `cell` to `buf` in the fixed
    /// up, down, left, right order.
    #[inline]
    pub fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>) {
        self.index.neighbors(cell, buf);
    }
}
