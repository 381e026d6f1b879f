use pathview_core::{Cell, CostGrid, GridIndex};

/// Sentinel distance meaning "not reached" in a search result.
pub const UNREACHABLE: i32 = i32::MAX;

/// Predecessor sentinel for cells without one (unreached cells, and the
/// root of the search tree).
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

/// Entry in the open heap, ordered by priority for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct OpenNode {
    pub(crate) f: f64,
    pub(crate) idx: usize,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Equal
        // priorities pop the smallest flat index, so ties always resolve
        // to the earliest cell in row-major order.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OpenNode {}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// Immutable snapshot of one finished search run.
///
/// Holds the distance table, the predecessor links, and the sequence of
/// settled cells in settlement order, together with the start, goal, and
/// grid index the run used. Each engine call produces a fresh result; a
/// consumer can replay the settlement sequence or reconstruct the final
/// path without touching the grid again.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub(crate) index: GridIndex,
    pub(crate) start: Cell,
    pub(crate) goal: Cell,
    pub(crate) dist: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) visited: Vec<Cell>,
}

impl SearchResult {
    /// A result with nothing explored yet, snapshotting the grid's
    /// endpoints and index. Engines fill it in.
    pub(crate) fn unexplored(grid: &CostGrid) -> Self {
        let index = grid.index();
        Self {
            index,
            start: grid.start(),
            goal: grid.goal(),
            dist: vec![UNREACHABLE; index.len()],
            parent: vec![NO_PARENT; index.len()],
            visited: Vec::new(),
        }
    }

    /// The start cell of the run.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell of the run.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The grid index the run used.
    #[inline]
    pub fn index(&self) -> GridIndex {
        self.index
    }

    /// Accumulated distance from the start to `cell`.
    ///
    /// Returns [`UNREACHABLE`] if `cell` is outside the grid or was never
    /// relaxed by the run.
    pub fn distance_at(&self, cell: Cell) -> i32 {
        match self.index.idx(cell) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// The cell `cell` was reached from, or `None` for the start cell,
    /// unreached cells, and out-of-bounds cells.
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        let i = self.index.idx(cell)?;
        let pi = self.parent[i];
        if pi == NO_PARENT {
            return None;
        }
        Some(self.index.cell(pi))
    }

    /// Settled cells in settlement order. When the goal was reached it is
    /// the last element.
    #[inline]
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Whether the run reached the goal.
    #[inline]
    pub fn reached(&self) -> bool {
        self.distance_at(self.goal) != UNREACHABLE
    }

    /// The shortest path from start to goal, both inclusive, rebuilt from
    /// the predecessor links.
    ///
    /// Returns `None` when the goal was not reached. When start and goal
    /// coincide the path is the single shared cell.
    pub fn path(&self) -> Option<Vec<Cell>> {
        if !self.reached() {
            return None;
        }
        let goal_idx = self.index.idx(self.goal)?;

        let mut path = Vec::new();
        let mut ci = goal_idx;
        loop {
            path.push(self.index.cell(ci));
            let pi = self.parent[ci];
            if pi == NO_PARENT {
                break;
            }
            ci = pi;
        }
        path.reverse();

        // The predecessor links form a tree rooted at the start, so the
        // walk must have terminated there.
        if path.first() != Some(&self.start) {
            return None;
        }
        Some(path)
    }
}
