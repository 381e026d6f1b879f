//! Randomized depth-first maze carving.
//!
//! The generator rebuilds a grid's obstacle layout as a perfect maze: the
//! open cells form a spanning tree, so every pair of open cells is
//! connected by exactly one route.

use pathview_core::{BLOCKED, Cell, CostGrid, GridIndex, OPEN};
use rand::Rng;

/// Maze generator operating on a [`CostGrid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator from a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Replace the grid's layout with a randomly carved maze and move the
    /// endpoints onto random open cells. Returns the number of open cells
    /// left behind.
    ///
    /// Cells at odd coordinates act as passage nodes, every other cell as
    /// a candidate wall, so the maze needs an interior node lattice of
    /// `(rows-1)/2 × (cols-1)/2` logical nodes. The grid is filled with
    /// walls, then a depth-first traversal walks the lattice from a random
    /// node, carving each newly visited node and the wall cell between it
    /// and its predecessor. Dead ends backtrack through the explicit
    /// stack. The carved cells form a spanning tree of the lattice:
    /// `2·nr·nc - 1` open cells, acyclic, all mutually reachable.
    ///
    /// Grids too small to hold a wall ring (under 3 in either dimension)
    /// have no lattice; they carve to an open field instead.
    ///
    /// The new start and goal are drawn independently and may coincide.
    pub fn carve(&mut self, grid: &mut CostGrid) -> usize {
        let nr = (grid.rows() - 1) / 2;
        let nc = (grid.cols() - 1) / 2;

        if nr < 1 || nc < 1 {
            grid.clear_walls();
            let start = self.random_open_cell(grid);
            let goal = self.random_open_cell(grid);
            grid.move_start(start);
            grid.move_goal(goal);
            return grid.index().len();
        }

        let lattice = GridIndex::new(nr, nc);
        grid.fill(BLOCKED);
        let mut carved = 0;

        let mut visited = vec![false; lattice.len()];
        let mut stack: Vec<Cell> = Vec::new();
        let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

        let first = Cell::new(
            self.rng.random_range(0..nr),
            self.rng.random_range(0..nc),
        );
        if let Some(fi) = lattice.idx(first) {
            visited[fi] = true;
        }
        grid.set_cost(passage(first), OPEN);
        carved += 1;
        stack.push(first);

        while let Some(cur) = stack.pop() {
            nbuf.clear();
            lattice.neighbors(cur, &mut nbuf);
            nbuf.retain(|&n| lattice.idx(n).is_some_and(|i| !visited[i]));
            if nbuf.is_empty() {
                // Dead end; cur stays popped, backtracking to its parent.
                continue;
            }

            stack.push(cur);
            let next = nbuf[self.rng.random_range(0..nbuf.len())];
            if let Some(ni) = lattice.idx(next) {
                visited[ni] = true;
            }

            // Open the wall between the two nodes, then the node itself.
            let a = passage(cur);
            let b = passage(next);
            grid.set_cost(Cell::new((a.row + b.row) / 2, (a.col + b.col) / 2), OPEN);
            grid.set_cost(b, OPEN);
            carved += 2;
            stack.push(next);
        }

        let start = self.random_open_cell(grid);
        let goal = self.random_open_cell(grid);
        grid.move_start(start);
        grid.move_goal(goal);
        carved
    }

    /// A uniformly random non-wall cell, found by rejection sampling.
    /// Requires at least one open cell, which `carve` guarantees.
    fn random_open_cell(&mut self, grid: &CostGrid) -> Cell {
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..grid.rows()),
                self.rng.random_range(0..grid.cols()),
            );
            if !grid.is_wall(cell) {
                return cell;
            }
        }
    }
}

/// Physical cell of a logical lattice node.
#[inline]
fn passage(node: Cell) -> Cell {
    Cell::new(2 * node.row + 1, 2 * node.col + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathview_core::GridConfig;
    use pathview_search::dijkstra;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn open_count(grid: &CostGrid) -> usize {
        grid.index().iter().filter(|&c| !grid.is_wall(c)).count()
    }

    /// Flood fill over open cells from the grid's start.
    fn reachable_open_count(grid: &CostGrid) -> usize {
        let index = grid.index();
        let mut seen = vec![false; index.len()];
        let mut stack = Vec::new();
        let mut nbuf = Vec::new();
        let mut count = 0;

        if let Some(si) = index.idx(grid.start()) {
            if !grid.is_wall(grid.start()) {
                seen[si] = true;
                stack.push(grid.start());
            }
        }
        while let Some(cell) = stack.pop() {
            count += 1;
            nbuf.clear();
            index.neighbors(cell, &mut nbuf);
            for &n in nbuf.iter() {
                if grid.is_wall(n) {
                    continue;
                }
                if let Some(i) = index.idx(n) {
                    if !seen[i] {
                        seen[i] = true;
                        stack.push(n);
                    }
                }
            }
        }
        count
    }

    #[test]
    fn carves_a_spanning_tree() {
        let mut grid = CostGrid::new(GridConfig::new(17, 25));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(42));
        let carved = mg.carve(&mut grid);

        // 8 × 12 lattice nodes plus one carved wall per tree edge.
        assert_eq!(carved, 2 * 8 * 12 - 1);
        assert_eq!(open_count(&grid), carved);
        // A spanning tree: every open cell reachable from the start.
        assert_eq!(reachable_open_count(&grid), carved);
    }

    #[test]
    fn boundary_ring_stays_walled() {
        let mut grid = CostGrid::new(GridConfig::new(17, 25));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(1));
        mg.carve(&mut grid);

        for c in 0..25 {
            assert!(grid.is_wall(Cell::new(0, c)));
            assert!(grid.is_wall(Cell::new(16, c)));
        }
        for r in 0..17 {
            assert!(grid.is_wall(Cell::new(r, 0)));
            assert!(grid.is_wall(Cell::new(r, 24)));
        }
    }

    #[test]
    fn even_dims_leave_a_double_wall_margin() {
        let mut grid = CostGrid::new(GridConfig::new(16, 24));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(5));
        let carved = mg.carve(&mut grid);

        // 7 × 11 lattice; the lattice never reaches the far edges, so the
        // last two rows and columns stay walled.
        assert_eq!(carved, 2 * 7 * 11 - 1);
        for c in 0..24 {
            assert!(grid.is_wall(Cell::new(14, c)));
            assert!(grid.is_wall(Cell::new(15, c)));
        }
        for r in 0..16 {
            assert!(grid.is_wall(Cell::new(r, 22)));
            assert!(grid.is_wall(Cell::new(r, 23)));
        }
    }

    #[test]
    fn endpoints_land_on_open_cells() {
        let mut grid = CostGrid::new(GridConfig::new(17, 25));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(9));
        mg.carve(&mut grid);

        assert!(grid.index().contains(grid.start()));
        assert!(grid.index().contains(grid.goal()));
        assert!(!grid.is_wall(grid.start()));
        assert!(!grid.is_wall(grid.goal()));
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let mut a = CostGrid::new(GridConfig::new(17, 25));
        let mut b = CostGrid::new(GridConfig::new(17, 25));
        MazeGen::new(SmallRng::seed_from_u64(7)).carve(&mut a);
        MazeGen::new(SmallRng::seed_from_u64(7)).carve(&mut b);

        assert_eq!(a.start(), b.start());
        assert_eq!(a.goal(), b.goal());
        for cell in a.index() {
            assert_eq!(a.cost_of(cell), b.cost_of(cell), "mismatch at {cell}");
        }
    }

    #[test]
    fn three_by_three_carves_a_single_cell() {
        let mut grid = CostGrid::new(GridConfig::new(3, 3));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(3));
        let carved = mg.carve(&mut grid);

        assert_eq!(carved, 1);
        assert!(!grid.is_wall(Cell::new(1, 1)));
        assert_eq!(grid.start(), Cell::new(1, 1));
        assert_eq!(grid.goal(), Cell::new(1, 1));
    }

    #[test]
    fn degenerate_grid_opens_the_field() {
        let mut grid = CostGrid::new(GridConfig::new(2, 9));
        grid.set_wall(Cell::new(0, 3));
        grid.set_wall(Cell::new(1, 6));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(11));
        let carved = mg.carve(&mut grid);

        assert_eq!(carved, 18);
        for cell in grid.index() {
            assert!(!grid.is_wall(cell));
        }
    }

    #[test]
    fn one_by_one_grid() {
        let mut grid = CostGrid::new(GridConfig::new(1, 1));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(2));
        let carved = mg.carve(&mut grid);
        assert_eq!(carved, 1);
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.goal(), Cell::new(0, 0));
    }

    #[test]
    fn search_crosses_the_maze() {
        let mut grid = CostGrid::new(GridConfig::new(17, 25));
        let mut mg = MazeGen::new(SmallRng::seed_from_u64(21));
        mg.carve(&mut grid);

        let result = dijkstra(&grid);
        let path = result.path();
        assert!(path.is_some());
        if let Some(path) = path {
            assert_eq!(path.first(), Some(&grid.start()));
            assert_eq!(path.last(), Some(&grid.goal()));
            for cell in path {
                assert!(!grid.is_wall(cell));
            }
        }
    }
}
