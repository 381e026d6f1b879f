//! Maze and search demo printing ASCII overlays.
//!
//! Run: cargo run --bin visualize

use pathview_core::{CostGrid, GridConfig};
use pathview_maze::MazeGen;
use pathview_search::{SearchResult, astar, dijkstra};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Render the grid with one search result overlaid: `#` walls, `.` settled
/// cells, `o` the final path, `S`/`G` the endpoints.
fn render(grid: &CostGrid, result: &SearchResult) -> String {
    let index = grid.index();
    let mut canvas = vec![b' '; index.len()];

    for cell in index {
        if grid.is_wall(cell) {
            if let Some(i) = index.idx(cell) {
                canvas[i] = b'#';
            }
        }
    }
    for &cell in result.visited() {
        if let Some(i) = index.idx(cell) {
            canvas[i] = b'.';
        }
    }
    if let Some(path) = result.path() {
        for cell in path {
            if let Some(i) = index.idx(cell) {
                canvas[i] = b'o';
            }
        }
    }
    if let Some(i) = index.idx(grid.start()) {
        canvas[i] = b'S';
    }
    if let Some(i) = index.idx(grid.goal()) {
        canvas[i] = b'G';
    }

    let cols = index.cols().max(1) as usize;
    let mut out = String::with_capacity(index.len() + index.rows() as usize);
    for row in canvas.chunks(cols) {
        for &b in row {
            out.push(b as char);
        }
        out.push('\n');
    }
    out
}

fn report(name: &str, grid: &CostGrid, result: &SearchResult) {
    match result.path() {
        Some(path) => println!(
            "{name}: settled {} cells, distance {}, path length {}",
            result.visited().len(),
            result.distance_at(grid.goal()),
            path.len(),
        ),
        None => println!(
            "{name}: settled {} cells, goal unreachable",
            result.visited().len(),
        ),
    }
    print!("{}", render(grid, result));
}

fn main() {
    let mut grid = CostGrid::new(GridConfig::new(17, 39));
    let mut mg = MazeGen::new(SmallRng::from_os_rng());
    let carved = mg.carve(&mut grid);

    println!(
        "maze {}x{}: {} open cells, start {}, goal {}",
        grid.rows(),
        grid.cols(),
        carved,
        grid.start(),
        grid.goal(),
    );
    println!();

    let uniform = dijkstra(&grid);
    report("dijkstra", &grid, &uniform);
    println!();

    let guided = astar(&grid);
    report("a*", &grid, &guided);
}
