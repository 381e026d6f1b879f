use std::collections::BinaryHeap;

use pathview_core::{BLOCKED, CostGrid};

use crate::distance::euclidean;
use crate::result::{NO_PARENT, OpenNode, SearchResult};

/// Heuristic-guided search from the grid's start toward its goal.
///
/// Same contract as [`dijkstra()`](crate::dijkstra()): strict relaxation
/// on accumulated distance, row-major tie-break, goal settled last. The
/// only difference is the settlement priority: accumulated distance plus
/// the Euclidean estimate to the goal. Euclidean never exceeds Manhattan,
/// so on a 4-connected grid with positive integer costs the estimate
/// never overestimates and the result distances match Dijkstra's. The
/// heuristic steers which cells settle first; it is never stored in the
/// distance table.
pub fn astar(grid: &CostGrid) -> SearchResult {
    let mut result = SearchResult::unexplored(grid);
    let index = result.index;
    let goal = result.goal;

    let Some(start_idx) = index.idx(result.start) else {
        return result;
    };
    let Some(goal_idx) = index.idx(goal) else {
        return result;
    };

    result.dist[start_idx] = 0;
    result.parent[start_idx] = NO_PARENT;

    let mut in_open = vec![false; index.len()];
    in_open[start_idx] = true;
    let mut open: BinaryHeap<OpenNode> = BinaryHeap::new();
    open.push(OpenNode {
        f: euclidean(result.start, goal),
        idx: start_idx,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if !in_open[ci] {
            continue;
        }
        in_open[ci] = false;

        let current_dist = result.dist[ci];
        let cell = index.cell(ci);

        nbuf.clear();
        index.neighbors(cell, &mut nbuf);

        for &nb in nbuf.iter() {
            let cost = grid.cost_of(nb);
            if cost == BLOCKED {
                continue;
            }
            let Some(ni) = index.idx(nb) else {
                continue;
            };
            let tentative = current_dist + cost;
            if tentative < result.dist[ni] {
                result.dist[ni] = tentative;
                result.parent[ni] = ci;
                in_open[ni] = true;
                open.push(OpenNode {
                    f: tentative as f64 + euclidean(nb, goal),
                    idx: ni,
                });
            }
        }

        result.visited.push(cell);
        if ci == goal_idx {
            break;
        }
    }

    result
}
