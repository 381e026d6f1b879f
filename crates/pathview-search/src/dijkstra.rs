use std::collections::BinaryHeap;

use pathview_core::{BLOCKED, CostGrid};

use crate::result::{NO_PARENT, OpenNode, SearchResult};

/// Uniform-cost search from the grid's start toward its goal.
///
/// Cells settle in order of best known distance; equal distances settle
/// the earliest cell in row-major order. A neighbor's candidate distance
/// is the settled cell's distance plus the neighbor's own cost, and only
/// a strictly smaller candidate replaces a recorded distance, so the
/// first shortest route to a cell keeps its predecessor. The settled
/// cell's neighbors are relaxed before the goal check, which makes the
/// goal the last settled cell of a successful run.
pub fn dijkstra(grid: &CostGrid) -> SearchResult {
    let mut result = SearchResult::unexplored(grid);
    let index = result.index;

    let Some(start_idx) = index.idx(result.start) else {
        return result;
    };
    let Some(goal_idx) = index.idx(result.goal) else {
        return result;
    };

    result.dist[start_idx] = 0;
    result.parent[start_idx] = NO_PARENT;

    let mut in_open = vec![false; index.len()];
    in_open[start_idx] = true;
    let mut open: BinaryHeap<OpenNode> = BinaryHeap::new();
    open.push(OpenNode {
        f: 0.0,
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
                    f: tentative as f64,
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
