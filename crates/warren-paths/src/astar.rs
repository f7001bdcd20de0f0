use log::trace;

use warren_core::{Direction, Point};

use crate::distance::euclidean;
use crate::pathfinder::{NO_PARENT, PathFinder};
use crate::traits::Maze;

impl PathFinder {
    /// Compute the shortest path from `start` to `goal` using A*.
    ///
    /// Movement is orthogonal only, each step costing the Euclidean
    /// distance between the two cells, and an edge is traversable only
    /// when neither adjacent cell has a wall on the shared side. Returns
    /// the full path (including both endpoints) or `None` if no path
    /// exists. An unreachable goal is a normal outcome, not an error.
    ///
    /// The open list is scanned linearly for the lowest `f` score; on a
    /// tie the entry inserted earliest wins. Repeated calls with the same
    /// inputs therefore return identical paths.
    pub fn find_path<M: Maze>(&mut self, maze: &M, start: Point, goal: Point) -> Option<Vec<Point>> {
        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        let start_idx = self.idx(start);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.h = euclidean(start, goal);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open = std::mem::take(&mut self.open);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        open.clear();
        open.push(start_idx);

        let mut expanded = 0usize;

        let goal_idx = 'search: loop {
            if open.is_empty() {
                break 'search None;
            }

            // Lowest f score wins; a tie keeps the entry scanned first.
            let mut best_slot = 0;
            let mut best_f = f32::MAX;
            for (slot, &ni) in open.iter().enumerate() {
                let node = &self.nodes[ni];
                let f = node.g + node.h;
                if f < best_f {
                    best_f = f;
                    best_slot = slot;
                }
            }

            let ci = open.remove(best_slot);
            let cp = self.point(ci);

            if cp == goal {
                break 'search Some(ci);
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            expanded += 1;

            nbuf.clear();
            maze.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                // Anything that is not exactly one orthogonal step away
                // is not a usable edge.
                let Some(dir) = Direction::from_delta(np - cp) else {
                    continue;
                };
                if maze.has_wall(cp, dir) || maze.has_wall(np, dir.opposite()) {
                    continue;
                }

                let ni = self.idx(np);
                let node = &self.nodes[ni];
                let seen = node.generation == cur_gen;
                if seen && !node.open {
                    // Already finalized.
                    continue;
                }

                let tentative = current_g + euclidean(cp, np);
                if !seen {
                    let node = &mut self.nodes[ni];
                    node.g = tentative;
                    node.h = euclidean(np, goal);
                    node.parent = ci;
                    node.generation = cur_gen;
                    node.open = true;
                    open.push(ni);
                } else if tentative < self.nodes[ni].g {
                    // Strictly better route to an open node: lower its
                    // cost and re-parent it in place.
                    let node = &mut self.nodes[ni];
                    node.g = tentative;
                    node.parent = ci;
                }
            }
        };

        self.open = open;
        self.nbuf = nbuf;

        let Some(gi) = goal_idx else {
            trace!("no path from {start} to {goal} ({expanded} nodes expanded)");
            return None;
        };

        // Reconstruct by walking the parent links back to the start.
        let mut path = Vec::new();
        let mut ci = gi;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        trace!(
            "path from {start} to {goal}: {} cells ({expanded} nodes expanded)",
            path.len()
        );
        Some(path)
    }
}
