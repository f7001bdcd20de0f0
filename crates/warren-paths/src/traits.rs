use warren_core::{Direction, Grid, Point};

/// Read-only maze interface consumed by the search.
///
/// Implementations expose the grid's topology (which cells are
/// axis-adjacent) and the wall flags that gate traversal between them.
/// The search never mutates the maze and never validates coordinates
/// before querying it.
pub trait Maze {
    /// Append the in-bounds axis-aligned neighbors of `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether the cell at `p` has a wall on its `dir` side.
    ///
    /// May panic when `p` lies outside the maze; such a coordinate is a
    /// caller fault, not a "no path" outcome.
    fn has_wall(&self, p: Point, dir: Direction) -> bool;
}

impl Maze for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }

    fn has_wall(&self, p: Point, dir: Direction) -> bool {
        self[p].has_wall(dir)
    }
}
