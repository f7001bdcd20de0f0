use warren_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node arena for the A* search
// ---------------------------------------------------------------------------

/// Parent sentinel for the start node of a search.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search record. `f` is always derived as `g + h`, never stored.
#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated cost from the start along the best known route.
    pub(crate) g: f32,
    /// Straight-line estimate to the goal, fixed at creation.
    pub(crate) h: f32,
    /// Arena index of the node this one was reached from.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Shortest-path searcher for a grid rectangle.
///
/// `PathFinder` owns the search working set (node arena, open list, and
/// neighbor scratch buffer) so that repeated queries incur no allocations
/// after the first use. Stale state from previous searches is invalidated
/// lazily through a generation counter.
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: Vec<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            open: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating the arena as needed.
    ///
    /// If the new size fits within the existing capacity the arena is
    /// preserved and only the generation counter is bumped, so stale
    /// entries are ignored. Otherwise the arena is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat arena index.
    ///
    /// Panics when `p` lies outside the range: the search never receives
    /// coordinates it has not been sized for, so an out-of-range point is
    /// a caller fault rather than an unreachable cell.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        assert!(self.rng.contains(p), "point {p} outside search range {}", self.rng);
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }

    /// Convert a flat arena index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathFinder::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_point_round_trip() {
        let pf = PathFinder::new(Range::new(2, 3, 6, 8));
        for p in pf.range() {
            assert_eq!(pf.point(pf.idx(p)), p);
        }
    }

    #[test]
    #[should_panic(expected = "outside search range")]
    fn idx_panics_outside_range() {
        let pf = PathFinder::new(Range::new(0, 0, 3, 3));
        let _ = pf.idx(Point::new(3, 0));
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut pf = PathFinder::new(Range::new(0, 0, 20, 20));
        let original_cap = pf.nodes.len(); // 400

        let small = Range::new(0, 0, 5, 5);
        pf.set_range(small);
        assert_eq!(pf.range(), small);
        assert_eq!(pf.nodes.len(), original_cap); // still 400
        assert_eq!(pf.width, 5);
        // Generation bumped so stale entries are ignored.
        assert!(pf.generation > 0);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut pf = PathFinder::new(Range::new(0, 0, 5, 5));
        let old_cap = pf.nodes.len(); // 25

        let big = Range::new(0, 0, 20, 20);
        pf.set_range(big);
        assert_eq!(pf.range(), big);
        assert!(pf.nodes.len() > old_cap);
        assert_eq!(pf.nodes.len(), 400);
    }
}
