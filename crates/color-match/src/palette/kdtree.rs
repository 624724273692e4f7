//! Static three-dimensional k-d tree.
//!
//! Nodes live in a flat arena and refer to each other by index. The tree is
//! built once by recursive median split with the split axis cycling by depth,
//! and never modified afterwards.

type Point = [f64; 3];

#[derive(Debug, Clone)]
struct Node {
    /// Position of the stored point in the caller's point list.
    point: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Balanced k-d tree over a fixed set of points.
///
/// Queries return the position of the closest point in the list passed to
/// [`KdTree::build`]. Among equidistant points the lowest position wins,
/// regardless of how the tree happened to be split. A tree always holds at
/// least one point.
#[derive(Debug, Clone)]
pub(crate) struct KdTree {
    points: Vec<Point>,
    nodes: Vec<Node>,
    root: usize,
}

impl KdTree {
    /// Build a tree over `points`, or `None` when there are no points.
    pub(crate) fn build(points: Vec<Point>) -> Option<Self> {
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::with_capacity(points.len());
        let root = build_node(&points, &mut order, 0, &mut nodes)?;
        Some(Self {
            points,
            nodes,
            root,
        })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest leaf.
    #[cfg(test)]
    fn depth(&self) -> usize {
        fn walk(nodes: &[Node], node: Option<usize>) -> usize {
            match node {
                None => 0,
                Some(idx) => 1 + walk(nodes, nodes[idx].left).max(walk(nodes, nodes[idx].right)),
            }
        }
        walk(&self.nodes, Some(self.root))
    }

    /// Closest point to `target` as `(position, squared distance)`.
    pub(crate) fn nearest(&self, target: Point) -> (usize, f64) {
        let root = self.nodes[self.root].point;
        let mut best = (root, squared_distance(&self.points[root], &target));
        self.search(self.root, &target, &mut best);
        best
    }

    fn search(&self, idx: usize, target: &Point, best: &mut (usize, f64)) {
        let node = &self.nodes[idx];
        let point = &self.points[node.point];

        let (best_pos, best_d2) = *best;
        let d2 = squared_distance(point, target);
        if d2 < best_d2 || (d2 == best_d2 && node.point < best_pos) {
            *best = (node.point, d2);
        }

        let diff = target[node.axis] - point[node.axis];
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, target, best);
        }
        if let Some(far) = far {
            // Points beyond the split plane are at least |diff| away. Equal
            // distance still has to be visited for the position tie-break.
            if diff * diff <= best.1 {
                self.search(far, target, best);
            }
        }
    }
}

fn build_node(
    points: &[Point],
    order: &mut [usize],
    depth: usize,
    nodes: &mut Vec<Node>,
) -> Option<usize> {
    if order.is_empty() {
        return None;
    }

    let axis = depth % 3;
    order.sort_by(|&a, &b| {
        points[a][axis]
            .total_cmp(&points[b][axis])
            .then(a.cmp(&b))
    });

    let mid = order.len() / 2;
    let point = order[mid];
    let slot = nodes.len();
    nodes.push(Node {
        point,
        axis,
        left: None,
        right: None,
    });

    let (lower, rest) = order.split_at_mut(mid);
    let upper = &mut rest[1..];
    let left = build_node(points, lower, depth + 1, nodes);
    let right = build_node(points, upper, depth + 1, nodes);
    nodes[slot].left = left;
    nodes[slot].right = right;

    Some(slot)
}

#[inline]
fn squared_distance(a: &Point, b: &Point) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    d0 * d0 + d1 * d1 + d2 * d2
}
