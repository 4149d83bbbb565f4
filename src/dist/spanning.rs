//! Maximum-weight spanning trees over complete graphs.
//!
//! Prim's algorithm on a dense graph, O(n²) weight evaluations. The tree
//! grows from vertex 0, so every vertex is attached to a vertex already in
//! the tree and the insertion order is a valid parent-before-child order.
//!
//! Ties are broken deterministically: among equally heavy candidate edges
//! the one whose tree endpoint has the lowest index is kept, and among
//! equally heavy fringe vertices the lowest index joins first.

/// A spanning tree rooted at vertex 0 with edges oriented away from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    parent: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl SpanningTree {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn root(&self) -> usize {
        0
    }

    /// Parent of `v`, `None` for the root.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent[v]
    }

    /// Vertices in insertion order; every parent precedes its children.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// `(parent, child)` pairs, one per non-root vertex.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, p)| p.map(|p| (p, child)))
    }

    /// Sum of `weight` over the tree's edges.
    pub fn total_weight<W: Fn(usize, usize) -> f64>(&self, weight: W) -> f64 {
        self.edges().map(|(p, c)| weight(p, c)).sum()
    }
}

/// Builds the maximum-weight spanning tree of the complete graph on `n`
/// vertices.
///
/// `weight(i, j)` must be symmetric. NaN weights are never preferred over
/// a real number but still produce a connected tree.
pub fn maximum_spanning_tree<W: Fn(usize, usize) -> f64>(n: usize, weight: W) -> SpanningTree {
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut order = Vec::with_capacity(n);
    if n == 0 {
        return SpanningTree { parent, order };
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::NEG_INFINITY; n];

    let mut current = 0;
    in_tree[current] = true;
    order.push(current);

    for _ in 1..n {
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let w = weight(current, v);
            let better = match parent[v] {
                None => true,
                Some(p) => w > best[v] || (w == best[v] && current < p),
            };
            if better {
                best[v] = if w.is_nan() { f64::NEG_INFINITY } else { w };
                parent[v] = Some(current);
            }
        }

        let mut next = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            match next {
                Some(u) if best[v] <= best[u] => {}
                _ => next = Some(v),
            }
        }
        // A fringe vertex always exists while fewer than n are in the tree.
        let Some(next) = next else { break };

        in_tree[next] = true;
        order.push(next);
        current = next;
    }

    SpanningTree { parent, order }
}
