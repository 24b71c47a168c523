//! Disjoint-set forest tracking per-component merge statistics.
//!
//! The segmentation engine grows regions by processing edges in
//! non-decreasing weight order. Each root carries the component size and the
//! largest edge weight used in a successful union that built the component,
//! which is the internal difference the merge threshold is computed from.
//! Statistics are only meaningful when read at a root.

/// Union-find over pixel identities with union by size and path compression.
///
/// # Examples
/// ```
/// use seggraph_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 1, 2.5));
/// assert!(!forest.union(1, 0, 9.0));
/// assert_eq!(forest.find(1), forest.find(0));
/// assert_eq!(forest.size(1), 2);
/// assert_eq!(forest.max_internal_weight(0), 2.5);
/// assert_eq!(forest.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    max_internal: Vec<f64>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            max_internal: vec![0.0; n],
            components: n,
        }
    }

    /// Number of identities tracked by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the forest tracks no identities.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint components currently in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the root of the component containing `node`.
    ///
    /// Every node visited on the way is re-pointed at the root. `node` must be
    /// smaller than [`Self::len`].
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The smaller component is attached beneath the larger root; on equal
    /// sizes `right`'s root goes under `left`'s. The surviving root's
    /// internal difference becomes `max(previous, weight)`. Returns `false`
    /// without touching any state when both already share a root.
    pub fn union(&mut self, left: usize, right: usize, weight: f64) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        if self.max_internal[parent] < weight {
            self.max_internal[parent] = weight;
        }
        self.components -= 1;
        true
    }

    /// Size of the component containing `node`.
    pub fn size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// Internal difference of the component containing `node`.
    pub fn max_internal_weight(&mut self, node: usize) -> f64 {
        let root = self.find(node);
        self.max_internal[root]
    }

    /// Compresses every path and returns `(representatives, sizes,
    /// max_internal)`, where the last two are indexed by root identity.
    pub(crate) fn into_compressed_parts(mut self) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        for node in 0..self.parent.len() {
            self.find(node);
        }
        (self.parent, self.size, self.max_internal)
    }
}
