//! A range tree: precomputed partial combinations in a flat binary tree
//! overlaid on a fixed-length sequence.
//!
//! Construction folds the sequence bottom-up once; after that, the combined
//! value of any contiguous index range is an O(log n) walk instead of a
//! linear rescan. The combiner is a caller-supplied associative function,
//! so the same structure serves sums, minimums, concatenations, or any
//! other associative reduction.

/// Error returned by tree construction and access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The input sequence was empty, or a query range was invalid.
    InvalidArgument,
    /// An element index was outside `[0, len)`.
    IndexOutOfRange,
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            TreeError::InvalidArgument => "empty input sequence or invalid query range",
            TreeError::IndexOutOfRange => "element index out of range",
        };
        return write!(f, "{}", message);
    }
}

impl std::error::Error for TreeError {}

/// A binary tree of partial combinations over a fixed-length sequence.
///
/// Holds a private copy of the elements plus a flat array encoding a
/// complete binary tree: the node at array index `k` has its children at
/// `2k + 1` and `2k + 2`. Each node covers a contiguous sub-range of the
/// element indices and stores the combination of that whole sub-range.
/// The covered ranges are never stored; build, query, and update all
/// re-derive them with the same midpoint split.
///
/// The combiner must be associative: `combine(combine(a, b), c)` must
/// equal `combine(a, combine(b, c))`. It is not assumed commutative; the
/// left sub-range's result is always the left argument. The `empty` value
/// stands in for sub-ranges with no overlap, and `combine(empty, empty)`
/// must equal `empty`. Neither property is checked at runtime.
pub struct RangeTree<T, F> {
    /// Private copy of the input sequence, in element order.
    data: Vec<T>,
    /// Flat complete-binary-tree storage, `tree_size(data.len())` slots.
    /// Trailing slots stay `None` when the element count is not a power
    /// of two; build never writes them and query never reads them.
    tree: Vec<Option<T>>,
    /// Result for a sub-range with no overlap.
    empty: T,
    /// The associative combiner.
    combine: F,
}

/// Storage slots needed for `n` elements: the conceptual leaf count is
/// rounded up to the next power of two, and a complete binary tree over
/// that many leaves has `2 * leaves - 1` nodes. Always odd, always at
/// least `2n - 1`.
fn tree_size(n: usize) -> usize {
    return 2 * n.next_power_of_two() - 1;
}

impl<T: Clone, F: Fn(&T, &T) -> T> RangeTree<T, F> {
    /// Build a tree over a copy of `data`.
    ///
    /// The elements are cloned, so later mutation of the caller's storage
    /// cannot invalidate the tree. Runs in O(n).
    ///
    /// Returns `TreeError::InvalidArgument` if `data` is empty. The
    /// combiner's associativity is the caller's contract and is not
    /// validated.
    pub fn new(data: &[T], empty: T, combine: F) -> Result<RangeTree<T, F>, TreeError> {
        if data.is_empty() {
            return Err(TreeError::InvalidArgument);
        }
        let mut tree = RangeTree {
            data: data.to_vec(),
            tree: vec![None; tree_size(data.len())],
            empty,
            combine,
        };
        tree.build(0, tree.data.len() - 1, 0);
        return Ok(tree);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        return self.data.len();
    }

    /// The element at `index`, or `TreeError::IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<&T, TreeError> {
        return self.data.get(index).ok_or(TreeError::IndexOutOfRange);
    }

    /// The elements in sequence order.
    pub fn as_slice(&self) -> &[T] {
        return &self.data;
    }

    /// Iterate over the elements in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        return self.data.iter();
    }

    /// Replace the element at `index` and repair every node on the path
    /// from its leaf to the root, in O(log n).
    ///
    /// Returns `TreeError::IndexOutOfRange` for an index past the end;
    /// the tree is untouched in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), TreeError> {
        if index >= self.data.len() {
            return Err(TreeError::IndexOutOfRange);
        }
        self.data[index] = value;
        self.repair(index, 0, self.data.len() - 1, 0);
        return Ok(());
    }

    /// Combine all elements with index in `[start, end]` (inclusive), in
    /// left-to-right order.
    ///
    /// Equivalent to folding the combiner over `data[start..=end]`, but
    /// runs in O(log n): subtrees fully inside the range contribute their
    /// precomputed value, subtrees fully outside contribute nothing.
    ///
    /// Bounds are validated: `start > end` or `end >= len()` returns
    /// `TreeError::InvalidArgument`. There is no empty-range convention;
    /// a valid query always covers at least one element.
    pub fn query(&self, start: usize, end: usize) -> Result<T, TreeError> {
        if start > end || end >= self.data.len() {
            return Err(TreeError::InvalidArgument);
        }
        return Ok(self.query_node(start, end, 0, self.data.len() - 1, 0));
    }

    /// Recursive build over the element range `[lo, hi]`, rooted at tree
    /// slot `node`. Leaves copy their element; internal nodes combine
    /// their children, strictly after both children are built.
    fn build(&mut self, lo: usize, hi: usize, node: usize) {
        if lo == hi {
            self.tree[node] = Some(self.data[lo].clone());
            return;
        }
        let mid = (lo + hi) / 2;
        self.build(lo, mid, 2 * node + 1);
        self.build(mid + 1, hi, 2 * node + 2);
        let combined = (self.combine)(self.node(2 * node + 1), self.node(2 * node + 2));
        self.tree[node] = Some(combined);
    }

    /// Recursive query walk. Classifies the node's covered range
    /// `[lo, hi]` against the query range `[start, end]`:
    /// total overlap returns the stored value, no overlap returns the
    /// empty value, partial overlap splits at the same midpoint the
    /// build used and combines both halves.
    fn query_node(&self, start: usize, end: usize, lo: usize, hi: usize, node: usize) -> T {
        if start <= lo && end >= hi {
            return self.node(node).clone();
        }
        if end < lo || start > hi {
            return self.empty.clone();
        }
        let mid = (lo + hi) / 2;
        let left = self.query_node(start, end, lo, mid, 2 * node + 1);
        let right = self.query_node(start, end, mid + 1, hi, 2 * node + 2);
        return (self.combine)(&left, &right);
    }

    /// Recompute the path from the leaf for `index` back up to `node`,
    /// descending with the same midpoint split as the build and
    /// recombining each visited node from its two children on the way
    /// back out.
    fn repair(&mut self, index: usize, lo: usize, hi: usize, node: usize) {
        if lo == hi {
            self.tree[node] = Some(self.data[lo].clone());
            return;
        }
        let mid = (lo + hi) / 2;
        if index <= mid {
            self.repair(index, lo, mid, 2 * node + 1);
        } else {
            self.repair(index, mid + 1, hi, 2 * node + 2);
        }
        let combined = (self.combine)(self.node(2 * node + 1), self.node(2 * node + 2));
        self.tree[node] = Some(combined);
    }

    /// The stored value at tree slot `k`. Only called for slots the build
    /// wrote.
    fn node(&self, k: usize) -> &T {
        return self.tree[k].as_ref().expect("tree slot populated at build");
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for RangeTree<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(
            f,
            "RangeTree {{ len: {}, data: {:?} }}",
            self.data.len(),
            self.data
        );
    }
}
