//! Overlay - O(log n) range queries over a fixed sequence via a tree of
//! precomputed partial combinations.
//!
//! # Quick Start
//!
//! ```
//! use overlay::RangeTree;
//!
//! // Build a sum tree over a sequence.
//! let tree = RangeTree::new(&[1, 2, 3, 4, 5], 0, |a, b| a + b).unwrap();
//!
//! // Combine any inclusive index range without rescanning it.
//! assert_eq!(tree.query(1, 3), Ok(9));
//! assert_eq!(tree.query(0, 4), Ok(15));
//!
//! // Any associative combiner works; a minimum tree needs a max sentinel.
//! let mins = RangeTree::new(&[5, 2, 8, 1], i32::MAX, |a: &i32, b: &i32| *a.min(b)).unwrap();
//! assert_eq!(mins.query(0, 2), Ok(2));
//! ```

pub mod tree;

pub use tree::{RangeTree, TreeError};
