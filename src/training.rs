//! Recursive, depth-first induction of a single tree.
//!
//! Each node gets its statistics, then stops on the first matching rule
//! (too few samples, no children left, best gain below the minimum) or is
//! split: its sample range is partitioned in place and both halves are trained
//! as its children.

mod operation;

pub use operation::TrainingOperation;
