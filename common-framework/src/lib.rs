//! Common Framework
//!
//! Building blocks shared by the cursor framework and its consumers.

pub mod stack;

pub use stack::{BoundedStack, StackEnd, DEFAULT_CAPACITY};
