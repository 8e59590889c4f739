//! Ordered containers used by the planner.
//!
//! - [`NodeList`]: doubly-linked sequence over shared payloads

mod node_list;

pub use node_list::{Iter, ListError, NodeList};
