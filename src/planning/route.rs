//! Planned route returned by the searcher.
//!
//! A [`Route`] owns the path container produced by a successful search.
//! Cells are ordered target-first, start-last, exactly as reconstructed;
//! consumers draw them in that order or copy them out with
//! [`Route::cells`]. Dropping the route releases the contained nodes.

use std::rc::Rc;

use crate::collections::{Iter, NodeList};
use crate::core::CellPoint;

use super::node::SearchNode;

/// A planned route from target back to start.
#[derive(Debug)]
pub struct Route {
    steps: NodeList<SearchNode>,
    total_length: f32,
}

impl Route {
    /// Wrap a reconstructed path container.
    pub(crate) fn new(steps: NodeList<SearchNode>) -> Self {
        let mut total_length = 0.0;
        let mut previous: Option<CellPoint> = None;
        for node in steps.iter() {
            if let Some(prev) = previous {
                total_length += prev.manhattan(&node.pos());
            }
            previous = Some(node.pos());
        }
        Self {
            steps,
            total_length,
        }
    }

    /// Number of cells on the route, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the route holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total Manhattan length over consecutive route cells.
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Iterate route nodes target-first.
    pub fn iter(&self) -> Iter<'_, SearchNode> {
        self.steps.iter()
    }

    /// The target-end cell.
    pub fn first(&self) -> Option<CellPoint> {
        self.steps.iter().next().map(|node| node.pos())
    }

    /// The start-end cell.
    pub fn last(&self) -> Option<CellPoint> {
        self.steps.iter().next_back().map(|node| node.pos())
    }

    /// Copy out the route cells, target-first.
    pub fn cells(&self) -> Vec<CellPoint> {
        self.steps.iter().map(|node| node.pos()).collect()
    }

    /// Whether the route passes through `cell`.
    pub fn contains(&self, cell: CellPoint) -> bool {
        self.steps.iter().any(|node| node.pos() == cell)
    }

    /// Hand the underlying path container to the caller.
    pub fn into_steps(self) -> NodeList<SearchNode> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Rc<SearchNode>;
    type IntoIter = Iter<'a, SearchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
