//! Four-directional node-expansion search over an occupancy query.
//!
//! The search keeps its frontier, visited set, and result path in
//! [`NodeList`] containers. Each iteration scans the whole frontier for the
//! lowest combined score, moves that node to the visited set, and either
//! reconstructs the path (target reached) or expands the node's four
//! axis-aligned neighbors.
//!
//! Two scoring rules are deliberate and load-bearing for path shape:
//!
//! - `g` is the Manhattan distance from the absolute start cell, not an
//!   accumulated cost along the parent chain.
//! - Frontier selection keeps a candidate whose score is less than *or
//!   equal to* the running best, so among tied minima the last node in
//!   container order wins.

use std::rc::Rc;
use std::time::Instant;

use thiserror::Error;

use crate::collections::NodeList;
use crate::core::CellPoint;
use crate::grid::BlockedQuery;

use super::node::SearchNode;
use super::route::Route;

/// Errors reported by [`search`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanningError {
    /// No admissible path exists between start and target. Expected and
    /// recoverable; not an empty route.
    #[error("no path found to target")]
    NoPathFound,

    /// Backward reconstruction exhausted the visited set without reaching
    /// the start node. Indicates a broken invariant; not recoverable.
    #[error("visited-set parent chain does not reach the start node")]
    InconsistentParentChain,
}

/// Find a four-directional path from `start` to `target`.
///
/// Returns the route in target-to-start order, or
/// [`PlanningError::NoPathFound`] once the frontier is exhausted. The grid
/// is only read; it must not change while the search runs.
pub fn search<Q: BlockedQuery>(
    grid: &Q,
    start: CellPoint,
    target: CellPoint,
) -> Result<Route, PlanningError> {
    let started = Instant::now();

    let mut frontier: NodeList<SearchNode> = NodeList::new();
    let mut visited: NodeList<SearchNode> = NodeList::new();

    let start_node = SearchNode::scored(start, 0.0, 0.0);
    let target_node = SearchNode::scored(target, 0.0, 0.0);

    frontier.push_back(Rc::clone(&start_node));

    let mut expansions = 0usize;

    while !frontier.is_empty() {
        // Frontier selection: full scan in container order. `<=` keeps the
        // last node tied at the minimum.
        let mut selected: Option<Rc<SearchNode>> = None;
        let mut best_score = f32::INFINITY;
        for node in frontier.iter() {
            if node.f() <= best_score {
                best_score = node.f();
                selected = Some(Rc::clone(node));
            }
        }
        let current = match selected {
            Some(node) => node,
            None => break,
        };

        frontier
            .remove(&current)
            .expect("selected node is in the frontier");
        visited.push_back(Rc::clone(&current));

        if current.pos() == target {
            target_node.set_parent(&current);
            visited.push_back(Rc::clone(&target_node));

            let route = reconstruct(&visited, &target_node, start)?;
            log::debug!(
                "planned {} cells after {} expansions in {:?}",
                route.len(),
                expansions,
                started.elapsed()
            );
            return Ok(route);
        }

        expansions += 1;

        for neighbor in current.pos().neighbors4() {
            if visited.iter().any(|node| node.pos() == neighbor) || grid.is_blocked(neighbor) {
                continue;
            }

            let g = neighbor.manhattan(&start);
            let h = neighbor.manhattan(&target);
            let candidate = SearchNode::scored(neighbor, g, h);

            // The frontier holds at most one node per position; a duplicate
            // candidate reconciles into the existing node or is dropped.
            let existing = frontier
                .iter()
                .find(|node| node.pos() == neighbor)
                .map(Rc::clone);
            match existing {
                Some(node) => {
                    if candidate.g() <= node.g() {
                        node.adopt(candidate.g(), &current);
                    }
                }
                None => {
                    candidate.set_parent(&current);
                    frontier.push_back(candidate);
                }
            }
        }
    }

    log::debug!(
        "frontier exhausted after {} expansions in {:?}",
        expansions,
        started.elapsed()
    );
    Err(PlanningError::NoPathFound)
}

/// Walk the parent chain backward from the target node, copying each visited
/// node into a fresh path container until the start cell is reached.
fn reconstruct(
    visited: &NodeList<SearchNode>,
    target_node: &Rc<SearchNode>,
    start: CellPoint,
) -> Result<Route, PlanningError> {
    let mut path: NodeList<SearchNode> = NodeList::new();
    let mut node = Rc::clone(target_node);

    // The chain can take at most one step per visited node.
    for _ in 0..visited.len() {
        let parent = node.parent().ok_or(PlanningError::InconsistentParentChain)?;
        let index = visited
            .find(&parent)
            .ok_or(PlanningError::InconsistentParentChain)?;
        node = Rc::clone(
            visited
                .get(index)
                .map_err(|_| PlanningError::InconsistentParentChain)?,
        );

        path.push_back(node.detached_copy());

        if node.pos().manhattan(&start) == 0.0 {
            return Ok(Route::new(path));
        }
    }

    Err(PlanningError::InconsistentParentChain)
}
