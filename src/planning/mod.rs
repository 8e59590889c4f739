//! Grid path planning.
//!
//! This module provides the node-expansion search used to walk between two
//! cells of a static occupancy grid.
//!
//! # Architecture
//!
//! The search keeps three [`NodeList`](crate::collections::NodeList)
//! instances: the frontier of candidate nodes, the visited set, and the
//! reconstructed path. Nodes are scored with a weighted Manhattan heuristic
//! and expanded four-directionally; the result comes back target-first.
//!
//! # Usage
//!
//! ```ignore
//! use marga_plan::{search, CellPoint, OccupancyGrid};
//!
//! let grid = OccupancyGrid::new(25, 14);
//! let route = search(&grid, CellPoint::new(3.0, 3.0), CellPoint::new(15.0, 7.0))?;
//! for cell in route.cells() {
//!     // draw from target back to start
//! }
//! ```

mod astar;
mod node;
mod route;

pub use astar::{search, PlanningError};
pub use node::{SearchNode, G_WEIGHT, H_WEIGHT};
pub use route::Route;
