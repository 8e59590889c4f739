//! MargaPlan - Grid path planning over a static occupancy grid
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     bin/                            │  ← Demo executable
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   planning/                         │  ← Search + route
//! │            (node scoring, reconstruction)           │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌──────────────────────────┬──────────────────────────┐
//! │        grid/             │      collections/        │  ← Collaborators
//! │   (occupancy query)      │   (ordered node list)    │
//! └──────────────────────────┴──────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (cell coordinates)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The planner performs a four-directional node-expansion search between two
//! cells of a fixed-size grid. Candidate, visited, and result nodes all live
//! in [`NodeList`], a doubly-linked ordered container over shared payloads.
//! The occupancy grid is owned by the caller and reaches the planner only
//! through the read-only [`BlockedQuery`] interface; the produced [`Route`]
//! is handed back in target-to-start order for the consumer to draw.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Collaborators (depend on core)
// ============================================================================
pub mod collections;
pub mod grid;

// ============================================================================
// Layer 3: Planning (depends on core, collections, grid)
// ============================================================================
pub mod planning;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::CellPoint;

pub use crate::collections::{ListError, NodeList};

pub use crate::grid::{BlockedQuery, GridParseError, OccupancyGrid};

pub use crate::planning::{search, PlanningError, Route, SearchNode, G_WEIGHT, H_WEIGHT};
