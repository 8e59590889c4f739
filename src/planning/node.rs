//! Search node scoring and parent links.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::core::CellPoint;

/// Weight applied to the cost-from-start term of a node score.
pub const G_WEIGHT: f32 = 8.0;

/// Weight applied to the heuristic term of a node score.
pub const H_WEIGHT: f32 = 10.0;

/// One grid cell under consideration by the planner.
///
/// A node carries its position, a back-reference to the node it was
/// discovered from (`None` for the start node), the cost-from-start
/// estimate `g`, the Manhattan heuristic `h`, and the combined score
/// `f = G_WEIGHT * g + H_WEIGHT * h`.
///
/// `g` and the parent link are interior-mutable: when the frontier already
/// holds a node at a candidate's position, the existing node adopts the
/// candidate's `g` and parent instead of being replaced. The score `f` is
/// not recomputed on adoption.
pub struct SearchNode {
    pos: CellPoint,
    parent: RefCell<Option<Rc<SearchNode>>>,
    g: Cell<f32>,
    h: f32,
    f: f32,
}

impl SearchNode {
    /// Create a scored node with no parent.
    pub fn scored(pos: CellPoint, g: f32, h: f32) -> Rc<Self> {
        Rc::new(Self {
            pos,
            parent: RefCell::new(None),
            g: Cell::new(g),
            h,
            f: G_WEIGHT * g + H_WEIGHT * h,
        })
    }

    /// The node's cell position.
    #[inline]
    pub fn pos(&self) -> CellPoint {
        self.pos
    }

    /// Cost-from-start estimate.
    #[inline]
    pub fn g(&self) -> f32 {
        self.g.get()
    }

    /// Heuristic estimate to the target.
    #[inline]
    pub fn h(&self) -> f32 {
        self.h
    }

    /// Combined score used for frontier selection.
    #[inline]
    pub fn f(&self) -> f32 {
        self.f
    }

    /// The node this one was discovered from, if any.
    pub fn parent(&self) -> Option<Rc<SearchNode>> {
        self.parent.borrow().clone()
    }

    /// Set the discovery back-reference.
    pub fn set_parent(&self, parent: &Rc<SearchNode>) {
        *self.parent.borrow_mut() = Some(Rc::clone(parent));
    }

    /// Adopt a duplicate candidate's cost and parent.
    pub fn adopt(&self, g: f32, parent: &Rc<SearchNode>) {
        self.g.set(g);
        self.set_parent(parent);
    }

    /// Fresh copy carrying `(pos, g, h)` with no parent link.
    ///
    /// Path reconstruction appends these copies so the returned path owns
    /// its nodes independently of the visited set.
    pub fn detached_copy(&self) -> Rc<SearchNode> {
        Self::scored(self.pos, self.g(), self.h)
    }
}

impl fmt::Debug for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render the parent as its position only; full chains reach back to
        // the start node.
        let parent = self.parent.borrow().as_ref().map(|p| p.pos());
        f.debug_struct("SearchNode")
            .field("pos", &self.pos)
            .field("g", &self.g.get())
            .field("h", &self.h)
            .field("f", &self.f)
            .field("parent", &parent)
            .finish()
    }
}
