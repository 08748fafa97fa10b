//! Rectangle partition tree.
//!
//! Splits an `h x w` rectangle recursively into single cells, keeping
//! power-of-two regions together so the merge tree stays shallow and
//! isolating the remainder strips of non-power-of-two shapes.
//!
//! With `hp`/`wp` the largest powers of two not above `h`/`w`:
//!
//! | Condition | Split |
//! |-----------|-------|
//! | `h == w == 1` | leaf |
//! | `h == hp`, `w == wp`, `h == w` | quad into four `h/2` squares |
//! | `h == hp`, `w == wp`, `h < w` | horizontal: `(h, h)` \| `(h, w-h)` |
//! | `h == hp`, `w == wp`, `h > w` | vertical: `(w, w)` over `(h-w, w)` |
//! | only `h == hp` | horizontal: `(h, wp)` \| `(h, w-wp)` |
//! | only `w == wp` | vertical: `(hp, w)` over `(h-hp, w)` |
//! | neither | quad around `m = min(hp, wp)` |
//!
//! The tree depends on the shape alone, so one tree serves every goal of
//! that shape.

use std::fmt;

use rewind_core::Shape;

use crate::error::SearchError;

/// Kind of a partition node and its exclusively owned children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A single goal cell.
    Leaf,
    /// Four children in a 2x2 arrangement.
    Quad {
        /// Upper-left child; its shape fixes the split lines.
        top_left: Box<PartitionNode>,
        /// Upper-right child.
        top_right: Box<PartitionNode>,
        /// Lower-left child.
        bottom_left: Box<PartitionNode>,
        /// Lower-right child.
        bottom_right: Box<PartitionNode>,
    },
    /// Two children stacked top over bottom.
    Vertical {
        /// Upper child.
        top: Box<PartitionNode>,
        /// Lower child.
        bottom: Box<PartitionNode>,
    },
    /// Two children side by side.
    Horizontal {
        /// Left child.
        left: Box<PartitionNode>,
        /// Right child.
        right: Box<PartitionNode>,
    },
}

/// One rectangular region of the partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionNode {
    shape: Shape,
    kind: NodeKind,
}

/// Largest power of two `<= n`, for `n >= 1`.
fn floor_pow2(n: usize) -> usize {
    1 << (usize::BITS - 1 - n.leading_zeros())
}

impl PartitionNode {
    /// Build the partition tree for a region of `shape`.
    ///
    /// Returns `Err(SearchError::InvalidShape)` if either dimension is 0.
    pub fn build(shape: Shape) -> Result<Self, SearchError> {
        if shape.is_degenerate() {
            return Err(SearchError::InvalidShape { shape });
        }
        Ok(Self::split(shape))
    }

    fn split(shape: Shape) -> Self {
        let Shape { rows: h, cols: w } = shape;
        if h == 1 && w == 1 {
            return Self {
                shape,
                kind: NodeKind::Leaf,
            };
        }
        let hp = floor_pow2(h);
        let wp = floor_pow2(w);
        let node = |rows, cols| Box::new(Self::split(Shape::new(rows, cols)));

        let kind = match (h == hp, w == wp) {
            (true, true) if h == w => NodeKind::Quad {
                top_left: node(h / 2, h / 2),
                top_right: node(h / 2, h / 2),
                bottom_left: node(h / 2, h / 2),
                bottom_right: node(h / 2, h / 2),
            },
            (true, true) if h < w => NodeKind::Horizontal {
                left: node(h, h),
                right: node(h, w - h),
            },
            (true, true) => NodeKind::Vertical {
                top: node(w, w),
                bottom: node(h - w, w),
            },
            (true, false) => NodeKind::Horizontal {
                left: node(h, wp),
                right: node(h, w - wp),
            },
            (false, true) => NodeKind::Vertical {
                top: node(hp, w),
                bottom: node(h - hp, w),
            },
            (false, false) => {
                // Neither side is a power of two, so m < h and m < w and
                // every child is non-empty.
                let m = hp.min(wp);
                NodeKind::Quad {
                    top_left: node(m, m),
                    top_right: node(m, w - m),
                    bottom_left: node(h - m, m),
                    bottom_right: node(h - m, w - m),
                }
            }
        };
        Self { shape, kind }
    }

    /// Region covered by this node.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Node kind and children.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// `true` for single-cell nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// Children with their offsets `(row, col)` relative to this node's
    /// top-left cell, in merge order.
    pub fn children(&self) -> Vec<(&PartitionNode, usize, usize)> {
        match &self.kind {
            NodeKind::Leaf => Vec::new(),
            NodeKind::Quad {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => {
                let Shape { rows, cols } = top_left.shape;
                vec![
                    (top_left.as_ref(), 0, 0),
                    (top_right.as_ref(), 0, cols),
                    (bottom_left.as_ref(), rows, 0),
                    (bottom_right.as_ref(), rows, cols),
                ]
            }
            NodeKind::Vertical { top, bottom } => {
                vec![(top.as_ref(), 0, 0), (bottom.as_ref(), top.shape.rows, 0)]
            }
            NodeKind::Horizontal { left, right } => {
                vec![(left.as_ref(), 0, 0), (right.as_ref(), 0, left.shape.cols)]
            }
        }
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children().iter().map(|(c, _, _)| c.leaf_count()).sum()
    }

    /// Length of the longest root-to-leaf path, counting edges.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|(c, _, _)| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Goal positions of all leaves in traversal order.
    pub fn leaf_positions(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.shape.area());
        self.collect_leaves(0, 0, &mut out);
        out
    }

    fn collect_leaves(&self, row: usize, col: usize, out: &mut Vec<(usize, usize)>) {
        if self.is_leaf() {
            out.push((row, col));
            return;
        }
        for (child, dr, dc) in self.children() {
            child.collect_leaves(row + dr, col + dc, out);
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        let label = match self.kind {
            NodeKind::Leaf => return writeln!(f, "{pad}*"),
            NodeKind::Quad { .. } => "quad",
            NodeKind::Vertical { .. } => "vertical",
            NodeKind::Horizontal { .. } => "horizontal",
        };
        writeln!(f, "{pad}{label} {}", self.shape)?;
        for (child, _, _) in self.children() {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for PartitionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
