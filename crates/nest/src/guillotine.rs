//! Guillotine free-rectangle tree for a single sheet.
//!
//! The tree starts as one free leaf covering the whole board. Placing a part
//! in a leaf marks it used and appends two children for the leftover space:
//!
//! ```text
//! +--------+-------------+
//! |  part  | kerf| right |
//! +--------+-------------+
//! |        kerf          |
//! +----------------------+
//! |         down         |
//! +----------------------+
//! ```
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]. Splits
//! only append; existing nodes are never removed or re-linked.

use cabinetry_core::{Mm, Rect};

/// Handle to a node in a [`GuillotineTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A free or used rectangle in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingNode {
    /// Area covered by this node.
    pub rect: Rect,
    /// Set once a part has been placed at the node's origin.
    pub used: bool,
    /// Leftover space to the right of the placed part.
    pub right: Option<NodeId>,
    /// Leftover space below the placed part.
    pub down: Option<NodeId>,
}

impl PackingNode {
    fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            used: false,
            right: None,
            down: None,
        }
    }
}

/// Where a part ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePlacement {
    /// Footprint on the sheet, after rotation.
    pub rect: Rect,
    /// Whether the part was turned 90 degrees.
    pub rotated: bool,
    /// The node the part occupies.
    pub node: NodeId,
}

/// Guillotine tree over one sheet.
#[derive(Debug, Clone)]
pub struct GuillotineTree {
    nodes: Vec<PackingNode>,
    kerf: Mm,
}

impl GuillotineTree {
    /// Creates a tree with a single free leaf of the sheet's size.
    pub fn new(width: Mm, length: Mm, kerf: Mm) -> Self {
        Self {
            nodes: vec![PackingNode::leaf(Rect::sized(width, length))],
            kerf,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> &PackingNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Unused leaves with non-zero area.
    pub fn free_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.nodes
            .iter()
            .filter(|n| !n.used && !n.rect.is_empty())
            .map(|n| n.rect)
    }

    /// Depth-first search (right subtree before down subtree) for the first
    /// unused leaf that can hold a `width x length` rectangle.
    pub fn find(&self, width: Mm, length: Mm) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.used {
                if let Some(down) = node.down {
                    stack.push(down);
                }
                if let Some(right) = node.right {
                    stack.push(right);
                }
            } else if node.rect.fits(width, length) {
                return Some(id);
            }
        }
        None
    }

    /// Places a `width x length` rectangle at the origin of a free leaf and
    /// splits the leftover space. Returns the placed footprint, or `None` if
    /// the node is already used or too small.
    fn split(&mut self, id: NodeId, width: Mm, length: Mm) -> Option<Rect> {
        let kerf = self.kerf;
        let node = self.nodes.get(id.0)?;
        if node.used || !node.rect.fits(width, length) {
            return None;
        }
        let r = node.rect;

        let down = Rect::new(
            r.x,
            r.y + length + kerf,
            r.width,
            (r.length - length - kerf).max(0),
        );
        let right = Rect::new(
            r.x + width + kerf,
            r.y,
            (r.width - width - kerf).max(0),
            length,
        );

        let down_id = NodeId(self.nodes.len());
        self.nodes.push(PackingNode::leaf(down));
        let right_id = NodeId(self.nodes.len());
        self.nodes.push(PackingNode::leaf(right));

        let node = &mut self.nodes[id.0];
        node.used = true;
        node.down = Some(down_id);
        node.right = Some(right_id);

        Some(Rect::new(r.x, r.y, width, length))
    }

    /// Finds a leaf for the rectangle, trying the rotated orientation when the
    /// upright one does not fit and rotation is allowed.
    pub fn insert(&mut self, width: Mm, length: Mm, rotatable: bool) -> Option<TreePlacement> {
        if let Some(node) = self.find(width, length) {
            let rect = self.split(node, width, length)?;
            return Some(TreePlacement {
                rect,
                rotated: false,
                node,
            });
        }
        if rotatable && width != length {
            if let Some(node) = self.find(length, width) {
                let rect = self.split(node, length, width)?;
                return Some(TreePlacement {
                    rect,
                    rotated: true,
                    node,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_root_leaf() {
        let tree = GuillotineTree::new(2800, 2070, 4);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.node(tree.root()).rect, Rect::sized(2800, 2070));
        assert_eq!(tree.find(2800, 2070), Some(tree.root()));
        assert_eq!(tree.find(2801, 10), None);
    }

    #[test]
    fn test_split_geometry_with_kerf() {
        let mut tree = GuillotineTree::new(1000, 800, 5);
        let placed = tree.split(tree.root(), 300, 200).unwrap();
        assert_eq!(placed, Rect::new(0, 0, 300, 200));

        let root = tree.node(tree.root()).clone();
        assert!(root.used);
        assert_eq!(tree.node(root.down.unwrap()).rect, Rect::new(0, 205, 1000, 595));
        assert_eq!(tree.node(root.right.unwrap()).rect, Rect::new(305, 0, 695, 200));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_split_rejects_used_or_small_node() {
        let mut tree = GuillotineTree::new(1000, 1000, 0);
        let root = tree.root();
        assert!(tree.split(root, 1001, 10).is_none());
        assert_eq!(tree.len(), 1);
        assert!(tree.split(root, 500, 500).is_some());
        assert!(tree.split(root, 100, 100).is_none());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_split_saturates_at_zero() {
        let mut tree = GuillotineTree::new(100, 100, 3);
        tree.split(tree.root(), 99, 100).unwrap();
        let root = tree.node(tree.root()).clone();
        assert_eq!(tree.node(root.down.unwrap()).rect.length, 0);
        assert_eq!(tree.node(root.right.unwrap()).rect.width, 0);
        assert_eq!(tree.free_rects().count(), 0);
    }

    #[test]
    fn test_find_prefers_right_subtree() {
        let mut tree = GuillotineTree::new(1000, 1000, 0);
        tree.split(tree.root(), 400, 400).unwrap();

        // Right leaf is 600x400, down leaf 1000x600.
        let hit = tree.find(300, 300).unwrap();
        assert_eq!(tree.node(hit).rect, Rect::new(400, 0, 600, 400));

        // Only the down leaf is tall enough.
        let hit = tree.find(300, 500).unwrap();
        assert_eq!(tree.node(hit).rect, Rect::new(0, 400, 1000, 600));
    }

    #[test]
    fn test_insert_rotates_when_needed() {
        let mut tree = GuillotineTree::new(1000, 500, 0);
        let placed = tree.insert(400, 900, true).unwrap();
        assert!(placed.rotated);
        assert_eq!(placed.rect, Rect::new(0, 0, 900, 400));

        let mut tree = GuillotineTree::new(1000, 500, 0);
        assert!(tree.insert(400, 900, false).is_none());
    }

    #[test]
    fn test_inserts_never_overlap() {
        let mut tree = GuillotineTree::new(1200, 1200, 4);
        let mut placed: Vec<Rect> = Vec::new();
        for (w, h) in [(500, 400), (300, 700), (600, 600), (200, 200), (450, 300), (100, 900)] {
            if let Some(p) = tree.insert(w, h, true) {
                placed.push(p.rect);
            }
        }
        assert!(placed.len() >= 4);
        for (i, a) in placed.iter().enumerate() {
            assert!(Rect::sized(1200, 1200).contains_rect(a));
            for b in &placed[i + 1..] {
                assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}
