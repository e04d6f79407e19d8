use log::trace;
use rand::Rng;

use crate::constants::SPLIT_THRESHOLD;
use crate::geometry::{Corridor, Rect};

/// Index of a node inside a [`SpaceTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A region of the partition. Either a leaf (may hold a room) or an internal
/// node with exactly two children.
#[derive(Clone, Debug)]
pub struct Node {
    /// The region this node covers
    pub rect: Rect,
    /// Left/top child after split
    pub left: Option<NodeId>,
    /// Right/bottom child after split
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
    /// The room carved in this region (only for leaves)
    pub room: Option<Rect>,
    /// Corridor segments joining this node's two subtrees
    pub corridors: Vec<Corridor>,
}

impl Node {
    fn new(rect: Rect, parent: Option<NodeId>) -> Self {
        Self {
            rect,
            left: None,
            right: None,
            parent,
            room: None,
            corridors: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut the width: children sit side by side
    Vertical,
    /// Cut the height: children sit one above the other
    Horizontal,
}

/// Decide how a region would be split, or `None` if it must stay a leaf.
pub fn split_axis(rect: &Rect) -> Option<SplitAxis> {
    if rect.width < SPLIT_THRESHOLD || rect.height < SPLIT_THRESHOLD {
        return None;
    }
    if rect.width > rect.height && rect.width > SPLIT_THRESHOLD {
        Some(SplitAxis::Vertical)
    } else if rect.height > SPLIT_THRESHOLD {
        Some(SplitAxis::Horizontal)
    } else {
        None
    }
}

/// Binary space partition stored as a flat arena. Parent and child links are
/// indices, so the whole tree drops as one `Vec`.
#[derive(Clone, Debug)]
pub struct SpaceTree {
    nodes: Vec<Node>,
}

impl SpaceTree {
    pub const ROOT: NodeId = NodeId(0);

    /// Partition `{0, 0, width, height}` breadth-first for at most
    /// `max_depth` rounds.
    pub fn build(width: i32, height: i32, max_depth: u32, rng: &mut impl Rng) -> Self {
        let mut tree = Self {
            nodes: vec![Node::new(Rect::new(0, 0, width, height), None)],
        };

        let mut frontier = vec![Self::ROOT];
        for _ in 0..max_depth {
            if frontier.is_empty() {
                break;
            }
            let mut next = Vec::with_capacity(frontier.len() * 2);
            for id in frontier {
                if let Some((left, right)) = tree.split(id, rng) {
                    next.push(left);
                    next.push(right);
                }
            }
            frontier = next;
        }

        tree
    }

    fn split(&mut self, id: NodeId, rng: &mut impl Rng) -> Option<(NodeId, NodeId)> {
        let rect = self.nodes[id.0].rect;
        let axis = split_axis(&rect)?;

        let (first, second) = match axis {
            SplitAxis::Vertical => {
                let cut = middle_third(rect.width, rng);
                (
                    Rect::new(rect.x, rect.y, cut, rect.height),
                    Rect::new(rect.x + cut, rect.y, rect.width - cut, rect.height),
                )
            }
            SplitAxis::Horizontal => {
                let cut = middle_third(rect.height, rng);
                (
                    Rect::new(rect.x, rect.y, rect.width, cut),
                    Rect::new(rect.x, rect.y + cut, rect.width, rect.height - cut),
                )
            }
        };
        trace!("split {:?} {:?} into {:?} / {:?}", rect, axis, first, second);

        let left = self.push(first, id);
        let right = self.push(second, id);
        let node = &mut self.nodes[id.0];
        node.left = Some(left);
        node.right = Some(right);
        Some((left, right))
    }

    fn push(&mut self, rect: Rect, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(rect, Some(parent)));
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a built tree, which always holds its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Both children of an internal node, `None` for a leaf.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let node = self.node(id);
        node.left.zip(node.right)
    }

    /// Number of edges from the root down to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// Leaves under `id`, left to right.
    pub fn leaves_under(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.children(current) {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => leaves.push(current),
            }
        }
        leaves
    }

    pub fn leaves(&self) -> Vec<NodeId> {
        self.leaves_under(Self::ROOT)
    }

    /// The first room found in a left-first walk of the subtree at `id`.
    pub fn first_room(&self, id: NodeId) -> Option<Rect> {
        self.leaves_under(id)
            .into_iter()
            .find_map(|leaf| self.node(leaf).room)
    }

    /// Rooms of all leaves, left to right.
    pub fn rooms(&self) -> Vec<Rect> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| self.node(leaf).room)
            .collect()
    }

    /// Every corridor segment stored in the tree, parents before children.
    pub fn corridors(&self) -> Vec<Corridor> {
        let mut corridors = Vec::new();
        let mut stack = vec![Self::ROOT];
        while let Some(current) = stack.pop() {
            corridors.extend_from_slice(&self.node(current).corridors);
            if let Some((left, right)) = self.children(current) {
                stack.push(right);
                stack.push(left);
            }
        }
        corridors
    }
}

/// Uniform cut position in `[len / 3, 2 * len / 3]`.
fn middle_third(len: i32, rng: &mut impl Rng) -> i32 {
    let low = len / 3;
    let high = (len as i64 * 2 / 3) as i32;
    rng.gen_range(low..=high)
}
