//! Arena node in the derived family graph.
//!
//! Cross-references are member IDs resolved through the graph's node
//! map, never owned pointers, so the parent/child/spouse cycles of
//! real family data stay representable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::member::{Member, MemberId};

/// One node per member, created in bulk at the start of a build and
/// mutated in place through the link, generation and layout passes.
/// Never reused across builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeNode {
    pub member: Member,

    /// Up to two recorded parents, first-seen-first-assigned. A third
    /// declared parent is dropped.
    pub parent: Option<MemberId>,
    pub other_parent: Option<MemberId>,

    /// Last spouse edge wins; earlier ones are overwritten.
    pub spouse: Option<MemberId>,

    pub children: SmallVec<[MemberId; 4]>,
    pub siblings: SmallVec<[MemberId; 4]>,

    /// Generation layer, normalized so the oldest generation is 0.
    pub generation: i32,

    /// Layout coordinates (top-left corner). Defined after a layout pass.
    pub x: f32,
    pub y: f32,
    /// Horizontal space this node's subtree reserves, in node slots.
    pub subtree_width: f32,
}

impl FamilyTreeNode {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            parent: None,
            other_parent: None,
            spouse: None,
            children: SmallVec::new(),
            siblings: SmallVec::new(),
            generation: 0,
            x: 0.0,
            y: 0.0,
            subtree_width: 1.0,
        }
    }

    pub fn id(&self) -> MemberId {
        self.member.id
    }

    /// A node with no recorded parent seeds the generation BFS at 0.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Both parent slots, skipping empty ones.
    pub fn parents(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.parent.into_iter().chain(self.other_parent)
    }

    /// Whether any structural link was recorded on this node.
    pub fn has_links(&self) -> bool {
        self.parent.is_some()
            || self.spouse.is_some()
            || !self.children.is_empty()
            || !self.siblings.is_empty()
    }

    /// Record a parent. Returns false when both slots are already
    /// taken by other members (the declared edge is dropped).
    pub(crate) fn add_parent(&mut self, parent: MemberId) -> bool {
        if self.parent == Some(parent) || self.other_parent == Some(parent) {
            return true; // already recorded
        }
        if self.parent.is_none() {
            self.parent = Some(parent);
            true
        } else if self.other_parent.is_none() {
            self.other_parent = Some(parent);
            true
        } else {
            false
        }
    }

    pub(crate) fn add_child(&mut self, child: MemberId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    pub(crate) fn add_sibling(&mut self, sibling: MemberId) {
        if !self.siblings.contains(&sibling) {
            self.siblings.push(sibling);
        }
    }
}
