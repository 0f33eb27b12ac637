//! # Family Graph
//!
//! The derived in-memory graph: an arena of [`FamilyTreeNode`]s keyed
//! by member ID, plus the generation index the layout and rendering
//! layers consume. Built fresh from a member snapshot on every call —
//! nothing is shared or cached across builds.

pub mod builder;
pub mod generation;
pub mod layout;

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{FamilyTreeNode, Member, MemberId};

pub use layout::{LayoutConfig, compute_layout};

/// The build output: node arena, input order, designated root and the
/// generation index. Read-only to consumers; the generation and
/// layout passes mutate node fields in place before it is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyGraph {
    /// Member ID → node. Keys are unique.
    nodes: HashMap<MemberId, FamilyTreeNode>,
    /// Member IDs in snapshot order. Drives every deterministic
    /// tie-break (seed order, row order, first-enqueued-wins).
    order: Vec<MemberId>,
    /// The first generation-0 seed, or the earliest-birth fallback
    /// root. `None` for graphs laid out by birth-year bucketing.
    root: Option<MemberId>,
    /// Generation number → member IDs in that generation, in snapshot
    /// order.
    generations: BTreeMap<i32, Vec<MemberId>>,
    min_generation: i32,
    max_generation: i32,
}

impl FamilyGraph {
    pub fn node(&self, id: MemberId) -> Option<&FamilyTreeNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn node_mut(&mut self, id: MemberId) -> Option<&mut FamilyTreeNode> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &FamilyTreeNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Member IDs in snapshot order.
    pub fn member_ids(&self) -> &[MemberId] {
        &self.order
    }

    /// Member snapshots in snapshot order.
    pub fn members_in_order(&self) -> impl Iterator<Item = &Member> {
        self.iter().map(|n| &n.member)
    }

    pub fn root(&self) -> Option<MemberId> {
        self.root
    }

    /// The IDs in one generation, in snapshot order. Empty slice for
    /// generations outside the graph's bounds.
    pub fn generation_row(&self, generation: i32) -> &[MemberId] {
        self.generations
            .get(&generation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn generations(&self) -> &BTreeMap<i32, Vec<MemberId>> {
        &self.generations
    }

    pub fn min_generation(&self) -> i32 {
        self.min_generation
    }

    pub fn max_generation(&self) -> i32 {
        self.max_generation
    }

    /// Nodes with no recorded parent, in snapshot order.
    pub(crate) fn root_ids(&self) -> Vec<MemberId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.nodes[id].is_root())
            .collect()
    }
}
