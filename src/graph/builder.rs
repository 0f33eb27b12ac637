//! Graph construction: node creation, edge linking, generation pass.
//!
//! Linking degrades on bad data instead of failing:
//!
//! - an edge whose target is missing from the snapshot is skipped,
//! - a third-plus declared parent is dropped (two-slot cap),
//! - conflicting spouse edges resolve last-write-wins,
//! - duplicate children/sibling links dedup by ID,
//! - self-edges are skipped,
//! - non-structural types (grandparent, uncle, cousin, ...) are left
//!   to the path finder and not linked.
//!
//! Every drop is logged; none is an error.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use tracing::{debug, trace, warn};

use crate::model::{Member, MemberId, FamilyTreeNode, RelationType, RelationshipEdge};

use super::{FamilyGraph, generation};

impl FamilyGraph {
    /// Build the graph from a member snapshot.
    ///
    /// Three phases: create one node per member in snapshot order,
    /// link the declared edges (auto-completing the reciprocal side),
    /// then assign and normalize generations. Layout is a separate
    /// pass ([`super::compute_layout`]).
    pub fn build(members: Vec<Member>) -> FamilyGraph {
        let mut nodes = HashMap::with_capacity(members.len());
        let mut order = Vec::with_capacity(members.len());

        for member in members {
            if nodes.contains_key(&member.id) {
                warn!(id = %member.id, "duplicate member id in snapshot, keeping first");
                continue;
            }
            order.push(member.id);
            nodes.insert(member.id, FamilyTreeNode::new(member));
        }

        let mut graph = FamilyGraph {
            nodes,
            order,
            root: None,
            generations: BTreeMap::new(),
            min_generation: 0,
            max_generation: 0,
        };

        graph.link_edges();
        generation::assign(&mut graph);
        graph
    }

    fn link_edges(&mut self) {
        // Snapshot the declared edges first; linking mutates both
        // endpoints of each edge.
        let declared: Vec<(MemberId, RelationshipEdge)> = self
            .order
            .iter()
            .flat_map(|id| {
                self.nodes[id]
                    .member
                    .edges
                    .iter()
                    .map(|edge| (*id, edge.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();

        for (source, edge) in declared {
            let target = edge.member_id;

            if target == source {
                debug!(id = %source, "skipping self-referential edge");
                continue;
            }
            if !self.nodes.contains_key(&target) {
                debug!(source = %source, target = %target, "skipping edge to unknown member");
                continue;
            }

            match edge.relation {
                RelationType::Parent => self.link_parent(source, target),
                RelationType::Child => self.link_parent(target, source),
                RelationType::Spouse => self.link_spouse(source, target),
                RelationType::Sibling => self.link_sibling(source, target),
                other => {
                    trace!(relation = %other, "non-structural relation, not linked");
                }
            }
        }
    }

    /// Record `parent` as a parent of `child`, and `child` as a child
    /// of `parent`. The child side caps at two parents; the reciprocal
    /// children entry is recorded either way, deduped by ID.
    fn link_parent(&mut self, child: MemberId, parent: MemberId) {
        let child_node = self.nodes.get_mut(&child).expect("checked above");
        if !child_node.add_parent(parent) {
            warn!(child = %child, parent = %parent, "more than two parents declared, dropping");
        }
        self.nodes
            .get_mut(&parent)
            .expect("checked above")
            .add_child(child);
    }

    fn link_spouse(&mut self, a: MemberId, b: MemberId) {
        for (this, that) in [(a, b), (b, a)] {
            let node = self.nodes.get_mut(&this).expect("checked above");
            if let Some(previous) = node.spouse {
                if previous != that {
                    debug!(member = %this, old = %previous, new = %that, "spouse replaced, last edge wins");
                }
            }
            node.spouse = Some(that);
        }
    }

    fn link_sibling(&mut self, a: MemberId, b: MemberId) {
        self.nodes.get_mut(&a).expect("checked above").add_sibling(b);
        self.nodes.get_mut(&b).expect("checked above").add_sibling(a);
    }
}
