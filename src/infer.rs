//! Relationship inference — edges that should exist but don't.
//!
//! A pure detection pass over the raw member snapshot (not the built
//! graph): it emits the inverse edges and sibling edges required to
//! make the snapshot symmetric, without mutating its input. Applying
//! the suggestions and re-running yields an empty result — the pass
//! is a fixed point, so the write path can persist its output
//! verbatim.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Member, MemberId, RelationType, RelationshipEdge};

/// An edge the snapshot is missing: `relation` from `owner` to
/// `target`, to be added on `owner`'s side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InferredRelationship {
    pub owner: MemberId,
    pub target: MemberId,
    pub relation: RelationType,
}

/// Detect missing inverse edges and missing sibling edges.
///
/// Inverse pass: for every declared edge `A --t--> B`, if `B` lacks
/// `B --inverse(t)--> A`, that edge is suggested on `B`.
///
/// Sibling pass: two members sharing a parent (through their own
/// `parent` edges or through the parent's `child` edges) are
/// siblings; both missing directions of the pair are suggested, so a
/// single apply reaches the fixed point even when the inverse pass
/// repairs parent/child edges in the same run.
///
/// Output order is deterministic (snapshot order); duplicates and
/// already-present edges are never emitted.
pub fn infer_missing(members: &[Member]) -> Vec<InferredRelationship> {
    let index: HashMap<MemberId, &Member> = members.iter().map(|m| (m.id, m)).collect();

    let existing: HashSet<(MemberId, MemberId, RelationType)> = members
        .iter()
        .flat_map(|m| {
            m.edges
                .iter()
                .map(move |edge| (m.id, edge.member_id, edge.relation))
        })
        .collect();

    let mut suggestions = Vec::new();
    let mut emitted: HashSet<InferredRelationship> = HashSet::new();
    let mut emit = |owner: MemberId, target: MemberId, relation: RelationType,
                    suggestions: &mut Vec<InferredRelationship>| {
        let suggestion = InferredRelationship { owner, target, relation };
        if !existing.contains(&(owner, target, relation)) && emitted.insert(suggestion) {
            suggestions.push(suggestion);
        }
    };

    // Inverse pass.
    for member in members {
        for edge in &member.edges {
            if !index.contains_key(&edge.member_id) || edge.member_id == member.id {
                continue;
            }
            emit(
                edge.member_id,
                member.id,
                edge.relation.inverse(),
                &mut suggestions,
            );
        }
    }

    // Sibling pass: effective children per parent, from both edge
    // directions, in snapshot order.
    let mut children_of: HashMap<MemberId, Vec<MemberId>> = HashMap::new();
    let mut record_child = |parent: MemberId, child: MemberId,
                            children_of: &mut HashMap<MemberId, Vec<MemberId>>| {
        let entry = children_of.entry(parent).or_default();
        if !entry.contains(&child) {
            entry.push(child);
        }
    };
    for member in members {
        for edge in &member.edges {
            if !index.contains_key(&edge.member_id) || edge.member_id == member.id {
                continue;
            }
            match edge.relation {
                RelationType::Parent => record_child(edge.member_id, member.id, &mut children_of),
                RelationType::Child => record_child(member.id, edge.member_id, &mut children_of),
                _ => {}
            }
        }
    }

    for member in members {
        if let Some(children) = children_of.get(&member.id) {
            for a in children {
                for b in children {
                    if a != b {
                        emit(*a, *b, RelationType::Sibling, &mut suggestions);
                    }
                }
            }
        }
    }

    if !suggestions.is_empty() {
        debug!(count = suggestions.len(), "inferred missing relationships");
    }
    suggestions
}

/// Fold suggestions back into a member list, the way the write path
/// persists them. Unknown owners and already-present edges are
/// ignored.
pub fn apply_inferred(members: &mut [Member], suggestions: &[InferredRelationship]) {
    for suggestion in suggestions {
        let Some(member) = members.iter_mut().find(|m| m.id == suggestion.owner) else {
            continue;
        };
        let present = member
            .edges
            .iter()
            .any(|e| e.member_id == suggestion.target && e.relation == suggestion.relation);
        if !present {
            member
                .edges
                .push(RelationshipEdge::new(suggestion.target, suggestion.relation));
        }
    }
}
