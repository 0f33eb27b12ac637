//! Relationship path finding and description rendering.
//!
//! BFS over the linked structure finds the shortest relationship
//! chain between two members; the chain's edge-type sequence is then
//! matched against a fixed table of known 1–3 hop kinship patterns.
//! Sequences outside the table render as an arrow-chain of the hop
//! labels — an intentional fallback, not an error.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use crate::graph::FamilyGraph;
use crate::model::{MemberId, PathHop, RelationType, RelationshipPath};

/// Shortest relationship path from `from` to `to`.
///
/// - `from == to` returns the empty "Self" path.
/// - `None` when either ID is absent from the graph, or when the two
///   members are in disconnected components.
pub fn find_path(graph: &FamilyGraph, from: MemberId, to: MemberId) -> Option<RelationshipPath> {
    if from == to {
        return Some(RelationshipPath {
            from,
            to,
            hops: Vec::new(),
            description: "Self".to_string(),
        });
    }
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }

    // BFS with a predecessor map for path reconstruction. Expansion
    // order is fixed (parents, spouse, children, siblings) so equal-
    // length paths resolve deterministically.
    let mut visited: HashSet<MemberId> = HashSet::new();
    let mut came_from: HashMap<MemberId, (MemberId, RelationType)> = HashMap::new();
    let mut queue: VecDeque<MemberId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    'search: while let Some(current) = queue.pop_front() {
        let node = match graph.node(current) {
            Some(node) => node,
            None => continue,
        };

        let mut neighbors: Vec<(MemberId, RelationType)> = Vec::new();
        for parent in node.parents() {
            neighbors.push((parent, RelationType::Parent));
        }
        if let Some(spouse) = node.spouse {
            neighbors.push((spouse, RelationType::Spouse));
        }
        for child in node.children.iter().copied() {
            neighbors.push((child, RelationType::Child));
        }
        for sibling in node.siblings.iter().copied() {
            neighbors.push((sibling, RelationType::Sibling));
        }

        for (neighbor, relation) in neighbors {
            if visited.insert(neighbor) {
                came_from.insert(neighbor, (current, relation));
                if neighbor == to {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    if !came_from.contains_key(&to) {
        trace!(%from, %to, "no relationship path");
        return None;
    }

    // Walk the predecessor map back from the target.
    let mut hops: Vec<PathHop> = Vec::new();
    let mut current = to;
    while current != from {
        let (previous, relation) = came_from[&current];
        hops.push(PathHop { member_id: current, relation });
        current = previous;
    }
    hops.reverse();

    let description = describe(&hops);
    Some(RelationshipPath { from, to, hops, description })
}

/// Render the hop sequence to a human-readable kinship label.
///
/// Known 1–3 hop patterns map to their common name; everything else
/// joins the hop labels with " → ". Longer kinship terms
/// (great-grandparent, grand-nephew, ...) are deliberately not in the
/// table and take the fallback.
fn describe(hops: &[PathHop]) -> String {
    use RelationType::*;

    let sequence: Vec<RelationType> = hops.iter().map(|h| h.relation).collect();
    match sequence.as_slice() {
        [single] => single.display_name().to_string(),
        [Parent, Parent] => "Grandparent".to_string(),
        [Child, Child] => "Grandchild".to_string(),
        [Parent, Sibling] => "Uncle/Aunt".to_string(),
        [Sibling, Child] => "Nephew/Niece".to_string(),
        [Parent, Sibling, Child] => "Cousin".to_string(),
        [Spouse, Parent] => "Parent-in-law".to_string(),
        [Child, Spouse] => "Child-in-law".to_string(),
        _ => sequence
            .iter()
            .map(|r| r.display_name())
            .collect::<Vec<_>>()
            .join(" → "),
    }
}
