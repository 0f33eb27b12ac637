//! Relationship path — the chain of hops between two members.

use serde::{Deserialize, Serialize};

use super::member::MemberId;
use super::relation::RelationType;

/// One step along a relationship path: the member reached and the
/// relation traversed to reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHop {
    pub member_id: MemberId,
    pub relation: RelationType,
}

/// Shortest relationship chain between two members, with a rendered
/// human-readable description ("Grandparent", "Cousin", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipPath {
    pub from: MemberId,
    pub to: MemberId,
    /// Empty when `from == to`.
    pub hops: Vec<PathHop>,
    pub description: String,
}

impl RelationshipPath {
    /// Number of hops.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// The edge-type sequence the description is matched on.
    pub fn relation_sequence(&self) -> Vec<RelationType> {
        self.hops.iter().map(|h| h.relation).collect()
    }
}
