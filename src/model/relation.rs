//! Relationship types and the typed edges embedded on members.

use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// Storage-level relationship type. Closed set: culturally specific
/// detail ("father", "paternal_uncle_elder", ...) is collapsed onto
/// these by the taxonomy and retained as an edge subtype annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    Parent,
    Child,
    Spouse,
    Sibling,
    Grandparent,
    Grandchild,
    Uncle,
    Aunt,
    Nephew,
    Niece,
    Cousin,
    InLaw,
}

impl RelationType {
    /// The reciprocal type: if A is `self` of B, then B is
    /// `self.inverse()` of A. Spouse, sibling, cousin and in-law are
    /// their own inverse.
    pub fn inverse(self) -> RelationType {
        use RelationType::*;
        match self {
            Parent => Child,
            Child => Parent,
            Grandparent => Grandchild,
            Grandchild => Grandparent,
            Uncle => Nephew,
            Nephew => Uncle,
            Aunt => Niece,
            Niece => Aunt,
            Spouse => Spouse,
            Sibling => Sibling,
            Cousin => Cousin,
            InLaw => InLaw,
        }
    }

    /// Neutral display label, used for single-hop path descriptions
    /// and the arrow-chain fallback.
    pub fn display_name(self) -> &'static str {
        use RelationType::*;
        match self {
            Parent => "Parent",
            Child => "Child",
            Spouse => "Spouse",
            Sibling => "Sibling",
            Grandparent => "Grandparent",
            Grandchild => "Grandchild",
            Uncle => "Uncle",
            Aunt => "Aunt",
            Nephew => "Nephew",
            Niece => "Niece",
            Cousin => "Cousin",
            InLaw => "In-law",
        }
    }

}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for RelationType {
    type Err = ();

    /// Parses the storage-level `snake_case` token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use RelationType::*;
        Ok(match s {
            "parent" => Parent,
            "child" => Child,
            "spouse" => Spouse,
            "sibling" => Sibling,
            "grandparent" => Grandparent,
            "grandchild" => Grandchild,
            "uncle" => Uncle,
            "aunt" => Aunt,
            "nephew" => Nephew,
            "niece" => Niece,
            "cousin" => Cousin,
            "in_law" => InLaw,
            _ => return Err(()),
        })
    }
}

/// A directed, typed edge from the member it is declared on to
/// `member_id`. Every edge should have a corresponding inverse on the
/// target; the inference engine repairs the ones that don't.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub member_id: MemberId,
    pub relation: RelationType,
    /// Culturally specific detail retained by the taxonomy collapse
    /// (e.g. base `parent`, subtype `"father"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

impl RelationshipEdge {
    pub fn new(member_id: MemberId, relation: RelationType) -> Self {
        Self { member_id, relation, subtype: None }
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }
}
