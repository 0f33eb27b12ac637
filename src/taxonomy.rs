//! Relationship taxonomy — static lookup tables.
//!
//! Three concerns, all pure:
//! - the inverse table ([`RelationType::inverse`] lives on the enum),
//! - gendered display labels per base type,
//! - collapse of culturally specific detailed types onto the
//!   storage-level base types, retaining the detail as a subtype.

use std::str::FromStr;

use crate::model::{Gender, MemberId, RelationType, RelationshipEdge};

/// Result of collapsing a detailed relationship type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed {
    pub base: RelationType,
    /// The detailed value, kept when it is not itself a base type.
    pub subtype: Option<String>,
}

/// Gendered display label for a base relationship type.
///
/// The gender is the gender of the member the relation points at:
/// a `parent` edge to a female member reads "Mother".
pub fn gendered_label(relation: RelationType, gender: Gender) -> &'static str {
    use Gender::*;
    use RelationType::*;
    match (relation, gender) {
        (Parent, Male) => "Father",
        (Parent, Female) => "Mother",
        (Parent, Other) => "Parent",

        (Child, Male) => "Son",
        (Child, Female) => "Daughter",
        (Child, Other) => "Child",

        (Spouse, Male) => "Husband",
        (Spouse, Female) => "Wife",
        (Spouse, Other) => "Spouse",

        (Sibling, Male) => "Brother",
        (Sibling, Female) => "Sister",
        (Sibling, Other) => "Sibling",

        (Grandparent, Male) => "Grandfather",
        (Grandparent, Female) => "Grandmother",
        (Grandparent, Other) => "Grandparent",

        (Grandchild, Male) => "Grandson",
        (Grandchild, Female) => "Granddaughter",
        (Grandchild, Other) => "Grandchild",

        // Uncle/aunt and nephew/niece pairs resolve by the target's
        // gender regardless of which of the pair was stored.
        (Uncle | Aunt, Male) => "Uncle",
        (Uncle | Aunt, Female) => "Aunt",
        (Uncle | Aunt, Other) => "Uncle/Aunt",

        (Nephew | Niece, Male) => "Nephew",
        (Nephew | Niece, Female) => "Niece",
        (Nephew | Niece, Other) => "Nephew/Niece",

        (Cousin, _) => "Cousin",
        (InLaw, _) => "In-law",
    }
}

/// Collapse a detailed relationship type onto its storage-level base.
///
/// A value that already names a base type collapses to itself with no
/// subtype. A value in the detailed table collapses to its base with
/// the detail retained. Anything else returns `None` — the intake
/// layer skips such edges rather than erroring.
pub fn collapse(detailed: &str) -> Option<Collapsed> {
    if let Ok(base) = RelationType::from_str(detailed) {
        return Some(Collapsed { base, subtype: None });
    }
    subtype_base(detailed).map(|base| Collapsed {
        base,
        subtype: Some(detailed.to_string()),
    })
}

/// Build an edge from a detailed type, collapsing it first.
pub fn edge_from_detailed(target: MemberId, detailed: &str) -> Option<RelationshipEdge> {
    collapse(detailed).map(|c| {
        let edge = RelationshipEdge::new(target, c.base);
        match c.subtype {
            Some(subtype) => edge.with_subtype(subtype),
            None => edge,
        }
    })
}

/// Detailed-subtype → base-type table.
fn subtype_base(detailed: &str) -> Option<RelationType> {
    use RelationType::*;
    Some(match detailed {
        "father" | "mother" | "step_father" | "step_mother" | "adoptive_father"
        | "adoptive_mother" => Parent,

        "son" | "daughter" | "step_son" | "step_daughter" | "adopted_son"
        | "adopted_daughter" => Child,

        "husband" | "wife" => Spouse,

        "brother" | "sister" | "elder_brother" | "younger_brother" | "elder_sister"
        | "younger_sister" | "step_brother" | "step_sister" | "half_brother"
        | "half_sister" => Sibling,

        "grandfather" | "grandmother" | "paternal_grandfather" | "paternal_grandmother"
        | "maternal_grandfather" | "maternal_grandmother" => Grandparent,

        "grandson" | "granddaughter" => Grandchild,

        "paternal_uncle" | "paternal_uncle_elder" | "paternal_uncle_younger"
        | "maternal_uncle" => Uncle,

        "paternal_aunt" | "maternal_aunt" => Aunt,

        "brother_son" | "sister_son" => Nephew,

        "brother_daughter" | "sister_daughter" => Niece,

        "cousin_male" | "cousin_female" | "cousin_brother" | "cousin_sister" => Cousin,

        "father_in_law" | "mother_in_law" | "son_in_law" | "daughter_in_law"
        | "brother_in_law" | "sister_in_law" => InLaw,

        _ => return None,
    })
}
