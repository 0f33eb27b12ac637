//! End-to-end tests for relationship path finding.
//!
//! Self and unknown-ID handling, the fixed 1–3 hop pattern table,
//! shortest-path preference, and the arrow-chain fallback.

use vriksha::{
    FamilyGraph, Gender, Member, MemberId, RelationType, RelationshipEdge, find_path,
};

fn member(id: u64, name: &str) -> Member {
    Member::new(MemberId(id), name, Gender::Other)
}

fn edge(target: u64, relation: RelationType) -> RelationshipEdge {
    RelationshipEdge::new(MemberId(target), relation)
}

/// GP → P → C chain plus P's spouse and P's sibling.
fn family() -> FamilyGraph {
    FamilyGraph::build(vec![
        member(1, "GP"),
        member(2, "P").with_edge(edge(1, RelationType::Parent)),
        member(3, "C").with_edge(edge(2, RelationType::Parent)),
        member(4, "Spouse").with_edge(edge(2, RelationType::Spouse)),
        member(5, "Sibling").with_edge(edge(2, RelationType::Sibling)),
    ])
}

// ============================================================================
// 1. Self and unknown IDs
// ============================================================================

#[test]
fn self_path_is_empty_with_self_description() {
    let graph = family();
    for id in [1, 2, 3, 4, 5] {
        let path = find_path(&graph, MemberId(id), MemberId(id)).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.description, "Self");
        assert_eq!(path.from, MemberId(id));
        assert_eq!(path.to, MemberId(id));
    }
}

#[test]
fn unknown_ids_return_none() {
    let graph = family();
    assert!(find_path(&graph, MemberId(999), MemberId(1)).is_none());
    assert!(find_path(&graph, MemberId(1), MemberId(999)).is_none());
}

#[test]
fn disconnected_members_return_none() {
    let graph = FamilyGraph::build(vec![member(1, "A"), member(2, "B")]);
    assert!(find_path(&graph, MemberId(1), MemberId(2)).is_none());
}

// ============================================================================
// 2. Single-hop labels
// ============================================================================

#[test]
fn single_hop_labels() {
    let graph = family();

    assert_eq!(find_path(&graph, MemberId(3), MemberId(2)).unwrap().description, "Parent");
    assert_eq!(find_path(&graph, MemberId(2), MemberId(3)).unwrap().description, "Child");
    assert_eq!(find_path(&graph, MemberId(2), MemberId(4)).unwrap().description, "Spouse");
    assert_eq!(find_path(&graph, MemberId(2), MemberId(5)).unwrap().description, "Sibling");
}

// ============================================================================
// 3. Grandparent / grandchild, both directions
// ============================================================================

#[test]
fn grandparent_and_grandchild() {
    let graph = family();

    let down = find_path(&graph, MemberId(1), MemberId(3)).unwrap();
    assert_eq!(down.description, "Grandchild");
    assert_eq!(
        down.relation_sequence(),
        vec![RelationType::Child, RelationType::Child]
    );

    let up = find_path(&graph, MemberId(3), MemberId(1)).unwrap();
    assert_eq!(up.description, "Grandparent");
    assert_eq!(
        up.relation_sequence(),
        vec![RelationType::Parent, RelationType::Parent]
    );
}

#[test]
fn grandparent_hops_walk_through_the_middle_generation() {
    let graph = family();
    let path = find_path(&graph, MemberId(3), MemberId(1)).unwrap();

    let via: Vec<MemberId> = path.hops.iter().map(|h| h.member_id).collect();
    assert_eq!(via, vec![MemberId(2), MemberId(1)]);
}

// ============================================================================
// 4. Uncle/aunt and nephew/niece
// ============================================================================

#[test]
fn parent_sibling_is_uncle_aunt() {
    let graph = family();
    assert_eq!(
        find_path(&graph, MemberId(3), MemberId(5)).unwrap().description,
        "Uncle/Aunt"
    );
}

#[test]
fn sibling_child_is_nephew_niece() {
    let graph = family();
    assert_eq!(
        find_path(&graph, MemberId(5), MemberId(3)).unwrap().description,
        "Nephew/Niece"
    );
}

// ============================================================================
// 5. Cousins: parent → sibling → child
// ============================================================================

#[test]
fn cousins_across_sibling_parents() {
    let graph = FamilyGraph::build(vec![
        member(1, "P1").with_edge(edge(2, RelationType::Sibling)),
        member(2, "P2"),
        member(3, "C1").with_edge(edge(1, RelationType::Parent)),
        member(4, "C2").with_edge(edge(2, RelationType::Parent)),
    ]);

    let path = find_path(&graph, MemberId(3), MemberId(4)).unwrap();
    assert_eq!(path.description, "Cousin");
    assert_eq!(
        path.relation_sequence(),
        vec![RelationType::Parent, RelationType::Sibling, RelationType::Child]
    );
}

// ============================================================================
// 6. In-law patterns
// ============================================================================

#[test]
fn spouse_parent_is_parent_in_law() {
    let graph = family();
    // Spouse (4) → P (2) → GP (1): spouse, parent.
    assert_eq!(
        find_path(&graph, MemberId(4), MemberId(1)).unwrap().description,
        "Parent-in-law"
    );
}

#[test]
fn child_spouse_is_child_in_law() {
    let graph = family();
    // GP (1) → P (2) → Spouse (4): child, spouse.
    assert_eq!(
        find_path(&graph, MemberId(1), MemberId(4)).unwrap().description,
        "Child-in-law"
    );
}

// ============================================================================
// 7. Shortest path wins over longer alternatives
// ============================================================================

#[test]
fn direct_sibling_beats_shared_parent_route() {
    let graph = FamilyGraph::build(vec![
        member(1, "P"),
        member(2, "C1")
            .with_edge(edge(1, RelationType::Parent))
            .with_edge(edge(3, RelationType::Sibling)),
        member(3, "C2").with_edge(edge(1, RelationType::Parent)),
    ]);

    let path = find_path(&graph, MemberId(2), MemberId(3)).unwrap();
    assert_eq!(path.len(), 1, "one sibling hop, not parent+child");
    assert_eq!(path.description, "Sibling");
}

// ============================================================================
// 8. Unlisted sequences fall back to the arrow chain
// ============================================================================

#[test]
fn great_grandparent_uses_arrow_fallback() {
    let graph = FamilyGraph::build(vec![
        member(1, "GGP"),
        member(2, "GP").with_edge(edge(1, RelationType::Parent)),
        member(3, "P").with_edge(edge(2, RelationType::Parent)),
        member(4, "C").with_edge(edge(3, RelationType::Parent)),
    ]);

    let path = find_path(&graph, MemberId(4), MemberId(1)).unwrap();
    assert_eq!(path.description, "Parent → Parent → Parent");
}

#[test]
fn sibling_in_law_uses_arrow_fallback() {
    let graph = FamilyGraph::build(vec![
        member(1, "A").with_edge(edge(2, RelationType::Spouse)),
        member(2, "B").with_edge(edge(3, RelationType::Sibling)),
        member(3, "C"),
    ]);

    let path = find_path(&graph, MemberId(1), MemberId(3)).unwrap();
    assert_eq!(path.description, "Spouse → Sibling");
}
