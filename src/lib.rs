//! # vriksha — Family-Relationship Graph Engine
//!
//! The in-memory core of a family-heritage application: builds a
//! family tree from a flat member snapshot, assigns generations,
//! computes layout coordinates for rendering, infers missing
//! reciprocal relationships, and describes the kinship between any
//! two members.
//!
//! ## Design Principles
//!
//! 1. **Pure computation**: no I/O, no global state — every call
//!    operates on its own freshly built arena
//! 2. **Clean DTOs**: `Member`, `RelationshipEdge`, `FamilyTreeNode`,
//!    `RelationshipPath` cross all boundaries
//! 3. **Degrade, don't throw**: messy genealogical data must still
//!    render a tree; drops are logged, never raised
//! 4. **IDs, not pointers**: cross-references are member IDs resolved
//!    through the arena, so family cycles stay representable
//!
//! ## Quick Start
//!
//! ```rust
//! use vriksha::{
//!     FamilyGraph, Gender, LayoutConfig, Member, MemberId,
//!     RelationType, RelationshipEdge, compute_layout, find_path,
//! };
//!
//! let members = vec![
//!     Member::new(MemberId(1), "Asha", Gender::Female),
//!     Member::new(MemberId(2), "Ravi", Gender::Male)
//!         .with_edge(RelationshipEdge::new(MemberId(1), RelationType::Parent)),
//!     Member::new(MemberId(3), "Kiran", Gender::Other)
//!         .with_edge(RelationshipEdge::new(MemberId(2), RelationType::Parent)),
//! ];
//!
//! let mut graph = FamilyGraph::build(members);
//! compute_layout(&mut graph, &LayoutConfig::default());
//!
//! let path = find_path(&graph, MemberId(3), MemberId(1)).unwrap();
//! assert_eq!(path.description, "Grandparent");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod graph;
pub mod infer;
pub mod model;
pub mod pathfind;
pub mod snapshot;
pub mod taxonomy;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    FamilyTreeNode, Gender, Member, MemberId, PathHop, RelationType, RelationshipEdge,
    RelationshipPath,
};

// ============================================================================
// Re-exports: Graph, layout
// ============================================================================

pub use graph::{FamilyGraph, LayoutConfig, compute_layout};

// ============================================================================
// Re-exports: Inference, path finding, taxonomy
// ============================================================================

pub use infer::{InferredRelationship, apply_inferred, infer_missing};
pub use pathfind::find_path;
pub use taxonomy::{Collapsed, collapse, gendered_label};

// ============================================================================
// Error Types
// ============================================================================

/// Errors at the snapshot boundary. The graph algorithms themselves
/// never fail — see the crate-level degrade policy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("duplicate member id {0} in snapshot")]
    DuplicateMember(MemberId),
}

pub type Result<T> = std::result::Result<T, Error>;
