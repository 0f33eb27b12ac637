//! # Family Graph Model
//!
//! Clean DTOs that cross every boundary: persistence snapshot ↔ graph
//! build ↔ layout ↔ rendering. This module is pure data — no I/O, no
//! state.

pub mod member;
pub mod node;
pub mod path;
pub mod relation;

pub use member::{Gender, Member, MemberId};
pub use node::FamilyTreeNode;
pub use path::{PathHop, RelationshipPath};
pub use relation::{RelationType, RelationshipEdge};
