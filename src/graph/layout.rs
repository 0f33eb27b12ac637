//! Tree layout — subtree widths bottom-up, coordinates top-down.
//!
//! Modified Reingold–Tilford: every parentless node with structure
//! anchors a descent; children are centered under their parent one row down,
//! a spouse sits immediately to the right of their partner on the
//! same row. Nodes the descent never reaches (isolated members,
//! birth-year-bucketed graphs) fall back to per-generation rows
//! centered within the configured screen width.
//!
//! ## Limitations
//!
//! - Coordinates are advisory hints for the rendering surface; no
//!   collision resolution happens beyond subtree width reservation.
//! - Pathological multi-marriage topologies can overlap. Documented
//!   behavior, inherited from the source data model.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::MemberId;

use super::FamilyGraph;

/// Node and gap sizing for a rendering surface. All values in the
/// surface's own units (typically logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub node_width: f32,
    pub node_height: f32,
    pub horizontal_gap: f32,
    pub vertical_gap: f32,
    /// Width the fallback rows center themselves in.
    pub screen_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 96.0,
            node_height: 120.0,
            horizontal_gap: 32.0,
            vertical_gap: 64.0,
            screen_width: 1280.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal pitch of one node slot.
    fn unit(&self) -> f32 {
        self.node_width + self.horizontal_gap
    }

    /// Vertical pitch of one generation row.
    fn row_height(&self) -> f32 {
        self.node_height + self.vertical_gap
    }
}

/// Compute `x`/`y`/`subtree_width` for every node, in place.
pub fn compute_layout(graph: &mut FamilyGraph, config: &LayoutConfig) {
    if graph.is_empty() {
        return;
    }

    // Only roots with actual structure anchor a descent; bare nodes
    // (isolated members, bucketed flat lists) go to the fallback rows.
    let roots: Vec<MemberId> = graph
        .root_ids()
        .into_iter()
        .filter(|id| graph.node(*id).is_some_and(|n| n.has_links()))
        .collect();

    let mut measured = HashSet::with_capacity(graph.len());
    for root in &roots {
        measure_subtree(graph, *root, &mut measured);
    }

    let mut positioned = HashSet::with_capacity(graph.len());
    let mut cursor = 0.0_f32;
    for root in &roots {
        let span = graph.node(*root).map(|n| n.subtree_width).unwrap_or(1.0) * config.unit();
        let x = cursor + span / 2.0 - config.node_width / 2.0;
        let y = graph.node(*root).map(|n| n.generation).unwrap_or(0) as f32 * config.row_height();
        place_subtree(graph, *root, x, y, config, &mut positioned);
        cursor += span;
    }

    place_fallback_rows(graph, config, &mut positioned);
}

/// Bottom-up subtree width: sum of the children's widths, minimum 1,
/// widened to 2 when a spouse is present who is not already counted
/// among the children. The visited set bounds recursion on cyclic
/// link data.
fn measure_subtree(graph: &mut FamilyGraph, id: MemberId, visited: &mut HashSet<MemberId>) -> f32 {
    if !visited.insert(id) {
        return graph.node(id).map(|n| n.subtree_width).unwrap_or(1.0);
    }

    let (children, spouse) = match graph.node(id) {
        Some(node) => (node.children.to_vec(), node.spouse),
        None => return 1.0,
    };

    let mut width: f32 = children
        .iter()
        .map(|child| measure_subtree(graph, *child, visited))
        .sum();
    if width < 1.0 {
        width = 1.0;
    }
    if let Some(spouse) = spouse {
        if !children.contains(&spouse) && width < 2.0 {
            width = 2.0;
        }
    }

    if let Some(node) = graph.node_mut(id) {
        node.subtree_width = width;
    }
    width
}

/// Top-down placement: the node at (x, y), its spouse one slot right,
/// its children centered underneath one row down. The positioned set
/// doubles as the cycle guard — a node is placed at most once, first
/// placement wins.
fn place_subtree(
    graph: &mut FamilyGraph,
    id: MemberId,
    x: f32,
    y: f32,
    config: &LayoutConfig,
    positioned: &mut HashSet<MemberId>,
) {
    if !positioned.insert(id) {
        return;
    }

    let (children, spouse) = match graph.node_mut(id) {
        Some(node) => {
            node.x = x;
            node.y = y;
            (node.children.to_vec(), node.spouse)
        }
        None => return,
    };

    if let Some(spouse) = spouse {
        if positioned.insert(spouse) {
            if let Some(node) = graph.node_mut(spouse) {
                node.x = x + config.unit();
                node.y = y;
            }
        }
    }

    let total: f32 = children
        .iter()
        .map(|child| graph.node(*child).map(|n| n.subtree_width).unwrap_or(1.0))
        .sum::<f32>()
        * config.unit();
    let left = x + config.node_width / 2.0 - total / 2.0;
    let child_y = y + config.row_height();

    let mut offset = 0.0_f32;
    for child in children {
        let span = graph.node(child).map(|n| n.subtree_width).unwrap_or(1.0) * config.unit();
        let child_x = left + offset + span / 2.0 - config.node_width / 2.0;
        place_subtree(graph, child, child_x, child_y, config, positioned);
        offset += span;
    }
}

/// Evenly spaced generation rows, centered within the screen width,
/// for every node the parent-down descent did not reach.
fn place_fallback_rows(
    graph: &mut FamilyGraph,
    config: &LayoutConfig,
    positioned: &mut HashSet<MemberId>,
) {
    let rows: Vec<(i32, Vec<MemberId>)> = graph
        .generations()
        .iter()
        .map(|(generation, ids)| {
            let unplaced: Vec<MemberId> = ids
                .iter()
                .copied()
                .filter(|id| !positioned.contains(id))
                .collect();
            (*generation, unplaced)
        })
        .filter(|(_, unplaced)| !unplaced.is_empty())
        .collect();

    for (generation, ids) in rows {
        trace!(generation, count = ids.len(), "fallback row placement");
        let count = ids.len() as f32;
        let row_width = count * config.node_width + (count - 1.0) * config.horizontal_gap;
        let start = (config.screen_width - row_width) / 2.0;
        let y = generation as f32 * config.row_height();

        for (index, id) in ids.into_iter().enumerate() {
            positioned.insert(id);
            if let Some(node) = graph.node_mut(id) {
                node.x = start + index as f32 * config.unit();
                node.y = y;
            }
        }
    }
}
