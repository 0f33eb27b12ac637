//! Generation assignment.
//!
//! Two strategies, tried in order, first success wins:
//!
//! 1. **Relationship BFS** — applicable when any node carries a
//!    structural link. Parentless nodes seed generation 0 (or, if a
//!    relationship cycle leaves no parentless node, the single node
//!    with the earliest birth date seeds alone). BFS then assigns
//!    children +1, spouse and siblings 0, parents −1, each node
//!    visited once, first-enqueued-wins.
//! 2. **Birth-year buckets** — a pure flat list with no links at all
//!    falls back to 25-year buckets from the earliest birth year.
//!    Undated members count as born in 2000.
//!
//! Either way the result is normalized so the oldest generation is
//! exactly 0, and the per-generation index is rebuilt.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::model::MemberId;

use super::FamilyGraph;

/// Years per generation in the bucketing fallback.
const GENERATION_SPAN_YEARS: i32 = 25;

/// One strategy's output: levels for the nodes it reached, and the
/// root it designated (bucketing designates none).
struct GenerationPlan {
    levels: HashMap<MemberId, i32>,
    root: Option<MemberId>,
}

/// Assign and normalize generations in place. Called at the end of
/// every build.
pub(crate) fn assign(graph: &mut FamilyGraph) {
    if graph.is_empty() {
        return;
    }

    let plan = relationship_bfs(graph).unwrap_or_else(|| birth_year_buckets(graph));

    graph.root = plan.root;
    for (id, level) in &plan.levels {
        if let Some(node) = graph.node_mut(*id) {
            node.generation = *level;
        }
    }

    normalize(graph);
}

/// Strategy 1: BFS over the linked structure. `None` when no node has
/// any structural link.
fn relationship_bfs(graph: &FamilyGraph) -> Option<GenerationPlan> {
    if !graph.iter().any(|n| n.has_links()) {
        return None;
    }

    let mut seeds = graph.root_ids();
    if seeds.is_empty() {
        // Relationship cycle: no parentless node exists. Fall back to
        // the earliest-born member as the sole root.
        let fallback = earliest_birth(graph);
        debug!(root = %fallback, "no parentless node, using earliest-birth fallback root");
        seeds = vec![fallback];
    }

    let root = seeds.first().copied();

    let mut levels: HashMap<MemberId, i32> = HashMap::with_capacity(graph.len());
    let mut visited: HashSet<MemberId> = HashSet::with_capacity(graph.len());
    let mut queue: VecDeque<MemberId> = VecDeque::new();

    for seed in seeds {
        levels.insert(seed, 0);
        visited.insert(seed);
        queue.push_back(seed);
    }

    while let Some(current) = queue.pop_front() {
        let level = levels[&current];
        let node = match graph.node(current) {
            Some(node) => node,
            None => continue,
        };

        let mut neighbors: Vec<(MemberId, i32)> = Vec::new();
        for parent in node.parents() {
            neighbors.push((parent, level - 1));
        }
        if let Some(spouse) = node.spouse {
            neighbors.push((spouse, level));
        }
        for sibling in node.siblings.iter().copied() {
            neighbors.push((sibling, level));
        }
        for child in node.children.iter().copied() {
            neighbors.push((child, level + 1));
        }

        for (neighbor, neighbor_level) in neighbors {
            if visited.insert(neighbor) {
                levels.insert(neighbor, neighbor_level);
                queue.push_back(neighbor);
            }
        }
    }

    Some(GenerationPlan { levels, root })
}

/// Strategy 2: 25-year buckets from the earliest birth year.
fn birth_year_buckets(graph: &FamilyGraph) -> GenerationPlan {
    debug!("no relationship data, bucketing generations by birth year");

    let base_year = graph
        .members_in_order()
        .map(|m| m.birth_year_or_default())
        .min()
        .unwrap_or(2000);

    let levels = graph
        .members_in_order()
        .map(|m| {
            let bucket = (m.birth_year_or_default() - base_year) / GENERATION_SPAN_YEARS;
            (m.id, bucket)
        })
        .collect();

    GenerationPlan { levels, root: None }
}

/// The member with the earliest birth date, undated counting as
/// 2000-01-01, snapshot order breaking ties.
fn earliest_birth(graph: &FamilyGraph) -> MemberId {
    let default_date = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    graph
        .members_in_order()
        .enumerate()
        .min_by_key(|(index, m)| (m.birth_date.unwrap_or(default_date), *index))
        .map(|(_, m)| m.id)
        .expect("graph is non-empty")
}

/// Shift generations so the oldest is 0 and rebuild the index.
fn normalize(graph: &mut FamilyGraph) {
    let min = graph.iter().map(|n| n.generation).min().unwrap_or(0);
    let max = graph.iter().map(|n| n.generation).max().unwrap_or(0);

    graph.generations.clear();
    let ids: Vec<MemberId> = graph.member_ids().to_vec();
    for id in ids {
        let generation = match graph.node_mut(id) {
            Some(node) => {
                node.generation -= min;
                node.generation
            }
            None => continue,
        };
        graph.generations.entry(generation).or_default().push(id);
    }

    graph.min_generation = 0;
    graph.max_generation = max - min;
}
