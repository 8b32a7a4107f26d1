//! Dependency classification over a blueprint graph.
//!
//! Every operation here is read-only and permissive: dangling prerequisite
//! ids are skipped, and cycles degrade the topological order for the cyclic
//! region without failing the call. The resolver is tooling over potentially
//! imperfect graph snapshots, not a validator.

use std::collections::VecDeque;

use ahash::AHashSet;
use tracing::warn;

use crate::blueprint::{GraphIndex, NodeDefinition};

/// The canonical dependency classification for a node: its direct
/// dependencies and everything reachable beyond them. The two sets are
/// disjoint by construction.
#[derive(Debug, Clone)]
pub struct DependencyClassification<'a> {
    pub direct: Vec<&'a NodeDefinition>,
    pub transitive: Vec<&'a NodeDefinition>,
}

/// Resolves the node's prerequisite ids through the index, in declared
/// order. Dangling ids are dropped.
pub fn direct_dependencies<'a>(
    node: &NodeDefinition,
    index: &GraphIndex<'a>,
) -> Vec<&'a NodeDefinition> {
    node.prerequisites
        .iter()
        .filter_map(|id| index.get(id))
        .collect()
}

/// Breadth-first traversal from the node's direct prerequisites, collecting
/// every node reachable through at least one intermediate hop.
///
/// Direct dependencies are excluded from the result, each node appears at
/// most once (even when reachable through several paths), and the order is
/// first-discovery (BFS layer) order.
pub fn transitive_dependencies<'a>(
    node: &NodeDefinition,
    index: &GraphIndex<'a>,
) -> Vec<&'a NodeDefinition> {
    let direct_ids: AHashSet<&str> = node.prerequisites.iter().map(String::as_str).collect();

    let mut visited: AHashSet<&str> = AHashSet::new();
    visited.insert(node.id.as_str());

    let mut queue: VecDeque<&str> = VecDeque::new();
    for id in &node.prerequisites {
        if visited.insert(id.as_str()) {
            queue.push_back(id.as_str());
        }
    }

    let mut recorded: AHashSet<&'a str> = AHashSet::new();
    let mut result: Vec<&'a NodeDefinition> = Vec::new();

    while let Some(id) = queue.pop_front() {
        let Some(current) = index.get(id) else {
            continue;
        };
        for prereq in &current.prerequisites {
            let Some(resolved) = index.get(prereq) else {
                continue;
            };
            if visited.insert(resolved.id.as_str()) {
                queue.push_back(resolved.id.as_str());
            }
            if resolved.id != node.id
                && !direct_ids.contains(resolved.id.as_str())
                && recorded.insert(resolved.id.as_str())
            {
                result.push(resolved);
            }
        }
    }

    result
}

/// Convenience pairing of [`direct_dependencies`] and
/// [`transitive_dependencies`].
pub fn all_dependencies<'a>(
    node: &NodeDefinition,
    index: &GraphIndex<'a>,
) -> DependencyClassification<'a> {
    DependencyClassification {
        direct: direct_dependencies(node, index),
        transitive: transitive_dependencies(node, index),
    }
}

/// Breadth-first traversal collecting every node reachable by following
/// prerequisite edges: the full ancestor set (direct and transitive), each
/// appearing once.
pub fn all_ancestors<'a>(
    node: &NodeDefinition,
    index: &GraphIndex<'a>,
) -> Vec<&'a NodeDefinition> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    visited.insert(node.id.as_str());

    let mut queue: VecDeque<&str> = VecDeque::new();
    for id in &node.prerequisites {
        if visited.insert(id.as_str()) {
            queue.push_back(id.as_str());
        }
    }

    let mut result: Vec<&'a NodeDefinition> = Vec::new();

    while let Some(id) = queue.pop_front() {
        let Some(current) = index.get(id) else {
            continue;
        };
        result.push(current);
        for prereq in &current.prerequisites {
            if visited.insert(prereq.as_str()) {
                queue.push_back(prereq.as_str());
            }
        }
    }

    result
}

/// Depth-first post-order sort: every node appears after all of its
/// resolvable prerequisites.
///
/// Takes the flat node collection and builds its own index, unlike the other
/// resolver functions. Revisiting a node that is still on the active
/// recursion stack signals a cycle: descent into that branch is aborted and
/// a diagnostic is emitted, so the order within the cyclic region is
/// best-effort. Every input node appears exactly once regardless.
pub fn topological_sort(nodes: &[NodeDefinition]) -> Vec<&NodeDefinition> {
    let index = GraphIndex::build(nodes);
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut in_progress: AHashSet<&str> = AHashSet::new();
    let mut ordered: Vec<&NodeDefinition> = Vec::with_capacity(nodes.len());

    for node in nodes {
        visit(node, &index, &mut visited, &mut in_progress, &mut ordered);
    }

    ordered
}

fn visit<'a>(
    node: &'a NodeDefinition,
    index: &GraphIndex<'a>,
    visited: &mut AHashSet<&'a str>,
    in_progress: &mut AHashSet<&'a str>,
    ordered: &mut Vec<&'a NodeDefinition>,
) {
    if visited.contains(node.id.as_str()) {
        return;
    }
    if !in_progress.insert(node.id.as_str()) {
        warn!(
            node_id = %node.id,
            "prerequisite cycle detected; topological order is best-effort for this region"
        );
        return;
    }

    for prereq in &node.prerequisites {
        if let Some(dep) = index.get(prereq) {
            visit(dep, index, visited, in_progress, ordered);
        }
    }

    in_progress.remove(node.id.as_str());
    visited.insert(node.id.as_str());
    ordered.push(node);
}
