use ahash::AHashMap;

use super::definition::NodeDefinition;

/// An id -> node lookup table borrowed from a node collection.
///
/// Every resolver operation (except `topological_sort`, which builds its own)
/// takes one of these so traversal lookups stay O(1). Duplicate ids in the
/// input are not guarded: the last occurrence wins.
#[derive(Debug, Clone)]
pub struct GraphIndex<'a> {
    nodes: AHashMap<&'a str, &'a NodeDefinition>,
}

impl<'a> GraphIndex<'a> {
    pub fn build(nodes: &'a [NodeDefinition]) -> Self {
        Self {
            nodes: nodes.iter().map(|n| (n.id.as_str(), n)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a NodeDefinition> {
        self.nodes.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
