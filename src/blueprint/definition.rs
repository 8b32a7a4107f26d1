use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a form blueprint graph.
/// This is the target structure for any custom data model conversion.
///
/// The graph is treated as a value: every resolution call takes it (or a node
/// from it) as an explicit argument, and mapping edits produce a new graph
/// rather than mutating in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlueprintGraph {
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
    #[serde(default)]
    pub forms: Vec<FormDefinition>,
}

/// Defines a single form instance (a node) in the blueprint graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    pub name: String,
    /// Ordered direct-dependency ids. Ids that do not resolve to a node in
    /// the same graph are tolerated and skipped by every resolver operation.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(alias = "formId")]
    pub form_id: String,
    /// Target field id -> where its value should be sourced from.
    #[serde(default, alias = "fieldMappings")]
    pub field_mappings: AHashMap<String, MappingDescriptor>,
}

/// A derived source -> target relation mirroring the prerequisite lists.
/// Kept for external consumers (e.g. visualization); the resolution
/// algorithms operate solely on each node's own prerequisite list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub source: String,
    pub target: String,
}

/// A reusable form referenced by one or more nodes via `form_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: AHashMap<String, FieldDefinition>,
}

/// The declared schema of a single form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(alias = "valueType")]
    pub value_type: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Display-only hint (e.g. "short-text", "email"); never affects behavior.
    #[serde(default, alias = "semanticType")]
    pub semantic_type: Option<String>,
}

/// The persisted description of where a target field's value comes from:
/// an upstream form's field, or a named global context value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MappingDescriptor {
    #[serde(rename_all = "camelCase")]
    FormField {
        source_node_id: String,
        source_field_id: String,
    },
    #[serde(rename_all = "camelCase")]
    Global {
        source_field_id: String,
        #[serde(default)]
        qualified_path: Option<String>,
    },
}

impl BlueprintGraph {
    /// Linear lookup of a node by id, for callers that do not hold a
    /// `GraphIndex`.
    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Linear lookup of a form definition by id.
    pub fn form(&self, id: &str) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// Returns a copy of the graph with one node's mapping table updated.
    /// An unknown `node_id` yields an unchanged copy.
    pub fn with_field_mapping(
        &self,
        node_id: &str,
        field_id: &str,
        mapping: MappingDescriptor,
    ) -> BlueprintGraph {
        let mut graph = self.clone();
        if let Some(node) = graph.nodes.iter_mut().find(|n| n.id == node_id) {
            node.field_mappings.insert(field_id.to_string(), mapping);
        }
        graph
    }

    /// Returns a copy of the graph with one node's mapping for `field_id`
    /// cleared. Unknown node or field ids yield an unchanged copy.
    pub fn without_field_mapping(&self, node_id: &str, field_id: &str) -> BlueprintGraph {
        let mut graph = self.clone();
        if let Some(node) = graph.nodes.iter_mut().find(|n| n.id == node_id) {
            node.field_mappings.remove(field_id);
        }
        graph
    }
}
