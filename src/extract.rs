//! Flattening of a node's declared form schema into a field list.

use itertools::Itertools;
use serde::Serialize;

use crate::blueprint::{BlueprintGraph, NodeDefinition};

/// One entry of a node's flattened field schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedField {
    pub id: String,
    /// The declared title, falling back to the field id.
    pub display_name: String,
    pub value_type: String,
    pub semantic_type: Option<String>,
}

/// Resolves the node's form definition and flattens its field schema.
///
/// A node whose `form_id` does not resolve yields an empty list, not an
/// error. The schema map is unordered, so the result is sorted by field id
/// to keep downstream provider output deterministic.
pub fn fields(node: &NodeDefinition, graph: &BlueprintGraph) -> Vec<ExtractedField> {
    let Some(form) = graph.form(&node.form_id) else {
        return Vec::new();
    };

    form.fields
        .iter()
        .map(|(id, field)| ExtractedField {
            id: id.clone(),
            display_name: field.title.clone().unwrap_or_else(|| id.clone()),
            value_type: field.value_type.clone(),
            semantic_type: field.semantic_type.clone(),
        })
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .collect()
}
