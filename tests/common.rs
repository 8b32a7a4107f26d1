//! Common test utilities for building blueprint graphs and stub providers.
use ahash::AHashMap;
use keizu::prelude::*;

/// Builds a node with the given prerequisites, no field mappings.
#[allow(dead_code)]
pub fn node(id: &str, name: &str, prerequisites: &[&str], form_id: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        form_id: form_id.to_string(),
        field_mappings: AHashMap::new(),
    }
}

/// Builds a form with `(field_id, value_type, optional title)` entries.
#[allow(dead_code)]
pub fn form(id: &str, name: &str, fields: &[(&str, &str, Option<&str>)]) -> FormDefinition {
    FormDefinition {
        id: id.to_string(),
        name: name.to_string(),
        fields: fields
            .iter()
            .map(|(field_id, value_type, title)| {
                (
                    field_id.to_string(),
                    FieldDefinition {
                        value_type: value_type.to_string(),
                        title: title.map(|t| t.to_string()),
                        semantic_type: None,
                    },
                )
            })
            .collect(),
    }
}

/// A linear chain: A <- B <- C, all sharing one form with two fields.
#[allow(dead_code)]
pub fn chain_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            node("A", "Form A", &[], "f-shared"),
            node("B", "Form B", &["A"], "f-shared"),
            node("C", "Form C", &["B"], "f-shared"),
        ],
        edges: vec![],
        forms: vec![form(
            "f-shared",
            "Shared",
            &[
                ("email", "string", Some("Email")),
                ("name", "string", None),
            ],
        )],
    }
}

/// A diamond: A <- B, A <- C, {B, C} <- D.
#[allow(dead_code)]
pub fn diamond_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            node("A", "Form A", &[], "f-shared"),
            node("B", "Form B", &["A"], "f-shared"),
            node("C", "Form C", &["A"], "f-shared"),
            node("D", "Form D", &["B", "C"], "f-shared"),
        ],
        edges: vec![],
        forms: vec![form("f-shared", "Shared", &[("email", "string", None)])],
    }
}

/// A two-node cycle X <-> Y plus a node Z depending on X.
#[allow(dead_code)]
pub fn cyclic_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            node("X", "Form X", &["Y"], "f-shared"),
            node("Y", "Form Y", &["X"], "f-shared"),
            node("Z", "Form Z", &["X"], "f-shared"),
        ],
        edges: vec![],
        forms: vec![form("f-shared", "Shared", &[("email", "string", None)])],
    }
}

/// A provider with fixed applicability and canned groups, for registry tests.
#[allow(dead_code)]
pub struct StubProvider {
    pub id: String,
    pub priority: i32,
    pub applicable: bool,
    pub groups: Vec<DataSourceGroup>,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn new(id: &str, priority: i32, applicable: bool) -> Self {
        Self {
            id: id.to_string(),
            priority,
            applicable,
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, source_id: &str) -> Self {
        self.groups.push(DataSourceGroup {
            provider_id: self.id.clone(),
            source_id: source_id.to_string(),
            label: source_id.to_string(),
            kind: GroupKind::Global,
            items: vec![],
        });
        self
    }
}

impl DataSourceProvider for StubProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Stub provider"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn is_applicable(&self, _node: &NodeDefinition, _graph: &BlueprintGraph) -> bool {
        self.applicable
    }

    fn data_sources(&self, _node: &NodeDefinition, _graph: &BlueprintGraph) -> Vec<DataSourceGroup> {
        self.groups.clone()
    }
}
