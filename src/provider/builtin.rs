//! The built-in providers: direct-dependency fields, transitive-dependency
//! fields, and global context values.

use super::{DataSourceGroup, DataSourceItem, DataSourceProvider, GroupKind};
use crate::blueprint::{BlueprintGraph, GraphIndex, MappingDescriptor, NodeDefinition};
use crate::{extract, resolver};

/// Builds one group from a dependency node, its items drawn from the
/// dependency's flattened form fields.
fn dependency_group(
    provider_id: &str,
    kind: GroupKind,
    dependency: &NodeDefinition,
    graph: &BlueprintGraph,
) -> DataSourceGroup {
    let items = extract::fields(dependency, graph)
        .into_iter()
        .map(|field| DataSourceItem {
            mapping: MappingDescriptor::FormField {
                source_node_id: dependency.id.clone(),
                source_field_id: field.id.clone(),
            },
            field_id: field.id,
            display_name: field.display_name,
            value_type: field.value_type,
            semantic_type: field.semantic_type,
        })
        .collect();

    DataSourceGroup {
        provider_id: provider_id.to_string(),
        source_id: dependency.id.clone(),
        label: dependency.name.clone(),
        kind,
        items,
    }
}

/// Contributes one group per resolved direct dependency of the node.
pub struct DirectDependencyProvider;

impl DataSourceProvider for DirectDependencyProvider {
    fn id(&self) -> &str {
        "direct-dependencies"
    }

    fn name(&self) -> &str {
        "Direct dependency fields"
    }

    fn priority(&self) -> i32 {
        10
    }

    /// Applicable iff the node declares at least one prerequisite id, even a
    /// dangling one.
    fn is_applicable(&self, node: &NodeDefinition, _graph: &BlueprintGraph) -> bool {
        !node.prerequisites.is_empty()
    }

    fn data_sources(&self, node: &NodeDefinition, graph: &BlueprintGraph) -> Vec<DataSourceGroup> {
        let index = GraphIndex::build(&graph.nodes);
        resolver::direct_dependencies(node, &index)
            .into_iter()
            .map(|dep| dependency_group(self.id(), GroupKind::DirectDependency, dep, graph))
            .collect()
    }
}

/// Contributes one group per transitive dependency of the node.
pub struct TransitiveDependencyProvider;

impl DataSourceProvider for TransitiveDependencyProvider {
    fn id(&self) -> &str {
        "transitive-dependencies"
    }

    fn name(&self) -> &str {
        "Transitive dependency fields"
    }

    fn priority(&self) -> i32 {
        20
    }

    fn is_applicable(&self, node: &NodeDefinition, graph: &BlueprintGraph) -> bool {
        let index = GraphIndex::build(&graph.nodes);
        !resolver::transitive_dependencies(node, &index).is_empty()
    }

    fn data_sources(&self, node: &NodeDefinition, graph: &BlueprintGraph) -> Vec<DataSourceGroup> {
        let index = GraphIndex::build(&graph.nodes);
        resolver::transitive_dependencies(node, &index)
            .into_iter()
            .map(|dep| dependency_group(self.id(), GroupKind::TransitiveDependency, dep, graph))
            .collect()
    }
}

/// One named category of global context values, with a fixed field list.
#[derive(Debug, Clone)]
pub struct GlobalSource {
    pub id: String,
    pub label: String,
    pub fields: Vec<GlobalField>,
}

/// A single selectable global context value.
#[derive(Debug, Clone)]
pub struct GlobalField {
    pub id: String,
    pub display_name: String,
    pub value_type: String,
    /// Fully-qualified path for the persisted mapping (e.g.
    /// `global.action.id`).
    pub qualified_path: Option<String>,
}

impl GlobalField {
    fn new(id: &str, display_name: &str, value_type: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            value_type: value_type.to_string(),
            qualified_path: Some(path.to_string()),
        }
    }
}

/// Contributes global context values, independent of the graph.
///
/// The source catalog is instance-scoped mutable state, not a global
/// singleton: callers extend or shrink it at runtime via
/// [`GlobalContextProvider::add_source`] and
/// [`GlobalContextProvider::remove_source`] and control its lifetime by
/// holding the instance.
pub struct GlobalContextProvider {
    sources: Vec<GlobalSource>,
}

impl GlobalContextProvider {
    /// Creates a provider with the default catalog: action properties,
    /// organization properties, client user context, and system context.
    pub fn new() -> Self {
        Self {
            sources: default_catalog(),
        }
    }

    /// Creates a provider with no sources.
    pub fn empty() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a source category; a source with the same id is replaced in
    /// place, otherwise the new source is appended.
    pub fn add_source(&mut self, source: GlobalSource) {
        match self.sources.iter_mut().find(|s| s.id == source.id) {
            Some(existing) => *existing = source,
            None => self.sources.push(source),
        }
    }

    /// Removes the source category with the given id; a no-op on unknown ids.
    pub fn remove_source(&mut self, id: &str) {
        self.sources.retain(|s| s.id != id);
    }

    pub fn sources(&self) -> &[GlobalSource] {
        &self.sources
    }
}

impl Default for GlobalContextProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSourceProvider for GlobalContextProvider {
    fn id(&self) -> &str {
        "global-context"
    }

    fn name(&self) -> &str {
        "Global context values"
    }

    fn priority(&self) -> i32 {
        30
    }

    fn is_applicable(&self, _node: &NodeDefinition, _graph: &BlueprintGraph) -> bool {
        true
    }

    fn data_sources(&self, _node: &NodeDefinition, _graph: &BlueprintGraph) -> Vec<DataSourceGroup> {
        self.sources
            .iter()
            .map(|source| DataSourceGroup {
                provider_id: self.id().to_string(),
                source_id: source.id.clone(),
                label: source.label.clone(),
                kind: GroupKind::Global,
                items: source
                    .fields
                    .iter()
                    .map(|field| DataSourceItem {
                        field_id: field.id.clone(),
                        display_name: field.display_name.clone(),
                        value_type: field.value_type.clone(),
                        semantic_type: None,
                        mapping: MappingDescriptor::Global {
                            source_field_id: field.id.clone(),
                            qualified_path: field.qualified_path.clone(),
                        },
                    })
                    .collect(),
            })
            .collect()
    }
}

fn default_catalog() -> Vec<GlobalSource> {
    vec![
        GlobalSource {
            id: "action".to_string(),
            label: "Action properties".to_string(),
            fields: vec![
                GlobalField::new("id", "Action ID", "string", "global.action.id"),
                GlobalField::new("name", "Action Name", "string", "global.action.name"),
                GlobalField::new("status", "Action Status", "string", "global.action.status"),
            ],
        },
        GlobalSource {
            id: "organization".to_string(),
            label: "Organization properties".to_string(),
            fields: vec![
                GlobalField::new("id", "Organization ID", "string", "global.organization.id"),
                GlobalField::new(
                    "name",
                    "Organization Name",
                    "string",
                    "global.organization.name",
                ),
            ],
        },
        GlobalSource {
            id: "client".to_string(),
            label: "Client user context".to_string(),
            fields: vec![
                GlobalField::new("user_id", "User ID", "string", "global.client.user_id"),
                GlobalField::new("email", "User Email", "string", "global.client.email"),
                GlobalField::new("name", "User Name", "string", "global.client.name"),
            ],
        },
        GlobalSource {
            id: "system".to_string(),
            label: "System context".to_string(),
            fields: vec![
                GlobalField::new(
                    "environment",
                    "Environment",
                    "string",
                    "global.system.environment",
                ),
                GlobalField::new(
                    "timestamp",
                    "Current Timestamp",
                    "datetime",
                    "global.system.timestamp",
                ),
            ],
        },
    ]
}
