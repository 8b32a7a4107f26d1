//! Data-source providers and their aggregation registry.
//!
//! A provider is a pluggable strategy that contributes candidate data
//! sources for a given node/graph context. The registry composes all
//! applicable providers in priority order into one flat list of groups.

use serde::Serialize;

use crate::blueprint::{BlueprintGraph, MappingDescriptor, NodeDefinition};

pub mod builtin;
mod registry;

pub use builtin::{
    DirectDependencyProvider, GlobalContextProvider, GlobalField, GlobalSource,
    TransitiveDependencyProvider,
};
pub use registry::ProviderRegistry;

/// Defines the contract for contributing data-source groups for a node.
///
/// A provider exposes a stable identifier (the registry upserts by it), a
/// display name, and a numeric priority (lower runs earlier). Applicability
/// is decided per call against the node and graph snapshot handed in;
/// providers must not hold references that outlive a call.
pub trait DataSourceProvider: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn priority(&self) -> i32;
    fn is_applicable(&self, node: &NodeDefinition, graph: &BlueprintGraph) -> bool;
    fn data_sources(&self, node: &NodeDefinition, graph: &BlueprintGraph) -> Vec<DataSourceGroup>;
}

/// Distinguishes where a group's items originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKind {
    DirectDependency,
    TransitiveDependency,
    Global,
}

/// A named bucket of selectable data items from one originating entity:
/// one dependency node, or one global category. Ephemeral view data,
/// recomputed on every query and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceGroup {
    /// Id of the provider that contributed this group.
    pub provider_id: String,
    /// Id of the originating entity (dependency node id or global category id).
    pub source_id: String,
    pub label: String,
    pub kind: GroupKind,
    pub items: Vec<DataSourceItem>,
}

/// One selectable (field, source) pair, carrying a ready-made mapping
/// descriptor for the caller to persist on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceItem {
    pub field_id: String,
    pub display_name: String,
    pub value_type: String,
    pub semantic_type: Option<String>,
    pub mapping: MappingDescriptor,
}
