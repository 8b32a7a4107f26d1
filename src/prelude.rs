//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the keizu crate.
//! Import this module to get access to the core functionality without having
//! to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keizu::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a graph snapshot and aggregate data sources for one node.
//! let graph = BlueprintGraph::from_file("path/to/graph.json")?;
//! let registry = ProviderRegistry::with_defaults();
//!
//! if let Some(node) = graph.node("review") {
//!     for group in registry.all_data_sources(node, &graph) {
//!         println!("[{}] {} ({} items)", group.provider_id, group.label, group.items.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::blueprint::{
    BlueprintGraph, EdgeDefinition, FieldDefinition, FormDefinition, GraphIndex, IntoBlueprint,
    MappingDescriptor, NodeDefinition,
};

// Dependency resolution
pub use crate::resolver::DependencyClassification;

// Field extraction
pub use crate::extract::ExtractedField;

// Providers and aggregation
pub use crate::provider::{
    DataSourceGroup, DataSourceItem, DataSourceProvider, DirectDependencyProvider,
    GlobalContextProvider, GlobalField, GlobalSource, GroupKind, ProviderRegistry,
    TransitiveDependencyProvider,
};

// Error types
pub use crate::error::{BlueprintConversionError, DataError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
