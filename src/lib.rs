//! # Keizu - Blueprint Graph Dependency Resolution Engine
//!
//! **Keizu** resolves dependencies in a directed acyclic graph of form
//! definitions and aggregates, per node, the set of data sources that could
//! fill its fields: fields of upstream forms (direct or transitive
//! dependencies) and named global context values.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical in-memory model
//! of a "blueprint graph." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your service's graph payload (e.g. from JSON)
//!     into your own Rust structs, or use `BlueprintGraph::from_file` for the
//!     canonical format.
//! 2.  **Convert to Keizu's Model**: Implement the `IntoBlueprint` trait for
//!     your structs to translate them into a `BlueprintGraph`.
//! 3.  **Resolve**: Use the `resolver` module to classify every node's
//!     dependencies (direct, transitive, ancestors, topological order).
//! 4.  **Aggregate**: Build a `ProviderRegistry`, register providers, and ask
//!     it for all data-source groups applicable to a selected node.
//!
//! ## Quick Start
//!
//! ```rust
//! use keizu::prelude::*;
//! use ahash::AHashMap;
//!
//! // A two-node chain: "intake" feeds "review".
//! let graph = BlueprintGraph {
//!     nodes: vec![
//!         NodeDefinition {
//!             id: "intake".to_string(),
//!             name: "Intake Form".to_string(),
//!             prerequisites: vec![],
//!             form_id: "f-intake".to_string(),
//!             field_mappings: AHashMap::new(),
//!         },
//!         NodeDefinition {
//!             id: "review".to_string(),
//!             name: "Review Form".to_string(),
//!             prerequisites: vec!["intake".to_string()],
//!             form_id: "f-review".to_string(),
//!             field_mappings: AHashMap::new(),
//!         },
//!     ],
//!     edges: vec![],
//!     forms: vec![FormDefinition {
//!         id: "f-intake".to_string(),
//!         name: "Intake".to_string(),
//!         fields: AHashMap::from_iter([(
//!             "email".to_string(),
//!             FieldDefinition {
//!                 value_type: "string".to_string(),
//!                 title: Some("Email".to_string()),
//!                 semantic_type: None,
//!             },
//!         )]),
//!     }],
//! };
//!
//! // Classify the dependencies of "review".
//! let index = GraphIndex::build(&graph.nodes);
//! let review = graph.node("review").unwrap();
//! let deps = keizu::resolver::all_dependencies(review, &index);
//! assert_eq!(deps.direct.len(), 1);
//! assert!(deps.transitive.is_empty());
//!
//! // Aggregate every data source that could fill a field of "review".
//! let registry = ProviderRegistry::with_defaults();
//! let groups = registry.all_data_sources(review, &graph);
//! assert!(groups.iter().any(|g| g.source_id == "intake"));
//! ```

pub mod blueprint;
pub mod error;
pub mod extract;
pub mod prelude;
pub mod provider;
pub mod resolver;

pub use blueprint::{BlueprintGraph, GraphIndex, NodeDefinition};
pub use provider::ProviderRegistry;
