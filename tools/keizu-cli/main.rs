use clap::Parser;
use keizu::blueprint::{
    BlueprintGraph, EdgeDefinition, FieldDefinition, FormDefinition, GraphIndex, IntoBlueprint,
    MappingDescriptor, NodeDefinition,
};
use keizu::error::BlueprintConversionError;
use keizu::prelude::ProviderRegistry;
use keizu::resolver;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the blueprint service's camelCase payload and are only
// used here for conversion.

#[derive(Deserialize)]
struct RawGraphDocument {
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
    #[serde(default)]
    forms: Vec<RawForm>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    name: String,
    #[serde(default, alias = "prerequisiteIds")]
    prerequisites: Vec<String>,
    #[serde(alias = "formId")]
    form_id: String,
    #[serde(default, alias = "fieldMappings")]
    field_mappings: ahash::AHashMap<String, MappingDescriptor>,
}

#[derive(Deserialize)]
struct RawEdge {
    source: String,
    target: String,
}

#[derive(Deserialize)]
struct RawForm {
    id: String,
    name: String,
    #[serde(default, alias = "fieldSchema")]
    fields: ahash::AHashMap<String, RawField>,
}

#[derive(Deserialize)]
struct RawField {
    #[serde(alias = "type")]
    value_type: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "avantosType", alias = "semanticType")]
    semantic_type: Option<String>,
}

// --- Converter Implementation ---
// Conversion from the raw payload model to Keizu's canonical BlueprintGraph.

impl IntoBlueprint for RawGraphDocument {
    fn into_blueprint(self) -> Result<BlueprintGraph, BlueprintConversionError> {
        if self.nodes.is_empty() {
            return Err(BlueprintConversionError::ValidationError(
                "graph document contains no nodes".to_string(),
            ));
        }

        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| NodeDefinition {
                id: raw.id,
                name: raw.name,
                prerequisites: raw.prerequisites,
                form_id: raw.form_id,
                field_mappings: raw.field_mappings,
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|raw| EdgeDefinition {
                source: raw.source,
                target: raw.target,
            })
            .collect();

        let forms = self
            .forms
            .into_iter()
            .map(|raw| FormDefinition {
                id: raw.id,
                name: raw.name,
                fields: raw
                    .fields
                    .into_iter()
                    .map(|(id, field)| {
                        (
                            id,
                            FieldDefinition {
                                value_type: field.value_type,
                                title: field.title,
                                semantic_type: field.semantic_type,
                            },
                        )
                    })
                    .collect(),
            })
            .collect();

        Ok(BlueprintGraph {
            nodes,
            edges,
            forms,
        })
    }
}

/// A dependency-resolution and data-source aggregation CLI for form
/// blueprint graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph document JSON file
    graph_path: String,

    /// Restrict the report to a single node id
    #[arg(short, long)]
    node: Option<String>,

    /// Also print the aggregated data-source groups per node
    #[arg(short, long)]
    sources: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keizu=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading & Conversion ---
    let load_start = Instant::now();
    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });
    let raw: RawGraphDocument = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));
    let graph = raw
        .into_blueprint()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert graph document: {}", e)));
    let load_duration = load_start.elapsed();

    println!(
        "Loaded graph: {} nodes, {} forms in {:?}",
        graph.nodes.len(),
        graph.forms.len(),
        load_duration
    );

    // --- 2. Topological Order ---
    let resolve_start = Instant::now();
    let order = resolver::topological_sort(&graph.nodes);
    println!("\nTopological order:");
    for (position, node) in order.iter().enumerate() {
        println!("  {:>3}. {} ({})", position + 1, node.name, node.id);
    }

    // --- 3. Per-Node Classification ---
    let index = GraphIndex::build(&graph.nodes);
    let selected: Vec<&NodeDefinition> = match &cli.node {
        Some(id) => match graph.node(id) {
            Some(node) => vec![node],
            None => exit_with_error(&format!("Node '{}' not found in graph", id)),
        },
        None => graph.nodes.iter().collect(),
    };

    let registry = ProviderRegistry::with_defaults();

    for node in selected {
        let deps = resolver::all_dependencies(node, &index);
        println!("\n{} ({})", node.name, node.id);
        println!(
            "  direct:     [{}]",
            deps.direct
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "  transitive: [{}]",
            deps.transitive
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        if cli.sources {
            for group in registry.all_data_sources(node, &graph) {
                println!(
                    "  [{:?}] {} ({} items)",
                    group.kind,
                    group.label,
                    group.items.len()
                );
                for item in &group.items {
                    println!("      - {} ({})", item.display_name, item.value_type);
                }
            }
        }
    }
    let resolve_duration = resolve_start.elapsed();

    println!("\n--- Performance Summary ---");
    println!("File Loading:  {:?}", load_duration);
    println!("Resolution:    {:?}", resolve_duration);
    println!("Total:         {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
