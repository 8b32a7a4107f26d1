use super::definition::BlueprintGraph;
use crate::error::BlueprintConversionError;

/// A trait for custom data models that can be converted into a Keizu
/// `BlueprintGraph`.
///
/// This is the primary extension point for making Keizu format-agnostic. By
/// implementing this trait on your own payload structs, you provide a
/// translation layer that lets the resolver and provider registry operate on
/// whatever graph format your service returns.
///
/// # Example
///
/// ```rust
/// use keizu::blueprint::{BlueprintGraph, IntoBlueprint, NodeDefinition};
/// use keizu::error::BlueprintConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyNode { id: String, title: String, form: String }
/// struct MyGraphPayload { nodes: Vec<MyNode> }
///
/// // 2. Implement `IntoBlueprint` for your top-level struct.
/// impl IntoBlueprint for MyGraphPayload {
///     fn into_blueprint(self) -> Result<BlueprintGraph, BlueprintConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| NodeDefinition {
///                 id: n.id,
///                 name: n.title,
///                 form_id: n.form,
///                 prerequisites: vec![],
///                 field_mappings: Default::default(),
///             })
///             .collect();
///
///         Ok(BlueprintGraph {
///             nodes,
///             edges: vec![], // Convert your edges and forms here as well
///             forms: vec![],
///         })
///     }
/// }
/// ```
pub trait IntoBlueprint {
    /// Consumes the object and converts it into a Keizu-compatible graph.
    fn into_blueprint(self) -> Result<BlueprintGraph, BlueprintConversionError>;
}
