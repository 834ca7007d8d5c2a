use super::definition::JourneyDefinition;

/// Draw-ready projection of a node for a graph-rendering surface.
/// Carries everything a renderer needs without prescribing a technology.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSketch {
    pub id: String,
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Draw-ready projection of an edge connector.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSketch {
    /// Synthetic id, `e{index}` in edge order.
    pub id: String,
    pub source: String,
    pub target: String,
}

impl JourneyDefinition {
    /// Projects every node into its renderable form, in node order.
    pub fn node_sketches(&self) -> Vec<NodeSketch> {
        self.nodes
            .iter()
            .map(|node| NodeSketch {
                id: node.id.clone(),
                kind: node.node_type.clone(),
                x: node.position.x,
                y: node.position.y,
                label: node.label.clone(),
            })
            .collect()
    }

    /// Projects every edge into its renderable form, in edge order.
    pub fn edge_sketches(&self) -> Vec<EdgeSketch> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| EdgeSketch {
                id: format!("e{}", index),
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect()
    }
}
