use serde::{Serialize, Serializer};

use crate::core::NodeId;

const INDENT: &str = "  ";

/// Escape the characters that would break an HTML-like Graphviz label
pub fn escape_html(s: &str) -> String {
    s.replace('>', "&gt;").replace('<', "&lt;")
}

fn serialize_escaped<S: Serializer>(label: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&escape_html(label))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    /// Raw label; lines are separated by `\n`
    #[serde(serialize_with = "serialize_escaped")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub parent: String,
    pub child: String,
}

/// Nodes and edges of one walk, in the order the walk produced them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: NodeId, label: impl Into<String>) {
        self.nodes.push(GraphNode {
            id: id.to_string(),
            label: label.into(),
        });
    }

    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        self.edges.push(GraphEdge {
            parent: parent.to_string(),
            child: child.to_string(),
        });
    }

    pub fn label_of(&self, id: NodeId) -> Option<&str> {
        let id = id.to_string();
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.label.as_str())
    }

    pub fn children_of(&self, id: NodeId) -> Vec<&str> {
        let id = id.to_string();
        self.edges
            .iter()
            .filter(|edge| edge.parent == id)
            .map(|edge| edge.child.as_str())
            .collect()
    }

    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        for node in &self.nodes {
            let label = escape_html(&node.label).replace('\n', "<br/>");
            out.push_str(&format!("{}{} [label=<{}>];\n", INDENT, node.id, label));
        }
        for edge in &self.edges {
            out.push_str(&format!("{}{} -> {};\n", INDENT, edge.parent, edge.child));
        }
        out.push('}');
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreArena;

    fn two_nodes() -> (GraphDescription, NodeId, NodeId) {
        let mut arena = CoreArena::new();
        let parent = arena.var("f");
        let child = arena.var("x");
        let mut graph = GraphDescription::new();
        graph.add_node(parent, "@\n(N -> N)");
        graph.add_edge(parent, child);
        graph.add_node(child, "x\nN");
        (graph, parent, child)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("(N -> N)"), "(N -&gt; N)");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_dot_output() {
        let (graph, _, _) = two_nodes();
        assert_eq!(
            graph.to_dot(),
            "digraph {\n  n0 [label=<@<br/>(N -&gt; N)>];\n  n1 [label=<x<br/>N>];\n  n0 -> n1;\n}"
        );
    }

    #[test]
    fn test_json_labels_are_escaped() {
        let (graph, _, _) = two_nodes();
        let json: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(json["nodes"][0]["label"], "@\n(N -&gt; N)");
        assert_eq!(json["edges"][0]["parent"], "n0");
        assert_eq!(json["edges"][0]["child"], "n1");
    }

    #[test]
    fn test_lookup_helpers() {
        let (graph, parent, child) = two_nodes();
        assert_eq!(graph.label_of(child), Some("x\nN"));
        assert_eq!(graph.children_of(parent), vec!["n1"]);
    }
}
