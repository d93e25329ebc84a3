//! Graphviz DOT serialization of a subgraph

use super::neighborhood::Subgraph;

/// Render `subgraph` as an undirected DOT document.
///
/// Zero weights carry no label; other weights become edge labels.
pub fn to_dot(subgraph: &Subgraph) -> String {
    let mut dot = String::from("graph Network {\n");
    dot.push_str(&format!(
        "  label=\"Network of {} (depth {})\";\n",
        escape(&subgraph.focal),
        subgraph.depth
    ));

    for node in &subgraph.nodes {
        dot.push_str(&format!("  \"{}\";\n", escape(node)));
    }

    for edge in &subgraph.edges {
        if edge.weight == 0 {
            dot.push_str(&format!(
                "  \"{}\" -- \"{}\";\n",
                escape(&edge.from),
                escape(&edge.to)
            ));
        } else {
            dot.push_str(&format!(
                "  \"{}\" -- \"{}\" [label=\"{}\"];\n",
                escape(&edge.from),
                escape(&edge.to),
                edge.weight
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Escape a string for use inside a quoted DOT identifier
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
