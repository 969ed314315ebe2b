//! Attributed DOT encoding for graph visualization tools.
//!
//! The encoder does not interpret the graph: every vertex and every edge is
//! emitted exactly once, annotated with whatever attributes the caller
//! installed in a [`DotStyle`]. The attribute vocabulary is the caller's.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::model::{DirectedGraph, NodeId};

type NodeAttrFn<'a> = Box<dyn Fn(NodeId) -> String + 'a>;
type EdgeAttrFn<'a> = Box<dyn Fn(NodeId, NodeId) -> String + 'a>;

/// Named per-vertex and per-edge attribute providers for DOT output.
///
/// Attributes are emitted in the order they were added.
///
/// # Example
///
/// ```rust
/// use cellgraph::{DirectedGraph, DotStyle, EdgeListGraph, write_dot};
///
/// let mut graph = EdgeListGraph::new();
/// graph.add_node();
/// graph.add_node();
/// graph.add_edge(0, 1);
///
/// let style = DotStyle::new("cells").node_attr("label", |n| format!("cell {n}"));
/// let mut out = Vec::new();
/// write_dot(&graph, &style, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("n0 [label=\"cell 0\"];"));
/// assert!(text.contains("n0 -> n1;"));
/// ```
pub struct DotStyle<'a> {
    name: String,
    node_attrs: Vec<(String, NodeAttrFn<'a>)>,
    edge_attrs: Vec<(String, EdgeAttrFn<'a>)>,
}

impl<'a> DotStyle<'a> {
    /// Creates a style for a digraph with the given name.
    ///
    /// The name is written as-is and must be a valid DOT identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_attrs: Vec::new(),
            edge_attrs: Vec::new(),
        }
    }

    /// Adds a per-vertex attribute.
    pub fn node_attr(
        mut self,
        name: impl Into<String>,
        provider: impl Fn(NodeId) -> String + 'a,
    ) -> Self {
        self.node_attrs.push((name.into(), Box::new(provider)));
        self
    }

    /// Adds a per-edge attribute. The provider receives `(source, target)`.
    pub fn edge_attr(
        mut self,
        name: impl Into<String>,
        provider: impl Fn(NodeId, NodeId) -> String + 'a,
    ) -> Self {
        self.edge_attrs.push((name.into(), Box::new(provider)));
        self
    }
}

/// Writes a graph as an attributed DOT digraph.
///
/// Vertices are emitted as `n<i>` statements in index order, then edges as
/// `n<src> -> n<dst>` statements in the graph's iteration order. Attribute
/// values are escaped for DOT double-quoted strings.
pub fn write_dot<G: DirectedGraph, W: Write>(
    graph: &G,
    style: &DotStyle<'_>,
    out: &mut W,
) -> Result<(), ExportError> {
    writeln!(out, "digraph {} {{", style.name)?;
    for node in 0..graph.node_count() {
        write!(out, "    n{node}")?;
        write_attr_list(out, style.node_attrs.iter().map(|(name, f)| (name, f(node))))?;
        writeln!(out, ";")?;
    }
    for (src, dst) in graph.edges() {
        write!(out, "    n{src} -> n{dst}")?;
        write_attr_list(out, style.edge_attrs.iter().map(|(name, f)| (name, f(src, dst))))?;
        writeln!(out, ";")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Writes DOT output to the named file.
pub fn write_dot_file<G: DirectedGraph>(
    graph: &G,
    style: &DotStyle<'_>,
    path: &Path,
) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(graph, style, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes DOT output to a fresh, collision-free temporary file and returns
/// its path.
///
/// The file is created atomically with a unique name, so concurrent calls
/// never race on a shared path. It is persisted (not deleted on drop);
/// removal is the caller's business.
pub fn write_dot_temp_file<G: DirectedGraph>(
    graph: &G,
    style: &DotStyle<'_>,
) -> Result<PathBuf, ExportError> {
    let mut file = tempfile::Builder::new()
        .prefix("cellgraph-")
        .suffix(".dot")
        .tempfile()?;
    write_dot(graph, style, file.as_file_mut())?;
    let (_, path) = file.keep().map_err(|e| ExportError::Io(e.error))?;
    Ok(path)
}

fn write_attr_list<'n, W: Write>(
    out: &mut W,
    attrs: impl Iterator<Item = (&'n String, String)>,
) -> Result<(), ExportError> {
    let mut first = true;
    for (name, value) in attrs {
        if first {
            write!(out, " [")?;
        } else {
            write!(out, ", ")?;
        }
        write!(out, "{}=\"{}\"", name, escape(&value))?;
        first = false;
    }
    if !first {
        write!(out, "]")?;
    }
    Ok(())
}

/// Escapes a value for a DOT double-quoted string.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeListGraph;

    fn diamond() -> EdgeListGraph {
        let mut graph = EdgeListGraph::new();
        for _ in 0..4 {
            graph.add_node();
        }
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);
        graph
    }

    fn dot_string(graph: &EdgeListGraph, style: &DotStyle<'_>) -> String {
        let mut out = Vec::new();
        write_dot(graph, style, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bare_style() {
        let text = dot_string(&diamond(), &DotStyle::new("g"));
        assert_eq!(
            text,
            "digraph g {\n    n0;\n    n1;\n    n2;\n    n3;\n\
             \x20   n0 -> n1;\n    n0 -> n2;\n    n1 -> n3;\n    n2 -> n3;\n}\n"
        );
    }

    #[test]
    fn test_every_vertex_and_edge_once() {
        let graph = diamond();
        let text = dot_string(&graph, &DotStyle::new("g"));
        for node in 0..4 {
            assert_eq!(text.matches(&format!("    n{node};")).count(), 1);
        }
        assert_eq!(text.matches(" -> ").count(), graph.edge_count());
    }

    #[test]
    fn test_node_and_edge_attributes() {
        let style = DotStyle::new("g")
            .node_attr("label", |n| format!("v{n}"))
            .node_attr("shape", |_| "box".to_string())
            .edge_attr("weight", |src, dst| format!("{}", src + dst));
        let text = dot_string(&diamond(), &style);
        assert!(text.contains("n0 [label=\"v0\", shape=\"box\"];"));
        assert!(text.contains("n0 -> n1 [weight=\"1\"];"));
        assert!(text.contains("n2 -> n3 [weight=\"5\"];"));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let style = DotStyle::new("g").node_attr("label", |_| "say \"hi\" \\ bye".to_string());
        let mut graph = EdgeListGraph::new();
        graph.add_node();
        let text = dot_string(&graph, &style);
        assert!(text.contains(r#"n0 [label="say \"hi\" \\ bye"];"#));
    }

    #[test]
    fn test_temp_files_are_unique_and_complete() {
        let graph = diamond();
        let style = DotStyle::new("g");
        let first = write_dot_temp_file(&graph, &style).unwrap();
        let second = write_dot_temp_file(&graph, &style).unwrap();
        assert_ne!(first, second);

        for path in [&first, &second] {
            let text = std::fs::read_to_string(path).unwrap();
            assert!(text.starts_with("digraph g {"));
            assert!(text.ends_with("}\n"));
            std::fs::remove_file(path).unwrap();
        }
    }
}
