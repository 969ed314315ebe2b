//! Trivial Graph Format encoding.

use std::io::Write;

use crate::error::ExportError;
use crate::model::DirectedGraph;

/// Writes a graph in Trivial Graph Format.
///
/// One `<id> v_<id>` line per vertex with 1-based ids in ascending order, a
/// single `#` separator line, then one `<src> <dst>` line per edge (also
/// 1-based) in the graph's iteration order. The 1-based ids are a
/// convention of the text format only; graph addressing stays 0-based.
///
/// Output is byte-identical across calls for the same graph value.
pub fn write_tgf<G: DirectedGraph, W: Write>(graph: &G, out: &mut W) -> Result<(), ExportError> {
    for id in 1..=graph.node_count() {
        writeln!(out, "{id} v_{id}")?;
    }
    writeln!(out, "#")?;
    for (src, dst) in graph.edges() {
        writeln!(out, "{} {}", src + 1, dst + 1)?;
    }
    Ok(())
}

/// Encodes a graph as an in-memory TGF string.
pub fn tgf_string<G: DirectedGraph>(graph: &G) -> String {
    let mut buf = Vec::new();
    // Writes to a Vec cannot fail, and the output is ASCII.
    write_tgf(graph, &mut buf).expect("in-memory write");
    String::from_utf8(buf).expect("TGF output is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_graph;
    use crate::model::{AdjacencyGraph, EdgeListGraph};

    fn chain() -> EdgeListGraph {
        let mut graph = EdgeListGraph::new();
        for _ in 0..3 {
            graph.add_node();
        }
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph
    }

    #[test]
    fn test_vertex_section_then_edges() {
        assert_eq!(tgf_string(&chain()), "1 v_1\n2 v_2\n3 v_3\n#\n1 2\n2 3\n");
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(tgf_string(&EdgeListGraph::new()), "#\n");
    }

    #[test]
    fn test_re_encode_is_byte_identical() {
        let graph = chain();
        assert_eq!(tgf_string(&graph), tgf_string(&graph));
    }

    #[test]
    fn test_decoded_4x4_no_edges() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&4u32.to_ne_bytes());
        bytes.extend_from_slice(&4u32.to_ne_bytes());
        for _ in 0..4 {
            bytes.extend_from_slice(&(-1i32).to_ne_bytes());
        }
        let graph: AdjacencyGraph = decode_graph(&bytes).unwrap();
        assert_eq!(tgf_string(&graph), "1 v_1\n2 v_2\n3 v_3\n4 v_4\n#\n");
    }

    #[test]
    fn test_write_to_stream() {
        let mut out = Vec::new();
        write_tgf(&chain(), &mut out).unwrap();
        assert_eq!(out, b"1 v_1\n2 v_2\n3 v_3\n#\n1 2\n2 3\n");
    }
}
