//! Decodes a small synthetic dump and renders it as an attributed DOT file.

use cellgraph::{
    decode_graph_with_dims, write_dot_temp_file, AdjacencyGraph, DirectedGraph, DotStyle,
};

fn main() {
    // 5x5 bordered grid, 3x3 interior. Each node points at its right-hand
    // neighbor where one exists (internal coords 6..8, 11..13, 16..18).
    let mut dump = Vec::new();
    dump.extend_from_slice(&5u32.to_ne_bytes());
    dump.extend_from_slice(&5u32.to_ne_bytes());
    let body: &[i32] = &[
        7, -1, 8, -1, -1, // row 1
        12, -1, 13, -1, -1, // row 2
        17, -1, 18, -1, -1, // row 3
    ];
    for value in body {
        dump.extend_from_slice(&value.to_ne_bytes());
    }

    let (dims, graph): (_, AdjacencyGraph) =
        decode_graph_with_dims(&dump).expect("Failed to decode dump");

    println!("Grid: {}x{} (border included)", dims.width(), dims.height());
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());

    let style = DotStyle::new("automaton")
        .node_attr("label", |node| {
            let (row, col) = dims.grid_pos(node).expect("node inside interior");
            format!("({row},{col})")
        })
        .node_attr("shape", |_| "box".to_string())
        .edge_attr("dir", |_, _| "forward".to_string());

    let path = write_dot_temp_file(&graph, &style).expect("Failed to write DOT file");
    println!("DOT output: {}", path.display());
}
