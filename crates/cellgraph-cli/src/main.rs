//! Inspects a grid adjacency dump and exports it as TGF or DOT.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::exit;

use cellgraph::{
    decode_graph_with_dims, write_dot_file, write_dot_temp_file, write_tgf, AdjacencyGraph,
    DirectedGraph, DotStyle, ExportError,
};

fn usage() -> ! {
    eprintln!("usage: cellgraph <dump-file> [tgf|dot] [output-file]");
    eprintln!();
    eprintln!("With no format, prints a summary of the decoded graph.");
    eprintln!("tgf writes to the output file or stdout; dot writes to the");
    eprintln!("output file or a fresh temporary file.");
    exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, format, output) = match args.as_slice() {
        [path] => (path, None, None),
        [path, format] => (path, Some(format.as_str()), None),
        [path, format, output] => (path, Some(format.as_str()), Some(output)),
        _ => usage(),
    };

    let data = fs::read(path).expect("Failed to read dump file");

    let (dims, graph): (_, AdjacencyGraph) = match decode_graph_with_dims(&data) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("decode failed: {e}");
            exit(1);
        }
    };

    println!("Grid:  {}x{} (border included)", dims.width(), dims.height());
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());

    let result = match format {
        None => Ok(()),
        Some("tgf") => export_tgf(&graph, output.map(Path::new)),
        Some("dot") => {
            let style = DotStyle::new("automaton").node_attr("label", |node| {
                let (row, col) = dims.grid_pos(node).expect("decoded node inside interior");
                format!("({row},{col})")
            });
            match output {
                Some(out) => write_dot_file(&graph, &style, Path::new(out)),
                None => write_dot_temp_file(&graph, &style).map(|path| {
                    println!("DOT output: {}", path.display());
                }),
            }
        }
        Some(other) => {
            eprintln!("unknown format: {other}");
            usage();
        }
    };

    if let Err(e) = result {
        eprintln!("export failed: {e}");
        exit(1);
    }
}

fn export_tgf(graph: &AdjacencyGraph, output: Option<&Path>) -> Result<(), ExportError> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            write_tgf(graph, &mut file)?;
            file.flush()?;
            Ok(())
        }
        None => write_tgf(graph, &mut std::io::stdout().lock()),
    }
}
