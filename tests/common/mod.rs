#![allow(dead_code)]

use asexp::sexp::Sexp;
use graph_io_gml::parse_gml;
use petgraph::Directed;
use petgraph::Graph as PetGraph;
use std::fs::File;
use std::io::Read;
use wl_graph_kernel::graph::{GraphKind, OwnedGraph};

pub const SMALL_VALUE: f64 = 1e-5;

pub fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ignore_weight(_w: Option<&Sexp>) -> Option<()> {
    // the kernel is unlabeled
    Some(())
}

fn load_petgraph(graph_file: &str) -> PetGraph<(), (), Directed> {
    let graph_str = {
        let mut graph_file = File::open(graph_file).unwrap();
        let mut graph_str = String::new();
        let _ = graph_file.read_to_string(&mut graph_str).unwrap();
        graph_str
    };

    parse_gml(&graph_str, &ignore_weight, &ignore_weight).unwrap()
}

pub fn load_graph(graph_file: &str) -> OwnedGraph {
    OwnedGraph::from_petgraph(&load_petgraph(graph_file))
}

pub fn load_undirected_graph(graph_file: &str) -> OwnedGraph {
    let graph = load_petgraph(graph_file).into_edge_type::<petgraph::Undirected>();
    OwnedGraph::from_petgraph(&graph)
}

pub fn directed(edges: &[(usize, usize)]) -> OwnedGraph {
    OwnedGraph::from_edges(GraphKind::Directed, edges.iter().cloned())
}

pub fn undirected(edges: &[(usize, usize)]) -> OwnedGraph {
    OwnedGraph::from_edges(GraphKind::Undirected, edges.iter().cloned())
}

pub fn assert_in_range(score: f64) {
    assert!(
        -SMALL_VALUE <= score && score <= 1.0 + SMALL_VALUE,
        "score {} out of range",
        score
    );
}
