use lbox_graph::{Csr, GraphBase, GraphProperties};
use proptest::prelude::*;

fn edges() -> impl Strategy<Value = (usize, Vec<(usize, usize, u16)>)> {
    (1..64usize).prop_flat_map(|n| {
        (Just(n), proptest::collection::vec((0..n, 0..n, any::<u16>()), 0..256))
    })
}

proptest! {
    #[test]
    fn every_edge_leaves_its_source((n, list) in edges(), directed in any::<bool>()) {
        let props = if directed { GraphProperties::directed() } else { GraphProperties::undirected() };
        let graph = Csr::from_edges(n, list, props.weighted()).unwrap();

        let total: usize = (0..n).map(|v| graph.neighbor_list_length(v)).sum();
        prop_assert_eq!(total, graph.number_of_edges());

        let mut edge = 0;
        for vertex in 0..n {
            for _ in 0..graph.neighbor_list_length(vertex) {
                prop_assert_eq!(graph.source_vertex(edge), vertex);
                edge += 1;
            }
        }
    }

    #[test]
    fn undirected_graphs_are_symmetric((n, list) in edges()) {
        let graph = Csr::from_edges(n, list, GraphProperties::undirected()).unwrap();
        for src in 0..n {
            for &dst in graph.neighbors(src) {
                prop_assert!(graph.neighbors(dst).contains(&src));
            }
        }
    }
}
