use digraph_scc::domain::error::ValidationError;
use digraph_scc::usecase::build::{build_graph, build_graph_from_text, parse_node_count};

#[test]
fn out_of_range_reference_is_rejected_without_partial_result() {
    let res = build_graph(2, "0-5");
    assert_eq!(
        res.unwrap_err(),
        ValidationError::NodeOutOfRange {
            token: "0-5".to_string(),
            endpoint: "5".to_string(),
            node_count: 2,
        }
    );
}

#[test]
fn first_error_wins_in_input_order() {
    // Token 2 is malformed and token 3 is out of range: the malformed one is reported.
    let err = build_graph(3, "0-1, x-2, 0-9").unwrap_err();
    assert!(matches!(err, ValidationError::MalformedEdgeToken { position: 2, .. }));
}

#[test]
fn each_cause_has_its_own_variant() {
    assert!(matches!(
        build_graph_from_text("-1", "0-1"),
        Err(ValidationError::InvalidNodeCount { .. })
    ));
    assert!(matches!(
        build_graph_from_text("2", "\t"),
        Err(ValidationError::MissingEdgeSpecification)
    ));
    assert!(matches!(
        build_graph_from_text("2", "0:1"),
        Err(ValidationError::MalformedEdgeToken { .. })
    ));
    assert!(matches!(
        build_graph_from_text("2", "2-0"),
        Err(ValidationError::NodeOutOfRange { .. })
    ));
}

#[test]
fn adjacency_follows_input_order() {
    let g = build_graph(4, "0-3, 0-1, 2-0, 0-2").expect("graph");
    assert_eq!(g.neighbors(0), &[3, 1, 2]);
    assert_eq!(g.neighbors(2), &[0]);
    assert_eq!(g.edges().len(), 4);
    assert_eq!(g.edges()[0].source, 0);
    assert_eq!(g.edges()[0].target, 3);
}

#[test]
fn node_count_text_is_trimmed() {
    assert_eq!(parse_node_count(" 7 "), Ok(7));
}

#[test]
fn huge_node_count_is_a_validation_error_not_a_crash() {
    assert!(matches!(
        build_graph_from_text("1000000000000000000", "x"),
        Err(ValidationError::MalformedEdgeToken { position: 1, .. })
    ));
    assert!(matches!(
        build_graph_from_text("1000000000000000000", "0-1"),
        Err(ValidationError::NodeCountTooLarge { .. })
    ));
}
