//! End-to-end scenarios through the public API.
//!
//! Each test builds a knowledge graph the way a caller would and checks the
//! rendered graph or query answers.

use kgraph_core::graph::Capabilities;
use kgraph_core::{
    DirectedGraph, Error, GraphSnapshot, KnowledgeGraph, KnowledgeGraphConfig, NO_COMMON_ANCESTOR,
};

fn knowledge_graph(entities: &[&str], relations: &[(&str, &str, f32)]) -> anyhow::Result<KnowledgeGraph> {
    let mut kg = KnowledgeGraph::new();
    for entity in entities {
        kg.add_entity(*entity)?;
    }
    for (from, to, weight) in relations {
        kg.add_weighted_relation(from, to, *weight)?;
    }
    Ok(kg)
}

// ============================================================================
// Directed graph
// ============================================================================

#[test]
fn test_weighted_graph_rendering() -> anyhow::Result<()> {
    let mut graph = DirectedGraph::new();
    for v in ['A', 'B', 'C', 'D', 'E'] {
        graph.add(v);
    }
    for (from, to, weight) in [
        ('A', 'B', 8.0),
        ('B', 'D', 6.0),
        ('C', 'B', 1.0),
        ('C', 'D', 2.0),
        ('E', 'A', 3.0),
        ('E', 'B', 4.0),
        ('E', 'C', 5.0),
    ] {
        graph.connect(&from, &to, weight)?;
    }

    assert_eq!(
        graph.to_string(),
        "[(A, 1, 1, [(A, B, 8.000000), (E, A, 3.000000)]), \
         (B, 3, 1, [(A, B, 8.000000), (B, D, 6.000000), (C, B, 1.000000), (E, B, 4.000000)]), \
         (C, 1, 2, [(C, B, 1.000000), (C, D, 2.000000), (E, C, 5.000000)]), \
         (D, 2, 0, [(B, D, 6.000000), (C, D, 2.000000)]), \
         (E, 0, 3, [(E, A, 3.000000), (E, B, 4.000000), (E, C, 5.000000)])]"
    );
    Ok(())
}

#[test]
fn test_traversal_with_display_capability() -> anyhow::Result<()> {
    let mut graph = DirectedGraph::with_capabilities(
        Capabilities::new().with_display(|v: &char| v.to_string()),
    );
    for v in ['A', 'B', 'C', 'D', 'E'] {
        graph.add(v);
    }
    graph.connect(&'A', &'C', 8.0)?;
    graph.connect(&'B', &'D', 6.0)?;
    graph.connect(&'A', &'B', 1.0)?;
    graph.connect(&'C', &'D', 1.0)?;
    graph.connect(&'A', &'E', 1.0)?;

    assert_eq!(graph.bfs(&'A')?, "[A, C, B, E, D]");
    assert_eq!(graph.dfs(&'A')?, "[A, C, D, B, E]");
    Ok(())
}

#[test]
fn test_custom_equality_on_floats() -> anyhow::Result<()> {
    let mut graph = DirectedGraph::with_capabilities(
        Capabilities::new()
            .with_equality(|a: &f64, b: &f64| (a - b).abs() < 1e-9)
            .with_display(|v: &f64| format!("{v:.1}")),
    );
    graph.add(0.1 + 0.2);
    graph.add(0.3);
    graph.add(1.5);
    graph.connect(&0.3, &1.5, 2.5)?;

    assert_eq!(graph.size(), 2);
    assert_eq!(graph.bfs(&0.3)?, "[0.3, 1.5]");
    assert_eq!(graph.weight(&(0.1 + 0.2), &1.5)?, 2.5);
    Ok(())
}

// ============================================================================
// Knowledge graph
// ============================================================================

#[test]
fn test_mixed_weights_rendering() -> anyhow::Result<()> {
    let kg = knowledge_graph(
        &["D", "A", "B", "C", "E"],
        &[("A", "B", 1.0), ("A", "C", -2.0), ("B", "A", 2.0), ("D", "A", 4.0)],
    )?;

    assert_eq!(
        kg.to_string(),
        "[(D, 0, 1, [(D, A, 4.000000)]), \
         (A, 2, 2, [(A, B, 1.000000), (A, C, -2.000000), (B, A, 2.000000), (D, A, 4.000000)]), \
         (B, 1, 1, [(A, B, 1.000000), (B, A, 2.000000)]), \
         (C, 1, 0, [(A, C, -2.000000)]), \
         (E, 0, 0, [])]"
    );
    Ok(())
}

#[test]
fn test_tree_queries() -> anyhow::Result<()> {
    let kg = knowledge_graph(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
        &[
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("B", "E", 1.0),
            ("C", "F", 1.0),
            ("C", "G", 1.0),
            ("D", "H", 1.0),
            ("E", "I", 1.0),
            ("F", "J", 1.0),
        ],
    )?;

    assert_eq!(kg.related_entities("A", 2)?, ["B", "C", "D", "E", "F", "G"]);
    assert_eq!(kg.related_entities("C", 1)?, ["F", "G"]);
    assert_eq!(kg.find_common_ancestors("H", "I")?, "B");
    assert_eq!(kg.find_common_ancestors("H", "J")?, "A");
    assert_eq!(kg.find_common_ancestors("F", "G")?, "C");
    assert!(kg.is_reachable("A", "J")?);
    assert!(!kg.is_reachable("J", "A")?);
    Ok(())
}

#[test]
fn test_common_ancestor_follows_reweighting() -> anyhow::Result<()> {
    let mut kg = knowledge_graph(
        &["A", "B", "C", "D", "E", "F", "G"],
        &[("D", "A", 1.0), ("D", "B", 1.0), ("C", "A", 1.0), ("C", "B", 2.0)],
    )?;
    assert_eq!(kg.find_common_ancestors("A", "B")?, "D");

    kg.add_weighted_relation("D", "B", 5.0)?;
    assert_eq!(kg.find_common_ancestors("A", "B")?, "C");

    kg.add_weighted_relation("C", "A", 3.0)?;
    for (from, to) in [("E", "A"), ("F", "B"), ("G", "E"), ("G", "F")] {
        kg.add_relation(from, to)?;
    }
    assert_eq!(kg.find_common_ancestors("A", "B")?, "G");
    Ok(())
}

#[test]
fn test_errors_surface_through_anyhow() {
    let result = knowledge_graph(&["A", "A"], &[]);
    let err = result.expect_err("duplicate entity must fail");
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EntityExists));
    assert_eq!(err.to_string(), "Entity already exists");
}

#[test]
fn test_config_file_drives_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("kgraph.toml");
    std::fs::write(
        &path,
        "default_relation_weight = 2.5\nno_common_ancestor = \"unrelated\"\n",
    )?;

    let config = KnowledgeGraphConfig::load(Some(path.as_path()))?;
    let mut kg = KnowledgeGraph::with_config(config);
    kg.add_entity("A")?;
    kg.add_entity("B")?;
    assert_eq!(kg.find_common_ancestors("A", "B")?, "unrelated");
    assert_ne!(kg.find_common_ancestors("A", "B")?, NO_COMMON_ANCESTOR);

    kg.add_relation("A", "B")?;
    assert_eq!(kg.relation_weight("A", "B")?, 2.5);
    Ok(())
}

#[test]
fn test_snapshot_survives_json() -> anyhow::Result<()> {
    let kg = knowledge_graph(
        &["root", "left", "right"],
        &[("root", "left", 1.5), ("root", "right", 0.5)],
    )?;

    let json = serde_json::to_value(kg.snapshot())?;
    assert_eq!(json["entities"], serde_json::json!(["root", "left", "right"]));
    assert_eq!(json["relations"][1]["to"], "right");

    let restored = KnowledgeGraph::from_snapshot(&serde_json::from_value::<GraphSnapshot>(json)?)?;
    assert_eq!(restored.to_string(), kg.to_string());
    assert_eq!(restored.find_common_ancestors("left", "right")?, "root");
    Ok(())
}
