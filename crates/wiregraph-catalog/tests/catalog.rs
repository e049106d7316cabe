//! Catalog tests against real snapshot directories.

use std::fs;
use std::path::Path;

use wiregraph_catalog::{CatalogError, GraphCatalog};
use wiregraph_core::config::{CatalogConfig, SelectorStrategy};
use wiregraph_core::GraphSelector;

const EMPTY_GRAPH: &str = r#"{"components": [], "connections": []}"#;

fn catalog_in(dir: &Path) -> GraphCatalog {
    GraphCatalog::new(CatalogConfig {
        graph_dir: dir.to_path_buf(),
        ..Default::default()
    })
}

fn write_graphs(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(format!("{name}.json")), EMPTY_GRAPH).unwrap();
    }
}

#[tokio::test]
async fn test_list_is_sorted_and_filters_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_graphs(dir.path(), &["graph_2", "gasolio", "graph_1"]);
    fs::write(dir.path().join("notes.txt"), "not a graph").unwrap();
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let entries = catalog_in(dir.path()).list().await.unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["gasolio", "graph_1", "graph_2"]);
}

#[tokio::test]
async fn test_numbered_resolution_accepts_loose_selectors() {
    let dir = tempfile::tempdir().unwrap();
    write_graphs(dir.path(), &["graph_1", "graph_2"]);
    let catalog = catalog_in(dir.path());

    for selector in [
        GraphSelector::Number(1),
        GraphSelector::from("1"),
        GraphSelector::from("graph 1"),
        GraphSelector::from("Graph_1"),
    ] {
        let entry = catalog
            .resolve(&selector, SelectorStrategy::Numbered)
            .await
            .unwrap();
        assert_eq!(entry.name, "graph_1", "selector {selector}");
    }

    let two = catalog
        .resolve(&GraphSelector::Number(2), SelectorStrategy::Numbered)
        .await
        .unwrap();
    assert_eq!(two.path, dir.path().join("graph_2.json"));
}

#[tokio::test]
async fn test_numbered_resolution_errors() {
    let dir = tempfile::tempdir().unwrap();
    write_graphs(dir.path(), &["graph_1"]);
    let catalog = catalog_in(dir.path());

    let missing = catalog
        .resolve(&GraphSelector::Number(9), SelectorStrategy::Numbered)
        .await;
    assert!(matches!(missing, Err(CatalogError::MissingFile { number: 9, .. })));

    let no_number = catalog
        .resolve(&GraphSelector::from("gasolio"), SelectorStrategy::Numbered)
        .await;
    assert!(matches!(no_number, Err(CatalogError::NoGraphNumber { .. })));

    let blank = catalog
        .resolve(&GraphSelector::from("   "), SelectorStrategy::Numbered)
        .await;
    assert!(matches!(blank, Err(CatalogError::MissingSelector)));
}

#[tokio::test]
async fn test_stem_resolution_exact_and_partial() {
    let dir = tempfile::tempdir().unwrap();
    write_graphs(dir.path(), &["gasolio", "schema completo", "graph_1", "graph_10"]);
    let catalog = catalog_in(dir.path());

    let exact = catalog
        .resolve(&GraphSelector::from("Schema-Completo.json"), SelectorStrategy::Stem)
        .await
        .unwrap();
    assert_eq!(exact.name, "schema completo");

    let exact_over_partial = catalog
        .resolve(&GraphSelector::from("graph 1"), SelectorStrategy::Stem)
        .await
        .unwrap();
    assert_eq!(exact_over_partial.name, "graph_1");

    let partial = catalog
        .resolve(&GraphSelector::from("gaso"), SelectorStrategy::Stem)
        .await
        .unwrap();
    assert_eq!(partial.name, "gasolio");
}

#[tokio::test]
async fn test_stem_resolution_errors() {
    let dir = tempfile::tempdir().unwrap();
    write_graphs(dir.path(), &["graph_10", "graph_11"]);
    let catalog = catalog_in(dir.path());

    let ambiguous = catalog
        .resolve(&GraphSelector::from("graph"), SelectorStrategy::Stem)
        .await;
    match ambiguous {
        Err(CatalogError::Ambiguous { matches, .. }) => assert_eq!(matches, "graph_10, graph_11"),
        other => panic!("expected ambiguous selector, got {other:?}"),
    }

    let missing = catalog
        .resolve(&GraphSelector::from("boiler"), SelectorStrategy::Stem)
        .await;
    match missing {
        Err(CatalogError::NotFound { available, .. }) => {
            assert_eq!(available, "graph_10, graph_11")
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_or_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let empty = catalog_in(dir.path())
        .resolve(&GraphSelector::from("anything"), SelectorStrategy::Stem)
        .await;
    assert!(matches!(empty, Err(CatalogError::EmptyCatalog { .. })));

    let absent = catalog_in(&dir.path().join("does-not-exist")).list().await;
    assert!(matches!(absent, Err(CatalogError::EmptyCatalog { .. })));
}

#[tokio::test]
async fn test_read_document() {
    let dir = tempfile::tempdir().unwrap();
    write_graphs(dir.path(), &["graph_1"]);
    fs::write(dir.path().join("graph_2.json"), "{ not json").unwrap();
    let catalog = catalog_in(dir.path());

    let good = catalog
        .resolve(&GraphSelector::Number(1), SelectorStrategy::Numbered)
        .await
        .unwrap();
    let doc = catalog.read_document(&good).await.unwrap();
    assert!(doc["components"].is_array());

    let bad = catalog
        .resolve(&GraphSelector::Number(2), SelectorStrategy::Numbered)
        .await
        .unwrap();
    let err = catalog.read_document(&bad).await.unwrap_err();
    assert_eq!(err.kind(), "JSONDecodeError");
}
