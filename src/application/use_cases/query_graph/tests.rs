use super::*;
use crate::ci_graph::domain::{ConfigurationItem, Relationship};
use crate::ci_graph::services::{CiFilter, Paginator};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

struct MockInventoryReader {
    inventory: Inventory,
}

impl InventoryReader for MockInventoryReader {
    fn read_inventory(&self, _path: &Path) -> Result<Inventory> {
        Ok(self.inventory.clone())
    }
}

struct FailingInventoryReader;

impl InventoryReader for FailingInventoryReader {
    fn read_inventory(&self, path: &Path) -> Result<Inventory> {
        anyhow::bail!("cannot read {}", path.display())
    }
}

#[derive(Default)]
struct RecordingReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn ci(id: &str, ci_type: &str, tags: &[&str]) -> ConfigurationItem {
    ConfigurationItem::new(
        id.to_string(),
        format!("{} node", id),
        ci_type.to_string(),
        String::new(),
        tags.iter().map(|t| t.to_string()).collect(),
    )
    .unwrap()
}

fn rel(id: &str, source: &str, target: &str, rel_type: &str) -> Relationship {
    Relationship::new(
        id.to_string(),
        source.to_string(),
        target.to_string(),
        rel_type.to_string(),
        String::new(),
    )
    .unwrap()
}

/// app -> web -> host, app -> db, plus a relationship to a deleted CI
fn sample_inventory() -> Inventory {
    Inventory::new(
        vec![
            ci("app", "Application", &["prod"]),
            ci("web", "Server", &["prod", "eu"]),
            ci("host", "Server", &["eu"]),
            ci("db", "Database", &["prod"]),
            ci("orphan", "Server", &[]),
        ],
        vec![
            rel("r1", "app", "web", "runs_on"),
            rel("r2", "web", "host", "hosted_on"),
            rel("r3", "app", "db", "depends_on"),
            rel("r4", "db", "retired", "replicates_to"),
        ],
    )
}

fn run(query: GraphQuery, reporter: &RecordingReporter) -> GraphResponse {
    let use_case = QueryGraphUseCase::new(
        MockInventoryReader {
            inventory: sample_inventory(),
        },
        reporter,
    );
    use_case
        .execute(GraphRequest::new(PathBuf::from("inventory.json"), query, true))
        .unwrap()
}

#[test]
fn test_graph_query_whole_inventory() {
    let reporter = RecordingReporter::default();
    let response = run(GraphQuery::Graph { root: None }, &reporter);

    let QueryOutcome::Graph { root, view } = response.outcome else {
        panic!("expected graph outcome");
    };
    assert!(root.is_none());
    assert_eq!(view.node_count(), 5);
    // r4 points at a CI that no longer exists
    assert_eq!(view.link_count(), 3);
    assert_eq!(response.ci_count, 5);
    assert_eq!(response.relationship_count, 4);
}

#[test]
fn test_graph_query_neighborhood() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::Graph {
            root: Some("host".to_string()),
        },
        &reporter,
    );

    let QueryOutcome::Graph { view, .. } = response.outcome else {
        panic!("expected graph outcome");
    };
    let ids: Vec<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["host", "web", "app"]);
    assert!(view.nodes[0].is_root);
}

#[test]
fn test_tree_query() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::Tree {
            root: "app".to_string(),
        },
        &reporter,
    );

    assert!(!response.outcome.is_empty_result());
    let QueryOutcome::Tree { view: Some(view), .. } = response.outcome else {
        panic!("expected tree outcome");
    };
    assert_eq!(view.root.size(), 4);
    assert_eq!(view.root.max_depth(), 2);
    assert!(reporter
        .messages
        .borrow()
        .contains(&"🌳 Built tree of 4 node(s), depth 2".to_string()));
}

#[test]
fn test_deep_tree_is_truncated_and_reported() {
    let count = 2_000;
    let cis: Vec<ConfigurationItem> = (0..count)
        .map(|i| ci(&format!("n{}", i), "Server", &[]))
        .collect();
    let rels: Vec<Relationship> = (1..count)
        .map(|i| {
            rel(
                &format!("r{}", i),
                &format!("n{}", i - 1),
                &format!("n{}", i),
                "contains",
            )
        })
        .collect();
    let reporter = RecordingReporter::default();
    let use_case = QueryGraphUseCase::new(
        MockInventoryReader {
            inventory: Inventory::new(cis, rels),
        },
        &reporter,
    );

    let response = use_case
        .execute(GraphRequest::new(
            PathBuf::from("chain.json"),
            GraphQuery::Tree {
                root: "n0".to_string(),
            },
            true,
        ))
        .unwrap();

    let QueryOutcome::Tree { view: Some(view), .. } = &response.outcome else {
        panic!("expected tree outcome");
    };
    assert!(view.truncated);
    assert_eq!(view.root.max_depth(), TreeViewBuilder::MAX_TREE_DEPTH);
    assert!(reporter
        .errors
        .borrow()
        .iter()
        .any(|e| e.contains("Tree truncated")));
}

#[test]
fn test_tree_query_unknown_root_is_empty_result() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::Tree {
            root: "nope".to_string(),
        },
        &reporter,
    );
    assert!(response.outcome.is_empty_result());
}

#[test]
fn test_path_query() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::Path {
            from: "host".to_string(),
            to: "db".to_string(),
        },
        &reporter,
    );

    let QueryOutcome::Path { path, .. } = response.outcome else {
        panic!("expected path outcome");
    };
    assert_eq!(path, vec!["host", "web", "app", "db"]);
}

#[test]
fn test_path_query_without_path_is_empty_result() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::Path {
            from: "app".to_string(),
            to: "orphan".to_string(),
        },
        &reporter,
    );
    assert!(response.outcome.is_empty_result());
}

#[test]
fn test_connected_query_includes_dangling_ids() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::Connected {
            id: "host".to_string(),
        },
        &reporter,
    );

    let QueryOutcome::Connected { members, .. } = response.outcome else {
        panic!("expected connected outcome");
    };
    assert_eq!(members.len(), 5);
    assert!(members.contains(&"retired".to_string()));
    assert!(!members.contains(&"orphan".to_string()));
}

#[test]
fn test_group_and_types_queries() {
    let reporter = RecordingReporter::default();

    let response = run(
        GraphQuery::Groups {
            target: GroupTarget::Cis,
        },
        &reporter,
    );
    let QueryOutcome::CiGroups(groups) = response.outcome else {
        panic!("expected CI groups");
    };
    let types: Vec<&str> = groups.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(types, vec!["Application", "Server", "Database"]);
    assert_eq!(groups[1].1.len(), 3);

    let response = run(GraphQuery::Types, &reporter);
    let QueryOutcome::Types {
        ci_types,
        relationship_types,
    } = response.outcome
    else {
        panic!("expected types");
    };
    assert_eq!(ci_types[1], ("Server".to_string(), 3));
    assert_eq!(relationship_types.len(), 4);
}

#[test]
fn test_list_query_filters_and_paginates() {
    let reporter = RecordingReporter::default();
    let response = run(
        GraphQuery::List {
            filter: CiFilter::new().with_tags(vec!["prod".to_string()]),
            paginator: Paginator::new(2, 2),
        },
        &reporter,
    );

    let QueryOutcome::List {
        items,
        total,
        total_pages,
        ..
    } = response.outcome
    else {
        panic!("expected list");
    };
    assert_eq!(total, 3);
    assert_eq!(total_pages, 2);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), "db");
}

#[test]
fn test_integrity_warnings_are_reported() {
    let reporter = RecordingReporter::default();
    let response = run(GraphQuery::Types, &reporter);

    assert_eq!(response.integrity.dangling.len(), 1);
    let errors = reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("retired"));
    assert_eq!(reporter.progress.borrow().last(), Some(&(4, 4)));
}

#[test]
fn test_integrity_warnings_can_be_silenced() {
    let reporter = RecordingReporter::default();
    let use_case = QueryGraphUseCase::new(
        MockInventoryReader {
            inventory: sample_inventory(),
        },
        &reporter,
    );

    let response = use_case
        .execute(GraphRequest::new(PathBuf::from("x.json"), GraphQuery::Types, false))
        .unwrap();

    assert_eq!(response.integrity.dangling.len(), 1);
    assert!(reporter.errors.borrow().is_empty());
}

#[test]
fn test_reader_error_is_propagated() {
    let reporter = RecordingReporter::default();
    let use_case = QueryGraphUseCase::new(FailingInventoryReader, &reporter);

    let result = use_case.query(GraphRequest::new(
        PathBuf::from("missing.json"),
        GraphQuery::Types,
        true,
    ));

    assert!(result.unwrap_err().to_string().contains("missing.json"));
}

#[test]
fn test_loading_is_reported() {
    let reporter = RecordingReporter::default();
    run(GraphQuery::Types, &reporter);

    let messages = reporter.messages.borrow();
    assert!(messages[0].contains("inventory.json"));
    assert!(messages[1].contains("5 CI(s)"));
}
