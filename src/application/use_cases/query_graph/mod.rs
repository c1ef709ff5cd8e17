use crate::application::dto::{GraphQuery, GraphRequest, GraphResponse, GroupTarget, QueryOutcome};
use crate::ci_graph::domain::Inventory;
use crate::ci_graph::services::{
    ConnectivityFinder, GraphViewBuilder, Grouping, IntegrityChecker, IntegrityReport,
    MetadataGenerator, PathFinder, TreeViewBuilder,
};
use crate::ports::inbound::GraphQueryPort;
use crate::ports::outbound::{InventoryReader, ProgressReporter};
use crate::shared::Result;

/// QueryGraphUseCase - loads an inventory snapshot and answers one graph query
///
/// # Type Parameters
/// * `IR` - InventoryReader implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryGraphUseCase<IR, PR> {
    inventory_reader: IR,
    progress_reporter: PR,
}

impl<IR, PR> QueryGraphUseCase<IR, PR>
where
    IR: InventoryReader,
    PR: ProgressReporter,
{
    pub fn new(inventory_reader: IR, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            progress_reporter,
        }
    }

    /// Executes the query
    ///
    /// Integrity problems in the inventory are reported but never abort the
    /// query; the graph functions tolerate them.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Load inventory
        let inventory = self.load_inventory(&request)?;

        // Step 2: Integrity check
        let integrity = self.check_integrity(&inventory, request.warn_integrity);

        // Step 3: Answer the query
        let outcome = Self::answer(&inventory, request.query);
        self.report_tree_shape(&outcome);

        Ok(GraphResponse::new(
            MetadataGenerator::generate_default_metadata(),
            inventory.ci_count(),
            inventory.relationship_count(),
            integrity,
            outcome,
        ))
    }

    fn load_inventory(&self, request: &GraphRequest) -> Result<Inventory> {
        self.progress_reporter.report(&format!(
            "📖 Loading inventory from: {}",
            request.inventory_path.display()
        ));

        let inventory = self.inventory_reader.read_inventory(&request.inventory_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} CI(s) and {} relationship(s)",
            inventory.ci_count(),
            inventory.relationship_count()
        ));

        Ok(inventory)
    }

    fn check_integrity(&self, inventory: &Inventory, warn: bool) -> IntegrityReport {
        let report = IntegrityChecker::check_with_progress(
            inventory.cis(),
            inventory.relationships(),
            |done, total| {
                self.progress_reporter
                    .report_progress(done, total, Some("checking relationships"))
            },
        );

        if warn {
            for dangling in &report.dangling {
                if let Some(source) = &dangling.missing_source {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Relationship '{}' references unknown source CI '{}'",
                        dangling.relationship_id, source
                    ));
                }
                if let Some(target) = &dangling.missing_target {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Relationship '{}' references unknown target CI '{}'",
                        dangling.relationship_id, target
                    ));
                }
            }
            for (id, count) in &report.duplicate_ids {
                self.progress_reporter.report_error(&format!(
                    "⚠️  CI id '{}' occurs {} times; the last occurrence is used",
                    id, count
                ));
            }
        }

        report
    }

    fn report_tree_shape(&self, outcome: &QueryOutcome) {
        let QueryOutcome::Tree {
            view: Some(view), ..
        } = outcome
        else {
            return;
        };

        self.progress_reporter.report(&format!(
            "🌳 Built tree of {} node(s), depth {}",
            view.root.size(),
            view.root.max_depth()
        ));
        if view.truncated {
            self.progress_reporter.report_error(&format!(
                "⚠️  Tree truncated at {} node(s) or depth {}",
                TreeViewBuilder::MAX_TREE_NODES,
                TreeViewBuilder::MAX_TREE_DEPTH
            ));
        }
    }

    fn answer(inventory: &Inventory, query: GraphQuery) -> QueryOutcome {
        let cis = inventory.cis();
        let relationships = inventory.relationships();

        match query {
            GraphQuery::Graph { root } => QueryOutcome::Graph {
                view: GraphViewBuilder::build(cis, relationships, root.as_deref()),
                root,
            },
            GraphQuery::Tree { root } => QueryOutcome::Tree {
                view: TreeViewBuilder::build(cis, relationships, &root),
                root,
            },
            GraphQuery::Path { from, to } => QueryOutcome::Path {
                path: PathFinder::shortest_path(relationships, &from, &to),
                from,
                to,
            },
            GraphQuery::Connected { id } => QueryOutcome::Connected {
                members: ConnectivityFinder::connected(relationships, &id)
                    .into_iter()
                    .collect(),
                id,
            },
            GraphQuery::Groups {
                target: GroupTarget::Cis,
            } => QueryOutcome::CiGroups(
                Grouping::group_by_type(cis)
                    .into_iter()
                    .map(|(group_type, items)| {
                        (group_type.to_string(), items.into_iter().cloned().collect())
                    })
                    .collect(),
            ),
            GraphQuery::Groups {
                target: GroupTarget::Relationships,
            } => QueryOutcome::RelationshipGroups(
                Grouping::group_by_type(relationships)
                    .into_iter()
                    .map(|(group_type, items)| {
                        (group_type.to_string(), items.into_iter().cloned().collect())
                    })
                    .collect(),
            ),
            GraphQuery::Types => QueryOutcome::Types {
                ci_types: Grouping::type_counts(cis)
                    .into_iter()
                    .map(|(type_name, count)| (type_name.to_string(), count))
                    .collect(),
                relationship_types: Grouping::distinct_types(relationships)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
            GraphQuery::List { filter, paginator } => {
                let page = paginator.paginate(filter.apply(cis));
                QueryOutcome::List {
                    items: page.items.into_iter().cloned().collect(),
                    page: page.page,
                    limit: page.limit,
                    total: page.total,
                    total_pages: page.total_pages,
                }
            }
        }
    }
}

impl<IR, PR> GraphQueryPort for QueryGraphUseCase<IR, PR>
where
    IR: InventoryReader,
    PR: ProgressReporter,
{
    fn query(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.execute(request)
    }
}

#[cfg(test)]
mod tests;
