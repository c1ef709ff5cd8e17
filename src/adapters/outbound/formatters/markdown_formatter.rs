use crate::application::read_models::{
    CiView, GroupItemView, GroupView, LinkView, MetadataView, NodeView, QueryReadModel,
    ResultView, SummaryView, TreeNodeView, TypeCountView,
};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Markdown table header for CI rows
const CI_TABLE_HEADER: &str = "| ID | Name | Type | Description | Tags |\n";
const CI_TABLE_SEPARATOR: &str = "|----|------|------|-------------|------|\n";

/// Markdown table header for relationship rows
const LINK_TABLE_HEADER: &str = "| ID | Source | Target | Type | Description |\n";
const LINK_TABLE_SEPARATOR: &str = "|----|--------|--------|------|-------------|\n";

/// MarkdownFormatter adapter rendering a query answer as a Markdown report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn code(text: &str) -> String {
        format!("`{}`", text.replace('`', "'"))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &MetadataView, query: &str) {
        output.push_str(&format!("# CMDB Graph Report: {}\n\n", query));
        output.push_str(&format!(
            "*Generated by {} {} at {} ({})*\n\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp, metadata.query_id
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Inventory Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Configuration items | {} |\n", summary.ci_count));
        output.push_str(&format!("| Relationships | {} |\n", summary.relationship_count));
        output.push_str(&format!(
            "| Dangling relationships | {} |\n",
            summary.dangling_relationships
        ));
        output.push_str(&format!("| Duplicate CI ids | {} |\n", summary.duplicate_ci_ids));
        output.push('\n');
    }

    fn render_nodes(&self, output: &mut String, nodes: &[NodeView]) {
        output.push_str("## Nodes\n\n");
        if nodes.is_empty() {
            output.push_str("*No nodes*\n\n");
            return;
        }
        output.push_str("| ID | Name | Type | Root |\n");
        output.push_str("|----|------|------|------|\n");
        for node in nodes {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&node.id),
                Self::escape_markdown_table_cell(&node.name),
                Self::escape_markdown_table_cell(&node.ci_type),
                if node.is_root { "✓" } else { "" }
            ));
        }
        output.push('\n');
    }

    fn render_links(&self, output: &mut String, links: &[LinkView]) {
        output.push_str("## Links\n\n");
        if links.is_empty() {
            output.push_str("*No links*\n\n");
            return;
        }
        output.push_str(LINK_TABLE_HEADER);
        output.push_str(LINK_TABLE_SEPARATOR);
        for link in links {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&link.id),
                Self::escape_markdown_table_cell(&link.source),
                Self::escape_markdown_table_cell(&link.target),
                Self::escape_markdown_table_cell(&link.link_type),
                Self::escape_markdown_table_cell(&link.description)
            ));
        }
        output.push('\n');
    }

    fn render_missing(&self, output: &mut String, missing: &[String]) {
        if missing.is_empty() {
            return;
        }
        output.push_str("## Unknown CI References\n\n");
        output.push_str("Relationships point at these ids, but no CI record exists:\n\n");
        for id in missing {
            output.push_str(&format!("- {}\n", Self::code(id)));
        }
        output.push('\n');
    }

    /// Renders the hierarchy as a nested list, two spaces per level
    fn render_tree(&self, output: &mut String, root: &TreeNodeView) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let indent = "  ".repeat(node.depth);
            let via = node
                .relationship_type
                .as_deref()
                .map(|t| format!(" via {}", Self::code(t)))
                .unwrap_or_default();
            output.push_str(&format!(
                "{}- **{}** ({}, {}){}\n",
                indent,
                node.name,
                Self::code(&node.id),
                node.ci_type,
                via
            ));
            stack.extend(node.children.iter().rev());
        }
        output.push('\n');
    }

    fn render_ci_table(&self, output: &mut String, cis: &[&CiView]) {
        output.push_str(CI_TABLE_HEADER);
        output.push_str(CI_TABLE_SEPARATOR);
        for ci in cis {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&ci.id),
                Self::escape_markdown_table_cell(&ci.name),
                Self::escape_markdown_table_cell(&ci.ci_type),
                Self::escape_markdown_table_cell(&ci.description),
                Self::escape_markdown_table_cell(&ci.tags.join(", "))
            ));
        }
        output.push('\n');
    }

    fn render_groups(&self, output: &mut String, target: &str, groups: &[GroupView]) {
        output.push_str(&format!("## Groups of {}\n\n", target));
        if groups.is_empty() {
            output.push_str("*Nothing to group*\n\n");
            return;
        }

        for group in groups {
            output.push_str(&format!(
                "### {} ({})\n\n",
                Self::escape_markdown_table_cell(&group.group_type),
                group.items.len()
            ));

            let cis: Vec<&CiView> = group
                .items
                .iter()
                .filter_map(|item| match item {
                    GroupItemView::Ci(ci) => Some(ci),
                    GroupItemView::Relationship(_) => None,
                })
                .collect();
            if !cis.is_empty() {
                self.render_ci_table(output, &cis);
            }

            let links: Vec<LinkView> = group
                .items
                .iter()
                .filter_map(|item| match item {
                    GroupItemView::Relationship(rel) => Some(LinkView {
                        id: rel.id.clone(),
                        source: rel.source_id.clone(),
                        target: rel.target_id.clone(),
                        link_type: rel.relationship_type.clone(),
                        description: rel.description.clone(),
                    }),
                    GroupItemView::Ci(_) => None,
                })
                .collect();
            if !links.is_empty() {
                output.push_str(LINK_TABLE_HEADER);
                output.push_str(LINK_TABLE_SEPARATOR);
                for link in &links {
                    output.push_str(&format!(
                        "| {} | {} | {} | {} | {} |\n",
                        Self::escape_markdown_table_cell(&link.id),
                        Self::escape_markdown_table_cell(&link.source),
                        Self::escape_markdown_table_cell(&link.target),
                        Self::escape_markdown_table_cell(&link.link_type),
                        Self::escape_markdown_table_cell(&link.description)
                    ));
                }
                output.push('\n');
            }
        }
    }

    fn render_types(&self, output: &mut String, ci_types: &[TypeCountView], rel_types: &[String]) {
        output.push_str("## CI Types\n\n");
        if ci_types.is_empty() {
            output.push_str("*No CIs*\n\n");
        } else {
            output.push_str("| Type | Count |\n");
            output.push_str("|------|-------|\n");
            for t in ci_types {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&t.type_name),
                    t.count
                ));
            }
            output.push('\n');
        }

        output.push_str("## Relationship Types\n\n");
        if rel_types.is_empty() {
            output.push_str("*No relationships*\n\n");
        } else {
            for t in rel_types {
                output.push_str(&format!("- {}\n", Self::code(t)));
            }
            output.push('\n');
        }
    }

    fn render_result(&self, output: &mut String, result: &ResultView) {
        match result {
            ResultView::Graph {
                root,
                nodes,
                links,
                missing,
            } => {
                if let Some(root) = root {
                    output.push_str(&format!(
                        "Neighborhood of {} (two hops, direction ignored).\n\n",
                        Self::code(root)
                    ));
                }
                self.render_nodes(output, nodes);
                self.render_links(output, links);
                self.render_missing(output, missing);
            }
            ResultView::Tree {
                root,
                tree,
                cycles,
                truncated,
            } => {
                output.push_str("## Hierarchy\n\n");
                match tree {
                    Some(tree) => self.render_tree(output, tree),
                    None => output.push_str(&format!("*No CI with id {}*\n\n", Self::code(root))),
                }
                if !cycles.is_empty() {
                    output.push_str("### Cycles\n\n");
                    output.push_str("These relationships lead back to an ancestor and were not expanded:\n\n");
                    for cycle in cycles {
                        output.push_str(&format!(
                            "- {}: {} → {}\n",
                            Self::code(&cycle.relationship_id),
                            Self::code(&cycle.from),
                            Self::code(&cycle.to)
                        ));
                    }
                    output.push('\n');
                }
                if *truncated {
                    output.push_str("⚠️ The tree was truncated because it exceeded the node or depth limit.\n\n");
                }
            }
            ResultView::Path { from, to, path } => {
                output.push_str("## Shortest Path\n\n");
                if path.is_empty() {
                    output.push_str(&format!(
                        "*No path between {} and {}*\n\n",
                        Self::code(from),
                        Self::code(to)
                    ));
                } else {
                    let hops: Vec<String> = path.iter().map(|id| Self::code(id)).collect();
                    output.push_str(&format!("{}\n\n", hops.join(" → ")));
                    output.push_str(&format!("{} hop(s)\n\n", path.len() - 1));
                }
            }
            ResultView::Connected { id, members } => {
                output.push_str(&format!(
                    "## Connected to {} ({})\n\n",
                    Self::code(id),
                    members.len()
                ));
                for member in members {
                    output.push_str(&format!("- {}\n", Self::code(member)));
                }
                output.push('\n');
            }
            ResultView::Groups { target, groups } => self.render_groups(output, target, groups),
            ResultView::Types {
                ci_types,
                relationship_types,
            } => self.render_types(output, ci_types, relationship_types),
            ResultView::List {
                items,
                page,
                total,
                total_pages,
                ..
            } => {
                output.push_str("## Configuration Items\n\n");
                if items.is_empty() {
                    output.push_str("*No matching CIs on this page*\n\n");
                } else {
                    let rows: Vec<&CiView> = items.iter().collect();
                    self.render_ci_table(output, &rows);
                }
                output.push_str(&format!(
                    "Page {} of {} ({} matching CI(s))\n",
                    page,
                    (*total_pages).max(1),
                    total
                ));
            }
        }
    }
}

impl GraphFormatter for MarkdownFormatter {
    fn format(&self, model: &QueryReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata, model.result.query_name());
        self.render_summary(&mut output, &model.summary);
        self.render_result(&mut output, &model.result);

        Ok(output)
    }
}
