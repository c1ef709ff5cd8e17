use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::dto::{GraphQuery, GroupTarget, OutputFormat};
use crate::ci_graph::services::{CiFilter, Paginator};
use crate::config::ConfigFile;
use crate::shared::error::CmdbError;
use crate::shared::Result;

/// Derive graph, tree, path and connectivity views from a CMDB inventory
#[derive(Parser, Debug)]
#[command(name = "cmdb-graph")]
#[command(version)]
#[command(about = "Derive graph, tree, path and connectivity views from a CMDB inventory", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Inventory file: JSON, YAML or TOML with `cis` and `relationships`
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./cmdb-graph.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress progress and warnings on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Do not warn about dangling relationships or duplicate CI ids
    #[arg(long, global = true)]
    pub no_integrity_warnings: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Node/link view of the whole inventory or of a CI's two-hop neighborhood
    Graph {
        /// Focus CI; its neighborhood is shown and it is flagged as root
        #[arg(long)]
        root: Option<String>,
    },
    /// Hierarchy following outgoing relationships from a CI
    Tree {
        /// Root CI id
        root: String,
    },
    /// Shortest path between two CIs, ignoring relationship direction
    Path { from: String, to: String },
    /// Every CI reachable from a CI, ignoring relationship direction
    Connected { id: String },
    /// Group CIs or relationships by type
    Groups {
        #[arg(value_enum, default_value_t = GroupBy::Cis)]
        of: GroupBy,
    },
    /// Distinct CI types with counts and distinct relationship types
    Types,
    /// List CIs with optional filters
    List {
        /// Case-insensitive match on name, description or tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only CIs of this type
        #[arg(short = 't', long = "type")]
        ci_type: Option<String>,

        /// Only CIs carrying this tag; repeat to require several
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Page size (defaults to `page_size` from the config file, then 10)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Cis,
    Relationships,
}

impl From<GroupBy> for GroupTarget {
    fn from(value: GroupBy) -> Self {
        match value {
            GroupBy::Cis => GroupTarget::Cis,
            GroupBy::Relationships => GroupTarget::Relationships,
        }
    }
}

impl Args {
    /// Parses the process arguments; `--help` and `--version` also come back as errors
    pub fn parse_args() -> std::result::Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub warn_integrity: bool,
    pub query: GraphQuery,
}

/// Merges `args` over `config`; CLI values win
pub fn merge_config(args: Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(configured)) => configured
            .parse::<OutputFormat>()
            .map_err(|message: String| CmdbError::Validation { message })?,
        (None, None) => OutputFormat::default(),
    };

    let input = args.input.or(config.input).ok_or_else(|| CmdbError::InvalidInventoryPath {
        path: PathBuf::new(),
        reason: "No inventory file given".to_string(),
    })?;

    let warn_integrity = !args.no_integrity_warnings && config.warn_dangling.unwrap_or(true);
    let query = build_query(args.command, config.page_size);

    Ok(Settings {
        input,
        format,
        output: args.output,
        quiet: args.quiet,
        warn_integrity,
        query,
    })
}

fn build_query(command: Command, configured_page_size: Option<usize>) -> GraphQuery {
    match command {
        Command::Graph { root } => GraphQuery::Graph { root },
        Command::Tree { root } => GraphQuery::Tree { root },
        Command::Path { from, to } => GraphQuery::Path { from, to },
        Command::Connected { id } => GraphQuery::Connected { id },
        Command::Groups { of } => GraphQuery::Groups { target: of.into() },
        Command::Types => GraphQuery::Types,
        Command::List {
            search,
            ci_type,
            tags,
            page,
            limit,
        } => {
            let limit = limit
                .map(|l| l as usize)
                .or(configured_page_size)
                .unwrap_or(Paginator::DEFAULT_LIMIT);
            GraphQuery::List {
                filter: CiFilter::new()
                    .with_search(search)
                    .with_type(ci_type)
                    .with_tags(tags),
                paginator: Paginator::new(page as usize, limit),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn config(format: Option<&str>, input: Option<&str>) -> ConfigFile {
        ConfigFile {
            format: format.map(str::to_string),
            input: input.map(PathBuf::from),
            page_size: None,
            warn_dangling: None,
            unknown_fields: HashMap::new(),
        }
    }

    #[test]
    fn test_parse_subcommands() {
        let args = parse(&["cmdb-graph", "path", "web", "db", "-i", "inv.json"]);
        assert_eq!(
            args.command,
            Command::Path {
                from: "web".to_string(),
                to: "db".to_string()
            }
        );
        assert_eq!(args.input, Some(PathBuf::from("inv.json")));

        let args = parse(&["cmdb-graph", "graph", "--root", "app", "--format", "md"]);
        assert_eq!(
            args.command,
            Command::Graph {
                root: Some("app".to_string())
            }
        );
        assert_eq!(args.format, Some(OutputFormat::Markdown));

        let args = parse(&["cmdb-graph", "groups", "relationships"]);
        assert_eq!(
            args.command,
            Command::Groups {
                of: GroupBy::Relationships
            }
        );
    }

    #[test]
    fn test_parse_rejects_zero_page() {
        assert!(Args::try_parse_from(["cmdb-graph", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Args::try_parse_from(["cmdb-graph", "types", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let args = parse(&["cmdb-graph", "types", "-i", "cli.json", "-f", "json"]);
        let settings =
            merge_config(args, Some(config(Some("markdown"), Some("config.json")))).unwrap();

        assert_eq!(settings.input, PathBuf::from("cli.json"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.warn_integrity);
    }

    #[test]
    fn test_merge_falls_back_to_config() {
        let args = parse(&["cmdb-graph", "types"]);
        let settings =
            merge_config(args, Some(config(Some("markdown"), Some("config.json")))).unwrap();

        assert_eq!(settings.input, PathBuf::from("config.json"));
        assert_eq!(settings.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_merge_requires_input() {
        let args = parse(&["cmdb-graph", "types"]);
        let err = merge_config(args, None).unwrap_err();
        assert!(err.to_string().contains("No inventory file given"));
    }

    #[test]
    fn test_integrity_warnings_switches() {
        let mut quiet_config = config(None, Some("inv.json"));
        quiet_config.warn_dangling = Some(false);
        let settings = merge_config(parse(&["cmdb-graph", "types"]), Some(quiet_config)).unwrap();
        assert!(!settings.warn_integrity);

        let args = parse(&["cmdb-graph", "types", "-i", "x.json", "--no-integrity-warnings"]);
        assert!(!merge_config(args, None).unwrap().warn_integrity);
    }

    #[test]
    fn test_list_query_uses_config_page_size() {
        let mut cfg = config(None, Some("inv.json"));
        cfg.page_size = Some(25);

        let args = parse(&["cmdb-graph", "list", "--tag", "prod", "--tag", "eu", "-t", "Server"]);
        let settings = merge_config(args, Some(cfg)).unwrap();

        assert_eq!(
            settings.query,
            GraphQuery::List {
                filter: CiFilter::new()
                    .with_type(Some("Server".to_string()))
                    .with_tags(vec!["prod".to_string(), "eu".to_string()]),
                paginator: Paginator::new(1, 25),
            }
        );
    }

    #[test]
    fn test_list_limit_flag_wins() {
        let mut cfg = config(None, Some("inv.json"));
        cfg.page_size = Some(25);

        let args = parse(&["cmdb-graph", "list", "--page", "3", "--limit", "5"]);
        let GraphQuery::List { paginator, .. } = merge_config(args, Some(cfg)).unwrap().query else {
            panic!("expected list query");
        };
        assert_eq!(paginator, Paginator::new(3, 5));
    }
}
