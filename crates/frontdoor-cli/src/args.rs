use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Args, Parser, Subcommand};
use frontdoor_types::Dimension;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frontdoor")]
#[command(about = "Browse the analytics dashboard and explore catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $FRONTDOOR_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of a filtered catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        page: PageArgs,

        /// Toggle favorite membership before rendering (repeatable)
        #[arg(long = "toggle-favorite", value_name = "ID", num_args = 1..)]
        toggle_favorite: Vec<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Distinct filter values for each dimension the catalog offers
    Facets {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Domain and subdomain navigation tree
    Domains {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Registered catalogs
    Catalogs,

    /// Interactive terminal browser
    Browse {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// Registered catalog name (defaults to `default_catalog` from config)
    #[arg(long, short = 'c', conflicts_with = "file")]
    pub catalog: Option<String>,

    /// Load a catalog JSON document directly
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub subdomain: Option<String>,

    /// Dashboard or Explore
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub environment: Option<String>,

    #[arg(long)]
    pub access: Option<String>,

    #[arg(long)]
    pub owner: Option<String>,

    /// Case-insensitive text search over name and description
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Also match the query against the domain label
    #[arg(long)]
    pub search_domain: bool,
}

impl FilterArgs {
    /// Dimension selections in canonical dimension order.
    pub fn selections(&self) -> Vec<(Dimension, &str)> {
        [
            (Dimension::Domain, &self.domain),
            (Dimension::Subdomain, &self.subdomain),
            (Dimension::Kind, &self.kind),
            (Dimension::Status, &self.status),
            (Dimension::Environment, &self.environment),
            (Dimension::Access, &self.access),
            (Dimension::Owner, &self.owner),
        ]
        .into_iter()
        .filter_map(|(dimension, value)| value.as_deref().map(|v| (dimension, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Ordering applied before paging (catalog default when omitted)
    #[arg(long)]
    pub sort: Option<SortArg>,

    /// 1-based page; out-of-range values are clamped
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Entries per page (defaults to `page_size` from config)
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if size == 0 {
        return Err("page size must be at least 1".to_string());
    }
    Ok(size)
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::try_parse_from([
            "frontdoor", "list", "--type", "Dashboard", "--status", "Live", "-q", "budget",
            "--page", "-1", "--page-size", "5", "--sort", "views",
        ])
        .unwrap();

        let Some(Commands::List { filters, page, .. }) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(
            filters.selections(),
            vec![(Dimension::Kind, "Dashboard"), (Dimension::Status, "Live")]
        );
        assert_eq!(filters.query.as_deref(), Some("budget"));
        assert_eq!(page.page, Some(-1));
        assert_eq!(page.page_size, Some(5));
        assert_eq!(page.sort, Some(SortArg::Views));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Cli::try_parse_from(["frontdoor", "list", "--page-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_and_file_conflict() {
        let result =
            Cli::try_parse_from(["frontdoor", "list", "--catalog", "finance", "--file", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_favorite_repeats() {
        let cli = Cli::try_parse_from([
            "frontdoor", "list", "--toggle-favorite", "1", "3", "--toggle-favorite", "5",
        ])
        .unwrap();
        let Some(Commands::List { toggle_favorite, .. }) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(toggle_favorite, vec!["1", "3", "5"]);
    }
}
