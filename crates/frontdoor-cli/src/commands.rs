use super::args::{Cli, Commands, ConfigCommand, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use frontdoor_runtime::{FrontDoor, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let Some(command) = cli.command else {
        show_guidance(cli.config.as_deref());
        return Ok(());
    };

    let config = cli.config.as_deref();

    match command {
        Commands::Config { command } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            let path = resolve_config_path(config)?;
            match command {
                ConfigCommand::Show => handlers::config::show(&path, &ctx),
                ConfigCommand::Init { force } => handlers::config::init(&path, force, &ctx),
            }
        }

        Commands::List {
            catalog,
            filters,
            page,
            toggle_favorite,
            view_mode,
        } => {
            let frontdoor = FrontDoor::open(config)?;
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::list::handle(&frontdoor, &catalog, &filters, &page, &toggle_favorite, &ctx)
        }

        Commands::Facets { catalog } => {
            let frontdoor = FrontDoor::open(config)?;
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::facets::handle(&frontdoor, &catalog, &ctx)
        }

        Commands::Domains { catalog } => {
            let frontdoor = FrontDoor::open(config)?;
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::domains::handle(&frontdoor, &catalog, &ctx)
        }

        Commands::Catalogs => {
            let frontdoor = FrontDoor::open(config)?;
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::catalogs::handle(&frontdoor, &ctx)
        }

        Commands::Browse {
            catalog,
            filters,
            page,
        } => {
            let frontdoor = FrontDoor::open(config)?;
            handlers::browse::handle(&frontdoor, &catalog, &filters, &page)
        }
    }
}

fn show_guidance(explicit_config: Option<&str>) {
    let config_exists = resolve_config_path(explicit_config)
        .map(|path| path.exists())
        .unwrap_or(false);

    println!("frontdoor - Analytics dashboard & explore catalog\n");

    if !config_exists {
        println!("Get started:");
        println!("  frontdoor config init             # Write a default config file\n");
    }

    println!("Quick commands:");
    println!("  frontdoor list                    # First page of the default catalog");
    println!("  frontdoor list --type Dashboard   # Filter by any dimension");
    println!("  frontdoor list -q sales           # Search names and descriptions");
    println!("  frontdoor facets                  # Values you can filter on");
    println!("  frontdoor browse                  # Interactive browser\n");

    println!("For more commands:");
    println!("  frontdoor --help");
}
