use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use frontdoor_runtime::Config;
use std::path::Path;

pub fn show(path: &Path, ctx: &HandlerContext) -> Result<()> {
    let config = Config::load_from(path)?;
    ctx.render(presenters::present_config(&config, path))
}

pub fn init(path: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let exists = path.exists();
    if exists && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "config written");
    ctx.render(presenters::present_config_init(path, exists))
}
