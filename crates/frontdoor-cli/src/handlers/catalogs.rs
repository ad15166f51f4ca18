use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use frontdoor_runtime::FrontDoor;

/// List every registered catalog. A catalog that fails to load is reported
/// in its row instead of aborting the listing.
pub fn handle(frontdoor: &FrontDoor, ctx: &HandlerContext) -> Result<()> {
    let loaded = frontdoor
        .registry()
        .providers()
        .map(|provider| (provider, provider.load()))
        .collect();

    ctx.render(presenters::present_catalog_list(
        &frontdoor.config().default_catalog,
        loaded,
    ))
}
