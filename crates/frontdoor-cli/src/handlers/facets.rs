use crate::args::CatalogArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use frontdoor_runtime::FrontDoor;

pub fn handle(frontdoor: &FrontDoor, catalog: &CatalogArgs, ctx: &HandlerContext) -> Result<()> {
    let session = super::open_catalog(frontdoor, catalog)?;
    ctx.render(presenters::present_facets(&session))
}
