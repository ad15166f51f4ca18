use crate::args::{CatalogArgs, FilterArgs, PageArgs};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use frontdoor_runtime::FrontDoor;

pub fn handle(
    frontdoor: &FrontDoor,
    catalog: &CatalogArgs,
    filters: &FilterArgs,
    page: &PageArgs,
    toggle_favorite: &[String],
    ctx: &HandlerContext,
) -> Result<()> {
    let mut session = super::open_session(frontdoor, catalog, filters, page)?;

    for id in toggle_favorite {
        let now = session.view_mut().toggle_favorite(id);
        tracing::info!(id = %id, favorite = now, "favorite toggled");
    }

    ctx.render(presenters::present_catalog_page(&session))
}
