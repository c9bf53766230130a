use actix_web::{get, web, Responder};
use tokio::join;

use crate::api;
use crate::models::{BlockKind, PageHeaderContentData};
use crate::web::helpers::{ok_or_logged, render};
use crate::web::shell::load_shell;
use crate::web::state::AppState;
use crate::web::templates::{PageHeaderView, SectorCardView, SectorsTemplate};

#[get("/sectors")]
pub async fn sectors_page(state: web::Data<AppState>) -> impl Responder {
    let (shell, page, sectors) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "sectors"),
        api::list_sectors(&state.api),
    );

    // A missing page document is tolerated here: the list still renders
    // under the default header.
    let page = match page {
        Ok(page) => page,
        Err(e) => {
            log::error!("failed to fetch sectors page: {}", e);
            None
        }
    };
    if page.is_none() {
        log::warn!("page document for 'sectors' not found, rendering with default header");
    }

    let mut meta = state.meta(&shell, "/sectors");
    meta.set_title(
        page.as_ref().and_then(|p| p.meta_title.as_deref()),
        page.as_ref().map(|p| p.title.as_str()),
        "Our Sectors | KahraGen Engineering",
    );
    meta.set_description(
        page.as_ref().and_then(|p| p.meta_description.as_deref()),
        "Explore the sectors KahraGen Engineering serves.",
    );
    meta.set_keywords(page.as_ref().and_then(|p| p.meta_keywords.as_deref()), &[]);

    let header_block: Option<PageHeaderContentData> = page
        .as_ref()
        .and_then(|p| p.block(BlockKind::PageHeaderContent));
    let header = PageHeaderView::resolve(
        header_block.as_ref(),
        page.as_ref().map(|p| p.title.as_str()),
        "Our Sectors",
        "Explore the diverse sectors where we deliver excellence",
        &state.assets,
    );

    let sectors: Vec<SectorCardView> = ok_or_logged(sectors, "sectors")
        .iter()
        .map(|s| SectorCardView::from_sector(s, &state.assets))
        .collect();

    render(SectorsTemplate {
        shell,
        meta,
        header,
        sectors,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sectors_page);
}
