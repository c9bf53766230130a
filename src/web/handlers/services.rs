use actix_web::{get, web, Responder};
use tokio::join;

use crate::api;
use crate::models::{BlockKind, PageHeaderContentData};
use crate::web::handlers::not_found::not_found_page;
use crate::web::helpers::{ok_or_logged, render};
use crate::web::shell::load_shell;
use crate::web::state::AppState;
use crate::web::templates::{PageHeaderView, ServiceCardView, ServicesTemplate};

#[get("/services")]
pub async fn services_page(state: web::Data<AppState>) -> impl Responder {
    let (shell, page, services) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "services"),
        api::list_services(&state.api),
    );

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            log::error!("failed to fetch services page: {}", e);
            None
        }
    };
    let services = ok_or_logged(services, "services");

    let mut meta = state.meta(&shell, "/services");

    // Not-found only when there is nothing at all to show.
    if page.is_none() && services.is_empty() {
        return not_found_page(shell, meta);
    }

    meta.set_title(
        page.as_ref().and_then(|p| p.meta_title.as_deref()),
        page.as_ref().map(|p| p.title.as_str()),
        "Our Services | KahraGen Engineering",
    );
    meta.set_description(
        page.as_ref().and_then(|p| p.meta_description.as_deref()),
        "Explore KahraGen\u{2019}s full-service engineering offering.",
    );
    meta.set_keywords(page.as_ref().and_then(|p| p.meta_keywords.as_deref()), &[]);

    let header_block: Option<PageHeaderContentData> = page
        .as_ref()
        .and_then(|p| p.block(BlockKind::PageHeaderContent));
    let header = PageHeaderView::resolve(
        header_block.as_ref(),
        page.as_ref().map(|p| p.title.as_str()),
        "Our Services",
        "Explore our comprehensive service offerings.",
        &state.assets,
    );

    let services: Vec<ServiceCardView> = services.iter().map(ServiceCardView::from_service).collect();

    render(ServicesTemplate {
        shell,
        meta,
        header,
        services,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(services_page);
}
