use actix_web::{get, web, Responder};
use tokio::join;

use crate::api;
use crate::models::{
    BlockKind, CompanyBenefitsSectionData, JobListingsConfigurationData, JobQuery,
    PageHeaderContentData,
};
use crate::web::handlers::not_found::not_found_page;
use crate::web::helpers::{ok_or_logged, render};
use crate::web::shell::load_shell;
use crate::web::state::AppState;
use crate::web::templates::{
    BenefitView, BenefitsSectionView, CareersTemplate, JobCardView, JobListingsView,
    PageHeaderView,
};

#[get("/careers")]
pub async fn careers_page(state: web::Data<AppState>) -> impl Responder {
    let (shell, page, jobs) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "careers"),
        api::list_job_openings(&state.api, &JobQuery::default()),
    );

    let mut meta = state.meta(&shell, "/careers");

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => return not_found_page(shell, meta),
        Err(e) => {
            log::error!("failed to fetch careers page: {}", e);
            return not_found_page(shell, meta);
        }
    };

    meta.set_title(
        page.meta_title.as_deref(),
        Some(&page.title),
        "Careers | KahraGen Engineering",
    );
    meta.set_description(
        page.meta_description.as_deref(),
        "Explore career opportunities at KahraGen Engineering.",
    );
    meta.set_keywords(page.meta_keywords.as_deref(), &[]);

    let header_block: Option<PageHeaderContentData> = page.block(BlockKind::PageHeaderContent);
    let header = PageHeaderView::resolve(
        header_block.as_ref(),
        Some(&page.title),
        "Careers",
        "",
        &state.assets,
    );

    let benefits_section = page
        .block::<CompanyBenefitsSectionData>(BlockKind::CompanyBenefitsSection)
        .map(|data| BenefitsSectionView {
            title: data.section_title,
            description: data.section_description,
            benefits: data.benefits_list.iter().map(BenefitView::from_item).collect(),
        });

    // Job cards only render when the page carries a listings-configuration
    // block; the block supplies the section copy around them.
    let listings = page
        .block::<JobListingsConfigurationData>(BlockKind::JobListingsConfiguration)
        .map(|data| JobListingsView {
            title: data.section_title,
            description: data.section_description,
            jobs: ok_or_logged(jobs, "job openings")
                .iter()
                .map(JobCardView::from_job)
                .collect(),
            general_prompt: data.general_application_prompt.unwrap_or_default(),
            general_button_text: data.general_application_button_text.unwrap_or_default(),
            general_button_url: data.general_application_button_url.unwrap_or_default(),
        });

    render(CareersTemplate {
        shell,
        meta,
        header,
        benefits_section,
        listings,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(careers_page);
}
