use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tokio::join;

use crate::api;
use crate::models::{BlockKind, IntroSectionData, PageHeaderContentData};
use crate::web::forms::{has_filter_params, FilterQuery};
use crate::web::handlers::not_found::not_found_page;
use crate::web::helpers::{ok_or_logged, render};
use crate::web::shell::load_shell;
use crate::web::state::AppState;
use crate::web::templates::{
    ExperienceTemplate, FilterView, PageHeaderView, ProjectCardView, SectionIntroView,
};

#[get("/experience")]
pub async fn experience_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FilterQuery>,
) -> impl Responder {
    // The URL is the single source of truth for the filter. Requests whose
    // query names a filter key but is not in canonical form (sentinel or
    // empty selections, unordered keys) redirect to the canonical URL, so
    // `all` never survives in a final address.
    let raw_query = req.query_string();
    if has_filter_params(raw_query) {
        let canonical = query.canonical_query();
        if raw_query != canonical {
            let location = if canonical.is_empty() {
                "/experience".to_string()
            } else {
                format!("/experience?{}", canonical)
            };
            return HttpResponse::SeeOther()
                .insert_header(("Location", location))
                .finish();
        }
    }

    let project_query = query.to_project_query();
    let (shell, page, projects, types, regions) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "experience"),
        api::list_projects(&state.api, &project_query),
        api::list_project_types(&state.api),
        api::list_project_regions(&state.api),
    );

    let mut meta = state.meta(&shell, "/experience");

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => return not_found_page(shell, meta),
        Err(e) => {
            log::error!("failed to fetch experience page: {}", e);
            return not_found_page(shell, meta);
        }
    };

    meta.set_title(
        page.meta_title.as_deref(),
        Some(&page.title),
        "Experience & Projects | KahraGen Engineering",
    );
    meta.set_description(
        page.meta_description.as_deref(),
        "Explore KahraGen Engineering's portfolio.",
    );
    meta.set_keywords(page.meta_keywords.as_deref(), &[]);

    let header_block: Option<PageHeaderContentData> = page.block(BlockKind::PageHeaderContent);
    let header = PageHeaderView::resolve(
        header_block.as_ref(),
        Some(&page.title),
        "Experience & Projects",
        "",
        &state.assets,
    );

    let intro = page
        .block::<IntroSectionData>(BlockKind::IntroSection)
        .map(|data| SectionIntroView {
            title: data.section_title,
            description: data.section_description,
        });

    let filter = FilterView {
        types: ok_or_logged(types, "project types"),
        regions: ok_or_logged(regions, "project regions"),
        selected_type: query.selected_type().unwrap_or_else(|| "all".to_string()),
        selected_region: query.selected_region().unwrap_or_else(|| "all".to_string()),
    };

    let projects: Vec<ProjectCardView> = ok_or_logged(projects, "projects")
        .iter()
        .map(|p| ProjectCardView::from_project(p, &state.assets))
        .collect();

    render(ExperienceTemplate {
        shell,
        meta,
        header,
        intro,
        filter,
        projects,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(experience_page);
}
