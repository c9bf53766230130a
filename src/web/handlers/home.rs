use actix_web::{get, web, HttpResponse, Responder};
use tokio::join;

use crate::api;
use crate::models::{
    BlockKind, HomeCallToActionData, HomeCompanyIntroData, HomeFeaturedProjectsData, HomeHeroData,
    HomeMetricsBarData, HomeSectorGridData, ProjectQuery,
};
use crate::services::meta::PageMeta;
use crate::web::helpers::{ok_or_logged, render};
use crate::web::shell::{load_shell, Shell};
use crate::web::state::AppState;
use crate::web::templates::{
    BannerView, CompanyIntroView, ErrorTemplate, FeaturedProjectsView, HomeTemplate, MetricView,
    ProjectCardView, SectionIntroView, SectorCardView,
};

const FALLBACK_TITLE: &str = "KahraGen Engineering | Powering Progress";
const FALLBACK_DESCRIPTION: &str = "Innovative and sustainable engineering solutions.";

#[get("/")]
pub async fn home_page(state: web::Data<AppState>) -> impl Responder {
    let (shell, page, sectors) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "home"),
        api::list_sectors(&state.api),
    );

    let mut meta = state.meta(&shell, "/");

    // The homepage degrades to an inline error page instead of a 404 when
    // its document cannot be loaded.
    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => {
            log::error!("home page document is missing");
            return home_error(shell, meta);
        }
        Err(e) => {
            log::error!("failed to fetch home page: {}", e);
            return home_error(shell, meta);
        }
    };

    meta.set_title(page.meta_title.as_deref(), None, FALLBACK_TITLE);
    meta.set_description(page.meta_description.as_deref(), FALLBACK_DESCRIPTION);
    meta.set_keywords(page.meta_keywords.as_deref(), &[]);

    let hero = page
        .block::<HomeHeroData>(BlockKind::HomeHero)
        .map(|data| BannerView::from_hero(data, &state.assets));

    let metrics: Vec<MetricView> = page
        .block::<HomeMetricsBarData>(BlockKind::HomeMetricsBar)
        .map(|data| data.metrics_items.iter().map(MetricView::from_item).collect())
        .unwrap_or_default();

    let intro = page
        .block::<HomeCompanyIntroData>(BlockKind::HomeCompanyIntro)
        .map(|data| CompanyIntroView {
            title: data.section_title,
            description_html: data.section_description,
            features: data.key_features_list,
            learn_more_text: data.learn_more_link_text.unwrap_or_default(),
            learn_more_url: data.learn_more_link_url.unwrap_or_default(),
            metrics: data
                .intro_metrics_items
                .iter()
                .map(MetricView::from_item)
                .collect(),
        });

    let sector_grid = page
        .block::<HomeSectorGridData>(BlockKind::HomeSectorGrid)
        .map(|data| SectionIntroView {
            title: data.section_title,
            description: data.section_description,
        });
    let sectors: Vec<SectorCardView> = ok_or_logged(sectors, "sectors")
        .iter()
        .map(|s| SectorCardView::from_sector(s, &state.assets))
        .collect();

    // Featured projects are only fetched when the page asks for them, with
    // the block's limit (default 3). The section drops out when the fetch
    // comes back empty.
    let featured = match page.block::<HomeFeaturedProjectsData>(BlockKind::HomeFeaturedProjects) {
        Some(data) => {
            let query = ProjectQuery::featured(data.limit.unwrap_or(3));
            let projects = ok_or_logged(
                api::list_projects(&state.api, &query).await,
                "featured projects",
            );
            if projects.is_empty() {
                None
            } else {
                Some(FeaturedProjectsView {
                    title: if data.section_title.is_empty() {
                        "Featured Projects".to_string()
                    } else {
                        data.section_title
                    },
                    description: data.section_description,
                    view_all_text: data.view_all_text.unwrap_or_default(),
                    view_all_url: data.view_all_url.unwrap_or_default(),
                    projects: projects
                        .iter()
                        .map(|p| ProjectCardView::from_project(p, &state.assets))
                        .collect(),
                })
            }
        }
        None => None,
    };

    let call_to_action = page
        .block::<HomeCallToActionData>(BlockKind::HomeCallToAction)
        .map(|data| BannerView::from_call_to_action(data, &state.assets));

    render(HomeTemplate {
        shell,
        meta,
        hero,
        metrics,
        intro,
        sector_grid,
        sectors,
        featured,
        call_to_action,
    })
}

fn home_error(shell: Shell, mut meta: PageMeta) -> HttpResponse {
    meta.set_title(None, None, FALLBACK_TITLE);
    meta.set_description(None, FALLBACK_DESCRIPTION);
    render(ErrorTemplate {
        shell,
        meta,
        message: "Error loading homepage content. Please try again later.".to_string(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home_page);
}
