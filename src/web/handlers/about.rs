use actix_web::{get, web, Responder};
use tokio::join;

use crate::api;
use crate::models::{
    AboutHeroData, BlockKind, CompanyOverviewData, CtaSectionData, VisionMissionData,
};
use crate::web::handlers::not_found::not_found_page;
use crate::web::helpers::{ok_or_logged, render};
use crate::web::shell::load_shell;
use crate::web::state::AppState;
use crate::web::templates::{
    AboutOverviewView, AboutTemplate, CoreValueView, CtaView, PageHeaderView, VisionMissionView,
};

#[get("/about")]
pub async fn about_page(state: web::Data<AppState>) -> impl Responder {
    let (shell, page, values) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "about"),
        api::list_core_values(&state.api),
    );

    let mut meta = state.meta(&shell, "/about");

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => return not_found_page(shell, meta),
        Err(e) => {
            log::error!("failed to fetch about page: {}", e);
            return not_found_page(shell, meta);
        }
    };

    meta.set_title(
        page.meta_title.as_deref(),
        Some(&page.title),
        "About Us | KahraGen Engineering",
    );
    meta.set_description(
        page.meta_description.as_deref(),
        "Learn more about KahraGen Engineering, our mission, vision, and values.",
    );
    meta.set_keywords(
        page.meta_keywords.as_deref(),
        &["about kahragen", "company values", "engineering leadership"],
    );

    // Each about block is defaulted wholesale: a missing or malformed block
    // yields the full placeholder payload, never a field-by-field merge.
    let hero: AboutHeroData = page.block_or_default(BlockKind::HeroSection);
    let overview: CompanyOverviewData = page.block_or_default(BlockKind::CompanyOverview);
    let vision_mission: VisionMissionData = page.block_or_default(BlockKind::VisionMission);
    let cta: CtaSectionData = page.block_or_default(BlockKind::CtaSection);

    let values: Vec<CoreValueView> = ok_or_logged(values, "core values")
        .iter()
        .map(CoreValueView::from_value)
        .collect();

    render(AboutTemplate {
        header: PageHeaderView {
            title: hero.title,
            description: hero.subtitle,
            background_image_url: state.assets.resolve(Some(&hero.background_image_url)),
        },
        overview: AboutOverviewView {
            title: overview.title,
            subtitle: overview.subtitle,
            paragraphs_html: non_empty(vec![
                overview.paragraph1_html,
                overview.paragraph2_html,
                overview.paragraph3_html,
            ]),
            image_url: state.assets.resolve(Some(&overview.image_url)),
        },
        vision_mission: VisionMissionView {
            vision_title: vision_mission.vision_title,
            vision_paragraphs_html: non_empty(vec![
                vision_mission.vision_html_p1,
                vision_mission.vision_html_p2,
                vision_mission.vision_html_p3,
            ]),
            mission_title: vision_mission.mission_title,
            mission_paragraphs_html: non_empty(vec![
                vision_mission.mission_html_p1,
                vision_mission.mission_html_p2,
                vision_mission.mission_html_p3,
            ]),
        },
        values,
        cta: CtaView {
            title: cta.title,
            paragraph: cta.paragraph,
            button_text: cta.button_text,
            button_link: cta.button_link,
            background_image_url: state.assets.resolve(Some(&cta.background_image_url)),
        },
        shell,
        meta,
    })
}

fn non_empty(paragraphs: Vec<String>) -> Vec<String> {
    paragraphs.into_iter().filter(|p| !p.is_empty()).collect()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(about_page);
}
