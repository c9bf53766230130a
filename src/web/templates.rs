use askama::Template;

use crate::assets::AssetUrlResolver;
use crate::models::{
    CompanyBenefitItem, CoreValue, HomeCallToActionData, HomeHeroData, JobOpening, MetricItem,
    PageHeaderContentData, Project, Sector, Service,
};
use crate::services::icons;
use crate::services::meta::PageMeta;
use crate::web::shell::Shell;

/// Shared page-header band. `description` and `background_image_url` may be
/// empty; the template drops the corresponding markup.
pub struct PageHeaderView {
    pub title: String,
    pub description: String,
    pub background_image_url: String,
}

impl PageHeaderView {
    /// Header block fields win over the page title, which wins over the
    /// route's own fallback copy.
    pub fn resolve(
        block: Option<&PageHeaderContentData>,
        page_title: Option<&str>,
        fallback_title: &str,
        fallback_description: &str,
        assets: &AssetUrlResolver,
    ) -> Self {
        let title = block
            .and_then(|b| b.header_title.as_deref())
            .filter(|t| !t.is_empty())
            .or(page_title)
            .unwrap_or(fallback_title)
            .to_string();
        let description = block
            .and_then(|b| b.header_description.as_deref())
            .filter(|d| !d.is_empty())
            .unwrap_or(fallback_description)
            .to_string();
        let background_image_url = block
            .map(|b| {
                image_url(
                    assets,
                    b.header_background_image_url.as_deref(),
                    b.header_background_image_path.as_deref(),
                )
            })
            .unwrap_or_default();
        Self {
            title,
            description,
            background_image_url,
        }
    }
}

/// Full-bleed banner with up to two calls to action; covers the homepage
/// hero and the closing call-to-action band, which share a payload shape.
pub struct BannerView {
    pub title: String,
    pub description: String,
    pub background_image_url: String,
    pub cta1_text: String,
    pub cta1_url: String,
    pub cta2_text: String,
    pub cta2_url: String,
}

impl BannerView {
    pub fn from_hero(data: HomeHeroData, assets: &AssetUrlResolver) -> Self {
        Self {
            title: data.title,
            description: data.description,
            background_image_url: image_url(
                assets,
                data.background_image_url.as_deref(),
                data.background_image_path.as_deref(),
            ),
            cta1_text: data.cta1_text.unwrap_or_default(),
            cta1_url: data.cta1_url.unwrap_or_default(),
            cta2_text: data.cta2_text.unwrap_or_default(),
            cta2_url: data.cta2_url.unwrap_or_default(),
        }
    }

    pub fn from_call_to_action(data: HomeCallToActionData, assets: &AssetUrlResolver) -> Self {
        Self {
            title: data.title,
            description: data.description,
            background_image_url: image_url(
                assets,
                data.background_image_url.as_deref(),
                data.background_image_path.as_deref(),
            ),
            cta1_text: data.cta1_text.unwrap_or_default(),
            cta1_url: data.cta1_url.unwrap_or_default(),
            cta2_text: data.cta2_text.unwrap_or_default(),
            cta2_url: data.cta2_url.unwrap_or_default(),
        }
    }
}

pub struct MetricView {
    pub value: String,
    pub unit: String,
    pub label: String,
}

impl MetricView {
    pub fn from_item(item: &MetricItem) -> Self {
        Self {
            value: item.value.clone(),
            unit: item.unit.clone().unwrap_or_default(),
            label: item.label.clone(),
        }
    }
}

pub struct CompanyIntroView {
    pub title: String,
    pub description_html: String,
    pub features: Vec<String>,
    pub learn_more_text: String,
    pub learn_more_url: String,
    pub metrics: Vec<MetricView>,
}

/// Centered section heading used by the sector grid and intro sections.
pub struct SectionIntroView {
    pub title: String,
    pub description: String,
}

pub struct SectorCardView {
    pub title: String,
    pub icon: &'static str,
    pub description_html: String,
    pub image_url: String,
    pub features: Vec<String>,
}

impl SectorCardView {
    pub fn from_sector(sector: &Sector, assets: &AssetUrlResolver) -> Self {
        Self {
            title: sector.title.clone(),
            icon: icons::sector_icon(&sector.icon),
            description_html: sector.description.clone(),
            image_url: assets.resolve(sector.image_url.as_deref()),
            features: sector.features.clone(),
        }
    }
}

pub struct ServiceCardView {
    pub title: String,
    pub icon: &'static str,
    pub description_html: String,
    pub details: Vec<String>,
}

impl ServiceCardView {
    pub fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            icon: icons::service_icon(&service.icon),
            description_html: service.description.clone(),
            details: service.details.clone(),
        }
    }
}

pub struct ProjectCardView {
    pub title: String,
    pub project_type: String,
    pub capacity: String,
    pub short_description: String,
    pub description_html: String,
    pub location: String,
    /// "June 2024" style; empty when the project has no date.
    pub date: String,
    pub year: String,
    pub image_url: String,
    pub details: Vec<String>,
}

impl ProjectCardView {
    pub fn from_project(project: &Project, assets: &AssetUrlResolver) -> Self {
        let (date, year) = format_project_date(&project.date);
        Self {
            title: project.title.clone(),
            project_type: project.project_type.clone(),
            capacity: project.capacity.clone(),
            short_description: project.short_description.clone(),
            description_html: project.description.clone(),
            location: project.location.clone(),
            date,
            year,
            image_url: assets.resolve(project.image_url.as_deref()),
            details: project
                .details
                .iter()
                .map(|d| match d.as_str() {
                    Some(s) => s.to_string(),
                    None => d.to_string(),
                })
                .collect(),
        }
    }
}

pub struct FeaturedProjectsView {
    pub title: String,
    pub description: String,
    pub view_all_text: String,
    pub view_all_url: String,
    pub projects: Vec<ProjectCardView>,
}

pub struct BenefitView {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

impl BenefitView {
    pub fn from_item(item: &CompanyBenefitItem) -> Self {
        Self {
            icon: icons::benefit_icon(&item.icon_name),
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }
}

pub struct BenefitsSectionView {
    pub title: String,
    pub description: String,
    pub benefits: Vec<BenefitView>,
}

pub struct JobCardView {
    pub title: String,
    pub department: String,
    pub job_type: String,
    pub location: String,
    /// "6/15/2024" style; empty when unknown.
    pub posted: String,
    pub description_html: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub application_url: String,
    pub application_instructions: String,
}

impl JobCardView {
    pub fn from_job(job: &JobOpening) -> Self {
        Self {
            title: job.title.clone(),
            department: job.department.clone().unwrap_or_default(),
            job_type: job.job_type.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            posted: format_posted_date(job.posted_date.as_deref()),
            description_html: job.description.clone(),
            responsibilities: job.responsibilities.clone().unwrap_or_default(),
            requirements: job.requirements.clone().unwrap_or_default(),
            application_url: job.application_url.clone().unwrap_or_default(),
            application_instructions: job.application_instructions.clone().unwrap_or_default(),
        }
    }
}

pub struct JobListingsView {
    pub title: String,
    pub description: String,
    pub jobs: Vec<JobCardView>,
    pub general_prompt: String,
    pub general_button_text: String,
    pub general_button_url: String,
}

pub struct CoreValueView {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

impl CoreValueView {
    pub fn from_value(value: &CoreValue) -> Self {
        Self {
            icon: icons::core_value_icon(value.icon_name.as_deref().unwrap_or_default()),
            title: value.title.clone(),
            description: value.description.clone(),
        }
    }
}

pub struct AboutOverviewView {
    pub title: String,
    pub subtitle: String,
    pub paragraphs_html: Vec<String>,
    pub image_url: String,
}

pub struct VisionMissionView {
    pub vision_title: String,
    pub vision_paragraphs_html: Vec<String>,
    pub mission_title: String,
    pub mission_paragraphs_html: Vec<String>,
}

pub struct CtaView {
    pub title: String,
    pub paragraph: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image_url: String,
}

pub struct ContactInfoView {
    pub title: String,
    pub office_title: String,
    pub address_lines: Vec<String>,
    pub phone: String,
    pub email: String,
    pub office_hours: Vec<String>,
}

impl ContactInfoView {
    pub fn phone_href(&self) -> String {
        self.phone.split_whitespace().collect()
    }
}

pub struct MapView {
    pub iframe_url: String,
    pub title: String,
}

/// Form state echoed back to the contact page. On first render everything is
/// empty; after a POST the entered values and any per-field messages come
/// back with it.
#[derive(Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub name_error: String,
    pub email_error: String,
    pub subject_error: String,
    pub message_error: String,
    pub sent: bool,
    pub status_message: String,
    pub error_message: String,
}

pub struct FilterView {
    pub types: Vec<String>,
    pub regions: Vec<String>,
    pub selected_type: String,
    pub selected_region: String,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub hero: Option<BannerView>,
    pub metrics: Vec<MetricView>,
    pub intro: Option<CompanyIntroView>,
    pub sector_grid: Option<SectionIntroView>,
    pub sectors: Vec<SectorCardView>,
    pub featured: Option<FeaturedProjectsView>,
    pub call_to_action: Option<BannerView>,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub header: PageHeaderView,
    pub overview: AboutOverviewView,
    pub vision_mission: VisionMissionView,
    pub values: Vec<CoreValueView>,
    pub cta: CtaView,
}

#[derive(Template)]
#[template(path = "pages/sectors.html")]
pub struct SectorsTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub header: PageHeaderView,
    pub sectors: Vec<SectorCardView>,
}

#[derive(Template)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub header: PageHeaderView,
    pub services: Vec<ServiceCardView>,
}

#[derive(Template)]
#[template(path = "pages/experience.html")]
pub struct ExperienceTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub header: PageHeaderView,
    pub intro: Option<SectionIntroView>,
    pub filter: FilterView,
    pub projects: Vec<ProjectCardView>,
}

#[derive(Template)]
#[template(path = "pages/careers.html")]
pub struct CareersTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub header: PageHeaderView,
    pub benefits_section: Option<BenefitsSectionView>,
    pub listings: Option<JobListingsView>,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub header: PageHeaderView,
    pub intro_html: String,
    pub info: ContactInfoView,
    pub form_title: String,
    pub form: ContactFormView,
    pub map: MapView,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
}

/// Inline degradation for the homepage when its page document cannot be
/// loaded at all; other routes 404 instead.
#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate {
    pub shell: Shell,
    pub meta: PageMeta,
    pub message: String,
}

/// Prefers the absolute URL the backend precomputed, then the raw storage
/// path, and resolves either against the configured public base.
pub fn image_url(assets: &AssetUrlResolver, url: Option<&str>, path: Option<&str>) -> String {
    match url {
        Some(u) if !u.is_empty() => assets.resolve(Some(u)),
        _ => assets.resolve(path),
    }
}

fn format_project_date(raw: &str) -> (String, String) {
    if raw.len() < 10 {
        return (raw.to_string(), String::new());
    }
    match chrono::NaiveDate::parse_from_str(&raw[..10], "%Y-%m-%d") {
        Ok(d) => (d.format("%B %Y").to_string(), d.format("%Y").to_string()),
        Err(_) => (raw.to_string(), String::new()),
    }
}

fn format_posted_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| d.len() >= 10) else {
        return date.unwrap_or_default().to_string();
    };
    match chrono::NaiveDate::parse_from_str(&raw[..10], "%Y-%m-%d") {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
