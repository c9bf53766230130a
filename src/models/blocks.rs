use serde::Deserialize;
use serde_json::Value;

/// One entry of a page's `content` array. The backend stores blocks as
/// `{ "type": "...", "data": {...} }` and the payload shape depends entirely
/// on the tag, so `data` stays raw JSON until a caller asks for a concrete
/// shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub data: Value,
}

impl ContentBlock {
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_tag(&self.tag)
    }
}

/// Every block tag the backend is known to emit. Tags outside this set render
/// nothing and are logged, never treated as errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BlockKind {
    Paragraph,
    Subheading,
    Hero,
    ImageGallery,
    PageHeaderContent,
    CompanyBenefitsSection,
    JobListingsConfiguration,
    IntroSection,
    HeroSection,
    CompanyOverview,
    VisionMission,
    CtaSection,
    HomeHero,
    HomeMetricsBar,
    HomeCompanyIntro,
    HomeSectorGrid,
    HomeFeaturedProjects,
    HomeCallToAction,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Subheading => "subheading",
            Self::Hero => "hero",
            Self::ImageGallery => "image_gallery",
            Self::PageHeaderContent => "page_header_content",
            Self::CompanyBenefitsSection => "company_benefits_section",
            Self::JobListingsConfiguration => "job_listings_configuration",
            Self::IntroSection => "intro_section",
            Self::HeroSection => "hero_section",
            Self::CompanyOverview => "company_overview",
            Self::VisionMission => "vision_mission",
            Self::CtaSection => "cta_section",
            Self::HomeHero => "home_hero",
            Self::HomeMetricsBar => "home_metrics_bar",
            Self::HomeCompanyIntro => "home_company_intro",
            Self::HomeSectorGrid => "home_sector_grid",
            Self::HomeFeaturedProjects => "home_featured_projects",
            Self::HomeCallToAction => "home_call_to_action",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "paragraph" => Some(Self::Paragraph),
            "subheading" => Some(Self::Subheading),
            "hero" => Some(Self::Hero),
            "image_gallery" => Some(Self::ImageGallery),
            "page_header_content" => Some(Self::PageHeaderContent),
            "company_benefits_section" => Some(Self::CompanyBenefitsSection),
            "job_listings_configuration" => Some(Self::JobListingsConfiguration),
            "intro_section" => Some(Self::IntroSection),
            "hero_section" => Some(Self::HeroSection),
            "company_overview" => Some(Self::CompanyOverview),
            "vision_mission" => Some(Self::VisionMission),
            "cta_section" => Some(Self::CtaSection),
            "home_hero" => Some(Self::HomeHero),
            "home_metrics_bar" => Some(Self::HomeMetricsBar),
            "home_company_intro" => Some(Self::HomeCompanyIntro),
            "home_sector_grid" => Some(Self::HomeSectorGrid),
            "home_featured_projects" => Some(Self::HomeFeaturedProjects),
            "home_call_to_action" => Some(Self::HomeCallToAction),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for BlockKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unknown block tag: {}", s))
    }
}

/// Returns the raw payload of the first block with the given tag. An absent
/// block list yields `None`; duplicates of a tag after the first are never
/// consulted.
pub fn find_block_data(blocks: Option<&[ContentBlock]>, kind: BlockKind) -> Option<&Value> {
    blocks?.iter().find(|b| kind == b.tag.as_str()).map(|b| &b.data)
}

// Typed payloads, one struct per consulted tag. Fields the backend may omit
// are `Option`; required strings fall back to empty rather than failing the
// whole block.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParagraphBlockData {
    /// Rich-editor output, already HTML.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubheadingBlockData {
    #[serde(default)]
    pub text: String,
    /// "h2" | "h3" | "h4"; anything else renders as h2.
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageHeaderContentData {
    pub header_title: Option<String>,
    pub header_description: Option<String>,
    pub header_background_image_path: Option<String>,
    pub header_background_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyBenefitItem {
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyBenefitsSectionData {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
    #[serde(default)]
    pub benefits_list: Vec<CompanyBenefitItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListingsConfigurationData {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
    pub general_application_prompt: Option<String>,
    pub general_application_button_text: Option<String>,
    pub general_application_button_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntroSectionData {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricItem {
    #[serde(default)]
    pub value: String,
    pub unit: Option<String>,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeHeroData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub background_image_path: Option<String>,
    pub background_image_url: Option<String>,
    pub cta1_text: Option<String>,
    pub cta1_url: Option<String>,
    pub cta2_text: Option<String>,
    pub cta2_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeMetricsBarData {
    #[serde(default)]
    pub metrics_items: Vec<MetricItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeCompanyIntroData {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
    #[serde(default)]
    pub key_features_list: Vec<String>,
    pub learn_more_link_text: Option<String>,
    pub learn_more_link_url: Option<String>,
    #[serde(default)]
    pub intro_metrics_items: Vec<MetricItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeSectorGridData {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeFeaturedProjectsData {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
    pub view_all_text: Option<String>,
    pub view_all_url: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeCallToActionData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub background_image_path: Option<String>,
    pub background_image_url: Option<String>,
    pub cta1_text: Option<String>,
    pub cta1_url: Option<String>,
    pub cta2_text: Option<String>,
    pub cta2_url: Option<String>,
}

// About-page blocks carry full placeholder copy in their defaults; the whole
// default is used when the block is absent, never merged field-by-field into
// a partial one.

#[derive(Debug, Clone, Deserialize)]
pub struct AboutHeroData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub background_image_url: String,
}

impl Default for AboutHeroData {
    fn default() -> Self {
        Self {
            title: "About KahraGen Engineering".into(),
            subtitle: "Learn about our company, our values, and our vision for the future."
                .into(),
            background_image_url:
                "https://images.pexels.com/photos/416405/pexels-photo-416405.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                    .into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyOverviewData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub paragraph1_html: String,
    #[serde(default)]
    pub paragraph2_html: String,
    #[serde(default)]
    pub paragraph3_html: String,
    #[serde(default)]
    pub image_url: String,
}

impl Default for CompanyOverviewData {
    fn default() -> Self {
        Self {
            title: "Our Company".into(),
            subtitle: "Empowering Progress with Sustainability".into(),
            paragraph1_html:
                "<p>Default company overview paragraph 1. Please update this content in the CMS.</p>"
                    .into(),
            paragraph2_html: String::new(),
            paragraph3_html: String::new(),
            image_url:
                "https://images.pexels.com/photos/2760242/pexels-photo-2760242.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                    .into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionMissionData {
    #[serde(default)]
    pub vision_title: String,
    #[serde(default)]
    pub vision_html_p1: String,
    #[serde(default)]
    pub vision_html_p2: String,
    #[serde(default)]
    pub vision_html_p3: String,
    #[serde(default)]
    pub mission_title: String,
    #[serde(default)]
    pub mission_html_p1: String,
    #[serde(default)]
    pub mission_html_p2: String,
    #[serde(default)]
    pub mission_html_p3: String,
}

impl Default for VisionMissionData {
    fn default() -> Self {
        Self {
            vision_title: "Our Vision".into(),
            vision_html_p1: "<p>Default vision content p1. Update in CMS.</p>".into(),
            vision_html_p2: String::new(),
            vision_html_p3: String::new(),
            mission_title: "Our Mission".into(),
            mission_html_p1: "<p>Default mission content p1. Update in CMS.</p>".into(),
            mission_html_p2: String::new(),
            mission_html_p3: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CtaSectionData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
    #[serde(default)]
    pub background_image_url: String,
}

impl Default for CtaSectionData {
    fn default() -> Self {
        Self {
            title: "Join Our Team of Experts".into(),
            paragraph: "KahraGen Engineering is always looking for talented professionals..."
                .into(),
            button_text: "Contact Us".into(),
            button_link: "/contact".into(),
            background_image_url:
                "https://images.pexels.com/photos/414837/pexels-photo-414837.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                    .into(),
        }
    }
}
