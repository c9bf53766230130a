use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kahragen_web::api::ApiClient;
use kahragen_web::assets::AssetUrlResolver;
use kahragen_web::web::AppState;

pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri())
}

pub fn test_state(server: &MockServer) -> AppState {
    AppState {
        api: test_client(server),
        assets: AssetUrlResolver::new(Some("https://cms.kahragen.test".to_string())),
        base_url: "https://kahragen.test".to_string(),
        analytics: false,
    }
}

/// Mounts a GET route answering 200 with the payload wrapped in the `data`
/// envelope the backend uses everywhere.
pub async fn mount_data(server: &MockServer, route: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(server)
        .await;
}

/// Mounts the settings record plus all three navigation locations, the
/// fetches every page handler performs for the shared shell.
pub async fn mount_shell(server: &MockServer) {
    mount_data(server, "/site-settings", seed_site_settings()).await;
    mount_data(server, "/navigation/header", seed_header_navigation()).await;
    mount_data(
        server,
        "/navigation/footer_quick_links",
        seed_quick_links_navigation(),
    )
    .await;
    mount_data(
        server,
        "/navigation/footer_legal_links",
        seed_legal_links_navigation(),
    )
    .await;
}

pub fn seed_site_settings() -> Value {
    json!({
        "id": 1,
        "site_name": "KahraGen Engineering",
        "site_slogan": "Powering Progress with Sustainable Engineering",
        "default_meta_title": "KahraGen Engineering | Powering Progress",
        "default_meta_description": "Innovative and sustainable engineering solutions across power, water, and industry.",
        "default_meta_keywords": ["engineering", "energy", "sustainability"],
        "contact_email": "projects@kahragen.com",
        "contact_phone": "+971 4 123 4567",
        "contact_address": "Jumeirah Lakes Towers\nDubai, UAE",
        "footer_description": "Powering Progress with Sustainable Engineering.",
        "footer_copyright_text": null,
        "social_media_links": { "linkedin": "https://www.linkedin.com/company/kahragen" },
        "office_hours_raw": "Sun - Thu: 8:00 AM - 6:00 PM\nFri - Sat: Closed",
        "map_iframe_url": null,
        "map_title": null,
        "contact_page_info_title": "Contact Information",
        "contact_page_form_title": "Get in Touch"
    })
}

pub fn seed_nav_item(
    id: i64,
    label: &str,
    url: &str,
    location: &str,
    order: i32,
    is_active: bool,
) -> Value {
    json!({
        "id": id,
        "label": label,
        "url": url,
        "target": "_self",
        "location": location,
        "order": order,
        "parent_id": null,
        "is_active": is_active
    })
}

/// Header items arrive out of order and include one inactive entry, so
/// rendering exercises both the sort and the active filter.
pub fn seed_header_navigation() -> Value {
    Value::Array(vec![
        seed_nav_item(2, "Company Profile", "/about", "header", 2, true),
        seed_nav_item(1, "Start Here", "/", "header", 1, true),
        seed_nav_item(3, "Hidden Page", "/hidden", "header", 3, false),
    ])
}

pub fn seed_quick_links_navigation() -> Value {
    Value::Array(vec![
        seed_nav_item(101, "About Us", "/about", "footer_quick_links", 1, true),
        seed_nav_item(102, "Careers", "/careers", "footer_quick_links", 2, true),
    ])
}

pub fn seed_legal_links_navigation() -> Value {
    Value::Array(vec![seed_nav_item(
        201,
        "Privacy Policy",
        "/privacy-policy",
        "footer_legal_links",
        1,
        true,
    )])
}

pub fn seed_home_page() -> Value {
    json!({
        "id": 10,
        "title": "Home",
        "slug": "home",
        "meta_title": "KahraGen Engineering | Powering Progress",
        "meta_description": "Innovative and sustainable engineering solutions.",
        "meta_keywords": null,
        "header_image_path": null,
        "header_image_url": null,
        "published": true,
        "content": [
            {
                "type": "home_hero",
                "data": {
                    "title": "Powering Progress with Sustainable Engineering",
                    "description": "From conventional power to renewables, we deliver projects that last.",
                    "background_image_url": "https://images.example.com/hero.jpg",
                    "cta1_text": "Explore Our Services",
                    "cta1_url": "/services",
                    "cta2_text": "Get in Touch",
                    "cta2_url": "/contact"
                }
            },
            {
                "type": "home_metrics_bar",
                "data": {
                    "metrics_items": [
                        { "value": "500", "unit": "+", "label": "Projects Delivered" },
                        { "value": "25", "unit": null, "label": "Years of Experience" }
                    ]
                }
            },
            {
                "type": "home_sector_grid",
                "data": {
                    "section_title": "Sectors We Serve",
                    "section_description": "Specialized consultancy across the energy landscape."
                }
            },
            {
                "type": "home_featured_projects",
                "data": {
                    "section_title": "Featured Projects",
                    "section_description": "A selection of recent work.",
                    "view_all_text": "View All Projects",
                    "view_all_url": "/experience",
                    "limit": 2
                }
            }
        ]
    })
}

pub fn seed_about_page() -> Value {
    json!({
        "id": 11,
        "title": "About Us",
        "slug": "about",
        "meta_title": "About KahraGen | KahraGen Engineering",
        "meta_description": "Who we are and what we stand for.",
        "meta_keywords": ["about", "engineering consultancy"],
        "header_image_path": null,
        "header_image_url": null,
        "published": true,
        "content": [
            { "type": "paragraph", "data": { "text": "<p>Founded in Dubai in 2001.</p>" } },
            { "type": "subheading", "data": { "text": "Our Story", "level": "h3" } }
        ]
    })
}

pub fn seed_experience_page() -> Value {
    json!({
        "id": 30,
        "title": "Experience & Projects",
        "slug": "experience",
        "meta_title": null,
        "meta_description": null,
        "meta_keywords": null,
        "header_image_path": null,
        "header_image_url": null,
        "published": true,
        "content": [
            {
                "type": "intro_section",
                "data": {
                    "section_title": "Our Track Record",
                    "section_description": "Two decades of delivery across the region."
                }
            }
        ]
    })
}

pub fn seed_careers_page() -> Value {
    json!({
        "id": 50,
        "title": "Careers",
        "slug": "careers",
        "meta_title": null,
        "meta_description": null,
        "meta_keywords": null,
        "header_image_path": null,
        "header_image_url": null,
        "published": true,
        "content": [
            {
                "type": "company_benefits_section",
                "data": {
                    "section_title": "Why Join KahraGen",
                    "section_description": "What we offer our people.",
                    "benefits_list": [
                        {
                            "icon_name": "GraduationCap",
                            "title": "Professional Growth",
                            "description": "Training and certification support."
                        }
                    ]
                }
            },
            {
                "type": "job_listings_configuration",
                "data": {
                    "section_title": "Open Positions",
                    "section_description": "Current vacancies across our offices.",
                    "general_application_prompt": "No matching role at the moment?",
                    "general_application_button_text": "Send a General Application",
                    "general_application_button_url": "mailto:careers@kahragen.com"
                }
            }
        ]
    })
}

pub fn seed_contact_page() -> Value {
    json!({
        "id": 40,
        "title": "Contact Us",
        "slug": "contact",
        "meta_title": null,
        "meta_description": null,
        "meta_keywords": null,
        "header_image_path": null,
        "header_image_url": null,
        "published": true,
        "content": [
            {
                "type": "paragraph",
                "data": { "text": "<p>We would love to hear about your project.</p>" }
            }
        ]
    })
}

pub fn seed_project(id: i64, title: &str, slug: &str, project_type: &str, region: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": slug,
        "description": "<p>Full engineering scope from design to commissioning.</p>",
        "short_description": "EPC management for a regional flagship.",
        "location": "Dubai, UAE",
        "region": region,
        "capacity": "150 MW",
        "type": project_type,
        "date": "2024-03-01",
        "image": null,
        "image_url": "https://images.example.com/project.jpg",
        "details": ["SCADA integration", "Grid compliance studies"],
        "published": true
    })
}

pub fn seed_sector(id: i64, title: &str, slug: &str, icon: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": title,
        "description": "<p>Generation, transmission, and distribution consultancy.</p>",
        "icon": icon,
        "image": null,
        "image_url": "https://images.example.com/sector.jpg",
        "features": ["Feasibility studies", "Owner's engineering"],
        "order": 1,
        "published": true
    })
}

pub fn seed_service(id: i64, title: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": title,
        "description": "<p>End-to-end design authority for high-voltage assets.</p>",
        "icon": "Zap",
        "details": ["Transmission line design", "Substation engineering"],
        "order": 1,
        "published": true
    })
}

pub fn seed_job(id: i64, title: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": slug,
        "department": "Electrical Engineering",
        "location": "Dubai, UAE",
        "job_type": "Full-time",
        "description": "<p>Lead protection and control design for transmission projects.</p>",
        "responsibilities": ["Prepare protection schemes", "Review vendor drawings"],
        "requirements": ["BSc in Electrical Engineering", "8+ years in T&D"],
        "posted_date": "2026-06-15",
        "closing_date": null,
        "application_url": "https://jobs.kahragen.com/senior-electrical-engineer",
        "application_instructions": null,
        "is_active": true,
        "order": 1
    })
}
