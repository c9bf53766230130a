use actix_web::{get, post, web, HttpResponse, Responder};
use tokio::join;

use crate::api;
use crate::common::ApiError;
use crate::models::{BlockKind, PageHeaderContentData};
use crate::web::forms::ContactForm;
use crate::web::handlers::not_found::not_found_page;
use crate::web::helpers::{render, render_block};
use crate::web::shell::load_shell;
use crate::web::state::AppState;
use crate::web::templates::{
    ContactFormView, ContactInfoView, ContactTemplate, MapView, PageHeaderView,
};

const DEFAULT_MAP_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3610.515951439259!2d55.14950061500928!3d25.08169018390106!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3e5f6b3ed980a8c7%3A0x3e3cf248e430179b!2sJumeirah%20Lakes%20Towers!5e0!3m2!1sen!2sae!4v1620000000000!5m2!1sen!2sae";

#[get("/contact")]
pub async fn contact_page(state: web::Data<AppState>) -> impl Responder {
    render_contact(&state, ContactFormView::default()).await
}

/// Server-side form handling: reject locally-invalid submissions without
/// touching the backend, forward valid ones, and re-render the page with
/// the outcome either way. The form keeps its values except after success.
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let form = form.into_inner();
    let errors = form.validate();

    let mut view = ContactFormView {
        name: form.name.clone(),
        email: form.email.clone(),
        subject: form.subject.clone(),
        message: form.message.clone(),
        ..ContactFormView::default()
    };

    if errors.is_empty() {
        match api::submit_contact_form(&state.api, &form.to_submission()).await {
            Ok(message) => {
                view = ContactFormView {
                    sent: true,
                    status_message: message
                        .unwrap_or_else(|| "We'll get back to you as soon as possible.".to_string()),
                    ..ContactFormView::default()
                };
            }
            Err(e) => {
                log::error!("contact form submission failed: {}", e);
                view.error_message = match &e {
                    ApiError::Backend { .. } => e.to_string(),
                    _ => "Please try again later.".to_string(),
                };
            }
        }
    } else {
        for (field, message) in errors {
            match field {
                "name" => view.name_error = message.to_string(),
                "email" => view.email_error = message.to_string(),
                "subject" => view.subject_error = message.to_string(),
                "message" => view.message_error = message.to_string(),
                _ => {}
            }
        }
    }

    render_contact(&state, view).await
}

async fn render_contact(state: &AppState, form: ContactFormView) -> HttpResponse {
    let (shell, page) = join!(
        load_shell(&state.api, &state.assets),
        api::get_page_by_slug(&state.api, "contact"),
    );

    let mut meta = state.meta(&shell, "/contact");

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => return not_found_page(shell, meta),
        Err(e) => {
            log::error!("failed to fetch contact page: {}", e);
            return not_found_page(shell, meta);
        }
    };
    // The info panel and map are meaningless without a real settings
    // record; this route treats settings as primary content.
    if !shell.settings_found {
        return not_found_page(shell, meta);
    }

    meta.set_title(
        page.meta_title.as_deref(),
        Some(&page.title),
        "Contact Us | KahraGen Engineering",
    );
    meta.set_description(
        page.meta_description.as_deref(),
        "Contact KahraGen Engineering for inquiries.",
    );
    meta.set_keywords(page.meta_keywords.as_deref(), &[]);

    let header_block: Option<PageHeaderContentData> = page.block(BlockKind::PageHeaderContent);
    let header = PageHeaderView::resolve(
        header_block.as_ref(),
        Some(&page.title),
        "Contact Us",
        "",
        &state.assets,
    );

    let intro_html = page
        .content
        .iter()
        .find(|b| BlockKind::Paragraph == b.tag.as_str())
        .map(render_block)
        .unwrap_or_default();

    let settings = &shell.settings;
    let info = ContactInfoView {
        title: settings
            .contact_page_info_title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Contact Information".to_string()),
        office_title: "Dubai Headquarters".to_string(),
        address_lines: settings.address_lines(),
        phone: settings.contact_phone.clone().unwrap_or_default(),
        email: settings.contact_email.clone().unwrap_or_default(),
        office_hours: settings.office_hours(),
    };
    let form_title = settings
        .contact_page_form_title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Get in Touch".to_string());
    let map = MapView {
        iframe_url: settings
            .map_iframe_url
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_MAP_URL.to_string()),
        title: settings
            .map_title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "KahraGen Engineering Office Location".to_string()),
    };

    render(ContactTemplate {
        shell,
        meta,
        header,
        intro_html,
        info,
        form_title,
        form,
        map,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_page).service(submit_contact);
}
