use actix_web::{web, HttpRequest, HttpResponse, Responder};
use askama::Template;

use crate::services::meta::PageMeta;
use crate::web::shell::{load_shell, Shell};
use crate::web::state::AppState;
use crate::web::templates::NotFoundTemplate;

/// Terminal not-found outcome for routes whose page document is missing.
/// Takes the shell the handler already loaded so the chrome still renders.
pub fn not_found_page(shell: Shell, mut meta: PageMeta) -> HttpResponse {
    meta.title = format!("Page Not Found | {}", meta.site_name);
    meta.description = "The page you are looking for could not be found.".to_string();
    match (NotFoundTemplate { shell, meta }).render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Default service for unknown paths.
pub async fn default_not_found(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let shell = load_shell(&state.api, &state.assets).await;
    let meta = state.meta(&shell, req.path());
    not_found_page(shell, meta)
}
