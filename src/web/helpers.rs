use actix_web::HttpResponse;
use askama::Template;

use crate::common::ApiResult;
use crate::models::{BlockKind, ContentBlock, ParagraphBlockData, SubheadingBlockData};

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Converts an auxiliary fetch failure into its benign default, logging what
/// was lost. Primary page fetches make their own missing-vs-failed decision
/// in the handlers.
pub fn ok_or_logged<T: Default>(result: ApiResult<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("failed to fetch {}: {}", what, e);
            T::default()
        }
    }
}

/// Renders one generic content block to HTML. Paragraph text is rich-editor
/// output and passes through as-is; subheading text is escaped, with levels
/// outside h2-h4 rendered as h2. Unhandled tags render nothing.
pub fn render_block(block: &ContentBlock) -> String {
    match block.kind() {
        Some(BlockKind::Paragraph) => {
            let data: ParagraphBlockData =
                serde_json::from_value(block.data.clone()).unwrap_or_default();
            data.text
        }
        Some(BlockKind::Subheading) => {
            let data: SubheadingBlockData =
                serde_json::from_value(block.data.clone()).unwrap_or_default();
            let level = match data.level.as_str() {
                "h3" => "h3",
                "h4" => "h4",
                _ => "h2",
            };
            format!("<{}>{}</{}>", level, escape_html(&data.text), level)
        }
        _ => {
            log::warn!("unsupported block type: {}", block.tag);
            String::new()
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
