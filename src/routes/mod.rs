//! HTTP handlers rendering the search views.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

pub mod categories;
pub mod export;
pub mod main;
pub mod upload;

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: flash alerts and the active view toggle.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use tera::escape_html;

    use crate::render::TextCell;

    #[test]
    fn expanded_text_escapes_the_exact_original() {
        let raw = "<b>Head & \"Chief\"</b> of Eng.!";

        let cell = TextCell::new(raw);
        let shown = escape_html(cell.full.as_deref().unwrap());

        assert_eq!(
            shown,
            "&lt;b&gt;Head &amp; &quot;Chief&quot;&lt;&#x2F;b&gt; of Eng.!"
        );
        let unescaped = shown
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x2F;", "/")
            .replace("&amp;", "&");
        assert_eq!(unescaped, raw);
    }

    #[test]
    fn templates_escape_record_text() {
        let mut tera = tera::Tera::default();
        tera.add_raw_template("cell.html", "<td>{{ cell.text }}</td>")
            .unwrap();
        let mut context = tera::Context::new();
        context.insert("cell", &TextCell::new("<script>alert(1)</script>"));

        let html = tera.render("cell.html", &context).unwrap();

        assert_eq!(html, "<td>&lt;script&gt;alert(1)&lt;&#x2F;script&gt;</td>");
    }
}
