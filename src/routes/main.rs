use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::api::HttpProfileApi;
use crate::forms::main::SearchForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::main as main_service;

#[get("/")]
/// Result table for the filters and offset carried in the query string.
pub async fn show_index(
    params: web::Query<SearchForm>,
    api: web::Data<HttpProfileApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = params.into_inner();
    if let Err(err) = form.validate() {
        log::error!("Failed to validate search form: {err}");
        FlashMessage::error("Invalid search parameters.").send();
        return redirect("/");
    }

    let state = form.into_state();

    match main_service::load_index_page(api.get_ref(), &state).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("rows", &data.rows);
            context.insert("summary", &data.summary);
            context.insert("links", &data.links);
            context.insert("filters", &data.filters);
            context.insert("reset_href", &data.reset_href);
            context.insert("export_href", &data.export_href);
            context.insert("total_profiles", &data.total_profiles);
            context.insert("toggle", &data.toggle);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to search profiles: {err}");
            HttpResponse::BadGateway().finish()
        }
    }
}
