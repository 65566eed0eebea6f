use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::api::HttpProfileApi;
use crate::forms::main::SearchForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::categories as categories_service;

#[get("/categories")]
/// Category summary cards. Fetched fresh on every visit; the current table
/// filters ride along so the cards and the toggle can return to them.
pub async fn show_categories(
    params: web::Query<SearchForm>,
    api: web::Data<HttpProfileApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = params.into_inner();
    if let Err(err) = form.validate() {
        log::error!("Failed to validate search form: {err}");
        FlashMessage::error("Invalid search parameters.").send();
        return redirect("/categories");
    }

    let state = form.into_state().submit();

    match categories_service::load_categories(api.get_ref(), &state).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "categories");
            context.insert("cards", &data.cards);
            context.insert("toggle", &data.toggle);

            render_template(&tera, "categories/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load categories: {err}");
            HttpResponse::BadGateway().finish()
        }
    }
}
