use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};

use crate::api::HttpProfileApi;
use crate::forms::main::SearchForm;
use crate::services::export as export_service;

#[get("/profiles/export.csv")]
/// CSV export of every profile matching the current filters.
pub async fn export_profiles(
    params: web::Query<SearchForm>,
    api: web::Data<HttpProfileApi>,
) -> impl Responder {
    let filters = params.filters();

    match export_service::export_profiles(api.get_ref(), &filters).await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=profiles_export.csv",
            ))
            .body(csv),
        Err(err) => {
            log::error!("Failed to export profiles: {err}");
            HttpResponse::BadGateway().finish()
        }
    }
}
