use actix_multipart::form::MultipartForm;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::api::{ApiError, HttpProfileApi};
use crate::domain::search::{PageState, SearchState};
use crate::forms::upload::UploadProfilesForm;
use crate::query::view_href;
use crate::routes::redirect;
use crate::services::{ServiceError, upload as upload_service};

#[post("/profiles/upload")]
/// Forward a bulk-import file, then return to the table from the first page.
///
/// Every outcome ends in a redirect, so the form comes back enabled and empty.
pub async fn upload_profiles(
    api: web::Data<HttpProfileApi>,
    MultipartForm(form): MultipartForm<UploadProfilesForm>,
) -> impl Responder {
    let return_to = view_href(&SearchState::new(form.filters(), PageState::default()))
        .unwrap_or_else(|err| {
            log::error!("Failed to build return link: {err}");
            "/".to_string()
        });

    match upload_service::upload_profiles(api.get_ref(), form).await {
        Ok(Some(stats)) => {
            FlashMessage::success(stats.summary()).send();
        }
        Ok(None) => {
            FlashMessage::success("Import completed").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Upstream(ApiError::Status { .. })) => {
            FlashMessage::error("Upload failed").send();
        }
        Err(err) => {
            log::error!("Failed to upload profiles: {err}");
            FlashMessage::error("Upload error").send();
        }
    }

    redirect(&return_to)
}
