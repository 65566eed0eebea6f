use crate::api::{ImportUpload, ProfileApi};
use crate::dto::upload::ImportStats;
use crate::forms::upload::{UploadPayload, UploadProfilesForm, validate_csv_headers};
use crate::services::ServiceResult;

/// Validates the uploaded file and forwards it to the import endpoint.
///
/// Nothing is sent when the form carries no file or the file is rejected
/// locally. The temporary file is removed when the payload drops, on every
/// path out of this function.
pub async fn upload_profiles<A>(
    api: &A,
    form: UploadProfilesForm,
) -> ServiceResult<Option<ImportStats>>
where
    A: ProfileApi,
{
    let payload = UploadPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected profile upload: {err}");
        err
    })?;

    let content = tokio::fs::read(payload.file.file.path()).await?;
    if payload.is_csv() {
        validate_csv_headers(&content).map_err(|err| {
            log::warn!("Rejected profile upload {}: {err}", payload.file_name);
            err
        })?;
    }

    let upload = ImportUpload {
        file_name: payload.file_name.clone(),
        content_type: payload
            .file
            .content_type
            .as_ref()
            .map(|mime| mime.to_string()),
        content,
        category: payload.category.clone(),
    };

    let response = api.import_profiles(upload).await.map_err(|err| {
        log::error!("Failed to import {}: {err}", payload.file_name);
        err
    })?;

    log::info!(
        "Imported {} into category {:?}",
        payload.file_name,
        payload.category
    );

    Ok(response.stats)
}
