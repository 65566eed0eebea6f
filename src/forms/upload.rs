use std::path::Path;

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::search::FilterState;
use crate::forms::FormError;

/// Extensions the import endpoint understands.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// Spreadsheet headers the importer maps onto profile fields.
pub const RECOGNISED_COLUMNS: [&str; 10] = [
    "Name",
    "Current Role",
    "Title",
    "Current Company",
    "Location",
    "Education",
    "Experience Details",
    "Total Experience",
    "Skills",
    "Profile URL",
];

#[derive(MultipartForm)]
pub struct UploadProfilesForm {
    #[multipart(limit = "10MB")]
    pub file: Option<TempFile>,
    pub category: Option<Text<String>>,
    // Current table filters, so the view can be reloaded after the import.
    pub q: Option<Text<String>>,
    pub role: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub skill: Option<Text<String>>,
    pub filter_category: Option<Text<String>>,
}

/// Validated upload: a real file and an optional trimmed category.
pub struct UploadPayload {
    pub file: TempFile,
    pub file_name: String,
    pub category: Option<String>,
}

fn text(value: &Option<Text<String>>) -> String {
    value
        .as_ref()
        .map(|text| text.0.trim().to_string())
        .unwrap_or_default()
}

impl UploadProfilesForm {
    /// Table filters submitted alongside the file.
    pub fn filters(&self) -> FilterState {
        FilterState {
            q: text(&self.q),
            role: text(&self.role),
            location: text(&self.location),
            skill: text(&self.skill),
            category: text(&self.filter_category),
        }
    }
}

fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

impl TryFrom<UploadProfilesForm> for UploadPayload {
    type Error = FormError;

    fn try_from(form: UploadProfilesForm) -> Result<Self, Self::Error> {
        // Browsers send an empty, unnamed part when nothing was picked.
        let file = form.file.ok_or(FormError::MissingFile)?;
        let file_name = file
            .file_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .ok_or(FormError::MissingFile)?;

        match extension(&file_name) {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => return Err(FormError::UnsupportedFormat(file_name)),
        }

        let category = Some(text(&form.category)).filter(|c| !c.is_empty());

        Ok(Self {
            file,
            file_name,
            category,
        })
    }
}

impl UploadPayload {
    pub fn is_csv(&self) -> bool {
        extension(&self.file_name).as_deref() == Some("csv")
    }
}

/// Checks that a CSV header row names at least one column the importer knows.
pub fn validate_csv_headers(content: &[u8]) -> Result<(), FormError> {
    let mut reader = csv::Reader::from_reader(content);
    let headers = reader.headers()?;
    if headers
        .iter()
        .any(|header| RECOGNISED_COLUMNS.contains(&header.trim()))
    {
        Ok(())
    } else {
        Err(FormError::UnknownColumns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_headers_are_accepted() {
        let csv = b"Name,Profile URL,Shoe Size\nAda,https://example.com/in/ada,9\n";

        assert!(validate_csv_headers(csv).is_ok());
    }

    #[test]
    fn unknown_headers_are_rejected() {
        let csv = b"foo,bar\n1,2\n";

        assert!(matches!(
            validate_csv_headers(csv),
            Err(FormError::UnknownColumns)
        ));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extension("People.XLSX").as_deref(), Some("xlsx"));
        assert_eq!(extension("notes"), None);
    }
}
