use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Education {
    pub degree: Option<String>,
    pub institute: Option<String>,
    pub year: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Experience {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Profile as returned by the remote search service.
///
/// The service owns the schema, so every field is optional and unknown fields
/// are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub profile_id: Option<String>,
    pub name: Option<String>,
    pub profile_url: Option<String>,
    pub current_role: Option<String>,
    pub current_company: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub total_experience: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

fn is_web_url(url: &str) -> bool {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        }
        None => false,
    }
}

impl ProfileRecord {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn current_role(&self) -> &str {
        self.current_role.as_deref().unwrap_or_default()
    }

    pub fn current_company(&self) -> &str {
        self.current_company.as_deref().unwrap_or_default()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Institute of the first education entry, or an empty string.
    pub fn first_institute(&self) -> &str {
        self.education
            .first()
            .and_then(|education| education.institute.as_deref())
            .unwrap_or_default()
    }

    /// Profile link, falling back to `#` unless the record has an
    /// `http` or `https` URL.
    pub fn profile_url(&self) -> &str {
        match self.profile_url.as_deref().map(str::trim) {
            Some(url) if is_web_url(url) => url,
            _ => "#",
        }
    }
}

/// Body of the advanced search endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchPage {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ProfileRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: usize,
}

/// One category bucket of the category breakdown.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CategoryGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub count: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub profiles: Vec<ProfileRecord>,
}

/// Category breakdown ordered by descending count, ties broken by name.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "BTreeMap<String, CategoryGroup>")]
pub struct CategorySummary {
    pub categories: Vec<(String, CategoryGroup)>,
}

impl From<BTreeMap<String, CategoryGroup>> for CategorySummary {
    fn from(map: BTreeMap<String, CategoryGroup>) -> Self {
        let mut categories: Vec<_> = map.into_iter().collect();
        // Stable sort keeps the alphabetical order of the map among equal counts.
        categories.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count));
        Self { categories }
    }
}

/// Body of the stats endpoint.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileStats {
    pub total_profiles: usize,
}
