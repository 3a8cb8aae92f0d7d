use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

/// Category shown for projects that were saved without one.
pub const DEFAULT_CATEGORY: &str = "Web App";

/// Words per minute used for the reading time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Reading time reported for posts without a body.
const DEFAULT_READING_MINUTES: usize = 5;

/// Characters of content used when a post has no excerpt.
const SUMMARY_CHARS: usize = 150;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub content: std::sync::Arc<crate::client::ContentClient>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

// The content API emits `null` for unset lists and strings.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Counters and percentages may arrive as `null` or with a fraction.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if !value.is_finite() || value <= 0.0 {
        return Ok(0);
    }
    // positive and capped at u32::MAX, so the cast cannot wrap
    Ok(value.round().min(f64::from(u32::MAX)) as u32)
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievements {
    #[serde(deserialize_with = "whole_number")]
    pub projects_completed: u32,
    #[serde(deserialize_with = "whole_number")]
    pub happy_clients: u32,
    #[serde(deserialize_with = "whole_number")]
    pub years_experience: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TechSkill {
    #[serde(deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(deserialize_with = "whole_number")]
    pub percentage: u32,
}

impl TechSkill {
    /// Bar width in percent, clamped so a bad value cannot overflow the track.
    pub fn width_percent(&self) -> u32 {
        self.percentage.min(100)
    }
}

/// The site owner's profile. Fields missing from the API response fall back
/// to empty values and the page substitutes the site identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub hero_image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Achievements,
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: Vec<TechSkill>,
}

impl Profile {
    pub fn hero_image(&self) -> Option<&str> {
        non_blank(self.hero_image.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub pinned: bool,
}

impl Project {
    /// The category used for both display and filtering.
    pub fn category(&self) -> &str {
        non_blank(self.category.as_ref()).unwrap_or(DEFAULT_CATEGORY)
    }

    /// Ordered gallery: the thumbnail first, then the extra images.
    pub fn gallery(&self) -> Vec<String> {
        non_blank(self.thumbnail.as_ref())
            .into_iter()
            .chain(self.images.iter().map(|i| i.trim()).filter(|i| !i.is_empty()))
            .map(str::to_owned)
            .collect()
    }

    pub fn has_thumbnail(&self) -> bool {
        non_blank(self.thumbnail.as_ref()).is_some()
    }

    pub fn live_link(&self) -> Option<&str> {
        non_blank(self.live_link.as_ref())
    }

    pub fn github_link(&self) -> Option<&str> {
        non_blank(self.github_link.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(alias = "featuredImage")]
    pub featured_image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub author: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(rename = "createdAt", deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "updatedAt", deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl BlogPost {
    /// Creation date as `January 5, 2024`. Unparseable values are shown as is.
    pub fn published_on(&self) -> String {
        let raw = self.created_at.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|date| date.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d"))
            .map_or_else(|_| raw.to_owned(), |date| date.format("%B %-d, %Y").to_string())
    }

    /// Estimated minutes to read the body.
    pub fn reading_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        if words == 0 {
            DEFAULT_READING_MINUTES
        } else {
            words.div_ceil(WORDS_PER_MINUTE)
        }
    }

    /// Card text: the excerpt, or the start of the body.
    pub fn summary(&self) -> String {
        if let Some(excerpt) = non_blank(self.excerpt.as_ref()) {
            return excerpt.to_owned();
        }
        if self.content.trim().is_empty() {
            return "Post content will appear here".to_owned();
        }
        self.content.chars().take(SUMMARY_CHARS).collect()
    }

    pub fn featured_image(&self) -> Option<&str> {
        non_blank(self.featured_image.as_ref())
    }

    pub fn author_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(self.author.as_ref()).unwrap_or(fallback)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
}

/// Contact form submission data.
///
/// The `website` field is a honeypot. People never see it, so a filled value
/// marks the submission as automated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// The body posted to the content API once a request has been validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Checks that every field has content once surrounding whitespace is
    /// removed and returns the trimmed payload.
    ///
    /// # Errors
    ///
    /// `ContactError::MissingFields` when any field is blank.
    pub fn validate(&self) -> Result<ContactPayload, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(ContactPayload {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn is_bot(&self) -> bool {
        non_blank(self.website.as_ref()).is_some()
    }
}
