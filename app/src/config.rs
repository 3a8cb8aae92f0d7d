//! Typed configuration for the site.
//!
//! `ContentApiConfig` describes where the remote content API lives and is only
//! built on the server. `UiConfig` and `SiteIdentity` are shared by both the
//! server render and the hydrated client and are handed to pages as context.

use core::time::Duration;
use thiserror::Error;

#[cfg(feature = "ssr")]
use reqwest::Url;

/// Base URL used when `CONTENT_API_URL` is not set.
pub const DEFAULT_CONTENT_API_URL: &str = "http://localhost:5000/api";

/// Request timeout used when `CONTENT_API_TIMEOUT_SECS` is not set.
pub const DEFAULT_CONTENT_API_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("content API URL `{url}` is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("content API URL `{0}` contains more than one scheme")]
    MalformedBaseUrl(String),
    #[error("content API URL `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("content API timeout `{0}` is not a positive number of seconds")]
    InvalidTimeout(String),
}

/// Location of the remote content API.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

#[cfg(feature = "ssr")]
impl ContentApiConfig {
    /// Reads `CONTENT_API_URL` and `CONTENT_API_TIMEOUT_SECS` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("CONTENT_API_URL").ok();
        let timeout = std::env::var("CONTENT_API_TIMEOUT_SECS").ok();
        Self::from_values(url.as_deref(), timeout.as_deref())
    }

    /// Builds a configuration from raw values, falling back to defaults for
    /// missing ones.
    ///
    /// # Errors
    ///
    /// Fails when the URL does not parse, is not http(s), cannot carry a path,
    /// or repeats its scheme (`http://https://host`), or when the timeout is
    /// not a positive integer.
    pub fn from_values(url: Option<&str>, timeout: Option<&str>) -> Result<Self, ConfigError> {
        let raw_url = url.map(str::trim).filter(|v| !v.is_empty()).unwrap_or_else(|| {
            tracing::warn!("CONTENT_API_URL not set, using {DEFAULT_CONTENT_API_URL}");
            DEFAULT_CONTENT_API_URL
        });
        let base_url = parse_base_url(raw_url)?;

        let timeout = match timeout.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw.to_owned())),
            },
            None => Duration::from_secs(DEFAULT_CONTENT_API_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so an identifier can never reach outside its collection.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ConfigError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(feature = "ssr")]
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    if let Some((_, rest)) = raw.split_once("://")
        && rest.contains("://")
    {
        return Err(ConfigError::MalformedBaseUrl(raw.to_owned()));
    }

    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_owned()));
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: "URL cannot be a base".to_owned(),
        });
    }
    Ok(url)
}

/// Timings that drive page behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// How often the home page refreshes the profile. `None` turns polling off.
    pub profile_refresh: Option<Duration>,
    pub counter_duration: Duration,
    /// How long the contact page keeps its success notice visible.
    pub success_notice: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            profile_refresh: Some(Duration::from_secs(3)),
            counter_duration: Duration::from_millis(2500),
            success_notice: Duration::from_secs(5),
        }
    }
}

/// Owner details used by the site chrome and as fallbacks for profile fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteIdentity {
    pub owner: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    /// Hero paragraph shown while the profile has no description.
    pub intro: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub whatsapp_number: &'static str,
    pub whatsapp_greeting: &'static str,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            owner: "Yasith Yuran",
            role: "Full Stack Developer & Designer",
            summary: "Full Stack Developer & Designer. Building beautiful and functional web applications.",
            intro: "Passionate about building visually compelling and high-performing digital \
                    experiences. I combine clean code with thoughtful design to create modern, \
                    user-friendly websites and applications.",
            github: "https://github.com/yasithyuran",
            linkedin: "https://linkedin.com/in/yasithyuran",
            instagram: "https://instagram.com/yasithyuran",
            email: "yasithyuran@gmail.com",
            phone: "+94 70 585 3279",
            whatsapp_number: "94705853279",
            whatsapp_greeting: "Hello Yasith, I would like to discuss a project with you.",
        }
    }
}

impl SiteIdentity {
    /// Click-to-chat link with the greeting pre-filled.
    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            encode_component(self.whatsapp_greeting)
        )
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_link(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

// Percent-encodes everything outside the URI component unreserved set.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
