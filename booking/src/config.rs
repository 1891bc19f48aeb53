use url::Url;

use crate::error::BookingError;
use crate::steps::SubmitMode;

pub const API_URL_VAR: &str = "INSTACLEAN_API_URL";
pub const LOG_VAR: &str = "INSTACLEAN_LOG";
pub const SUBMIT_MODE_VAR: &str = "INSTACLEAN_SUBMIT_MODE";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings baked into the site bundle at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Catalog API root. `None` disables the catalog fetch.
    pub api_url: Option<Url>,
    /// `tracing` filter directive, e.g. `info` or `instaclean_booking=debug`.
    pub log_filter: String,
    pub submit_mode: SubmitMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            submit_mode: SubmitMode::default(),
        }
    }
}

impl SiteConfig {
    /// Read the values captured by the compiler from the build environment.
    pub fn from_build_env() -> Result<Self, BookingError> {
        Self::from_values(
            option_env!("INSTACLEAN_API_URL"),
            option_env!("INSTACLEAN_LOG"),
            option_env!("INSTACLEAN_SUBMIT_MODE"),
        )
    }

    /// Blank values fall back to the defaults.
    pub fn from_values(
        api_url: Option<&str>,
        log_filter: Option<&str>,
        submit_mode: Option<&str>,
    ) -> Result<Self, BookingError> {
        let api_url = match non_blank(api_url) {
            Some(raw) => Some(parse_api_url(raw)?),
            None => None,
        };

        let submit_mode = match non_blank(submit_mode) {
            None | Some("confirm") => SubmitMode::ConfirmSummary,
            Some("immediate") => SubmitMode::Immediate,
            Some(other) => {
                return Err(BookingError::InvalidConfig(format!(
                    "{} must be 'confirm' or 'immediate', got '{}'",
                    SUBMIT_MODE_VAR, other
                )))
            }
        };

        Ok(Self {
            api_url,
            log_filter: non_blank(log_filter)
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
            submit_mode,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_api_url(raw: &str) -> Result<Url, BookingError> {
    let url = Url::parse(raw).map_err(|e| {
        BookingError::InvalidConfig(format!("{} '{}': {}", API_URL_VAR, raw, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BookingError::InvalidConfig(format!(
            "{} must be http or https, got '{}'",
            API_URL_VAR, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_values(None, None, None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.submit_mode, SubmitMode::ConfirmSummary);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = SiteConfig::from_values(Some("  "), Some(""), Some(" ")).unwrap();
        assert!(config.api_url.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_parses_api_url_and_mode() {
        let config = SiteConfig::from_values(
            Some("https://admin.example.com/api/store-1"),
            Some("debug"),
            Some("immediate"),
        )
        .unwrap();
        assert_eq!(
            config.api_url.unwrap().as_str(),
            "https://admin.example.com/api/store-1"
        );
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.submit_mode, SubmitMode::Immediate);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SiteConfig::from_values(Some("not a url"), None, None).unwrap_err();
        assert!(matches!(err, BookingError::InvalidConfig(_)));

        let err = SiteConfig::from_values(Some("ftp://example.com"), None, None).unwrap_err();
        assert!(err.to_string().contains("http or https"));

        let err = SiteConfig::from_values(None, None, Some("twice")).unwrap_err();
        assert!(err.to_string().contains(SUBMIT_MODE_VAR));
    }
}
