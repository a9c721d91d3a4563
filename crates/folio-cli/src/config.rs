use std::collections::HashMap;
use std::time::Duration;

use folio_core::contact::is_valid_email;
use folio_core::github_api::{DEFAULT_API_BASE, GithubEndpoint, MAX_PROJECTS};
use thiserror::Error;

const GITHUB_USER_ENV: &str = "FOLIO_GITHUB_USER";
const API_BASE_ENV: &str = "FOLIO_GITHUB_API_BASE";
const HTTP_TIMEOUT_ENV: &str = "FOLIO_HTTP_TIMEOUT_SECS";
const CONTACT_EMAIL_ENV: &str = "FOLIO_CONTACT_EMAIL";
const RESULT_LIMIT_ENV: &str = "FOLIO_RESULT_LIMIT";

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;
const MIN_RESULT_LIMIT: i64 = 1;
const MAX_GITHUB_LOGIN_LEN: usize = 39;
pub const DEFAULT_GITHUB_USER: &str = "CabrelLene";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub github_user: String,
    pub api_base: String,
    pub http_timeout: Option<Duration>,
    pub contact_email: Option<String>,
    pub result_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            github_user: DEFAULT_GITHUB_USER.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: None,
            contact_email: None,
            result_limit: MAX_PROJECTS,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env_map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let get = |key: &str| {
            env_map
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            github_user: parse_github_user(get(GITHUB_USER_ENV))?,
            api_base: parse_api_base(get(API_BASE_ENV))?,
            http_timeout: parse_http_timeout(get(HTTP_TIMEOUT_ENV))?,
            contact_email: parse_contact_email(get(CONTACT_EMAIL_ENV))?,
            result_limit: parse_result_limit(get(RESULT_LIMIT_ENV))?,
        })
    }

    pub fn endpoint(&self) -> GithubEndpoint {
        GithubEndpoint {
            api_base: self.api_base.clone(),
            user: self.github_user.clone(),
            timeout: self.http_timeout,
        }
    }
}

fn parse_github_user(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_GITHUB_USER.to_string());
    };

    if is_github_login(value) {
        Ok(value.to_string())
    } else {
        Err(ConfigError::InvalidGithubUser(value.to_string()))
    }
}

// Alphanumerics and single inner hyphens, at most 39 characters.
fn is_github_login(value: &str) -> bool {
    value.len() <= MAX_GITHUB_LOGIN_LEN
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_API_BASE.to_string());
    };

    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidApiBase(value.to_string()))
    }
}

fn parse_http_timeout(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = raw else {
        return Ok(None);
    };

    let secs = value
        .parse::<u64>()
        .ok()
        .filter(|secs| (MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(secs))
        .ok_or_else(|| ConfigError::InvalidHttpTimeout(value.to_string()))?;

    Ok(Some(Duration::from_secs(secs)))
}

fn parse_contact_email(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) if is_valid_email(value) => Ok(Some(value.to_string())),
        Some(value) => Err(ConfigError::InvalidContactEmail(value.to_string())),
    }
}

fn parse_result_limit(raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(value) = raw else {
        return Ok(MAX_PROJECTS);
    };

    let parsed = value
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidResultLimit(value.to_string()))?;

    Ok(parsed.clamp(MIN_RESULT_LIMIT, MAX_PROJECTS as i64) as usize)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid FOLIO_GITHUB_USER: {0} (expected a GitHub login)")]
    InvalidGithubUser(String),
    #[error("invalid FOLIO_GITHUB_API_BASE: {0} (expected an http(s) URL)")]
    InvalidApiBase(String),
    #[error("invalid FOLIO_HTTP_TIMEOUT_SECS: {0} (expected seconds, 1..300)")]
    InvalidHttpTimeout(String),
    #[error("invalid FOLIO_CONTACT_EMAIL: {0}")]
    InvalidContactEmail(String),
    #[error("invalid FOLIO_RESULT_LIMIT: {0}")]
    InvalidResultLimit(String),
}
