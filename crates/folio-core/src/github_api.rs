use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::model::ProjectRecord;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const MAX_PROJECTS: usize = 100;

const USER_AGENT: &str = concat!("folio-core/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// Where and how to ask for an account's public repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubEndpoint {
    pub api_base: String,
    pub user: String,
    pub timeout: Option<Duration>,
}

impl GithubEndpoint {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user: user.into(),
            timeout: None,
        }
    }
}

pub fn fetch_user_repos(endpoint: &GithubEndpoint) -> Result<Vec<ProjectRecord>, GithubApiError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(endpoint.timeout)
        .build()
        .map_err(|source| GithubApiError::Transport { source })?;

    let url = build_endpoint(endpoint);
    tracing::debug!(%url, "requesting repositories");

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::ACCEPT, ACCEPT)
        .query(&build_query_params())
        .send()
        .map_err(|source| GithubApiError::Transport { source })?;

    let status_code = response.status().as_u16();
    let body = response
        .text()
        .map_err(|source| GithubApiError::Transport { source })?;

    parse_repos_response(status_code, &body)
}

pub fn build_endpoint(endpoint: &GithubEndpoint) -> String {
    format!(
        "{}/users/{}/repos",
        endpoint.api_base.trim_end_matches('/'),
        endpoint.user
    )
}

pub fn build_query_params() -> Vec<(String, String)> {
    vec![
        ("per_page".to_string(), MAX_PROJECTS.to_string()),
        ("sort".to_string(), "updated".to_string()),
    ]
}

pub fn parse_repos_response(
    status_code: u16,
    body: &str,
) -> Result<Vec<ProjectRecord>, GithubApiError> {
    if !(200..=299).contains(&status_code) {
        let message = extract_error_message(body).unwrap_or_else(|| format!("HTTP {status_code}"));
        return Err(GithubApiError::Http {
            status: status_code,
            message,
        });
    }

    let payload: Value = serde_json::from_str(body).map_err(GithubApiError::InvalidResponse)?;
    match payload {
        Value::Array(entries) => Ok(normalize_repos(entries)),
        _ => Err(GithubApiError::UnexpectedShape),
    }
}

/// Total mapping from loosely shaped repository objects into records.
///
/// Keeps at most [`MAX_PROJECTS`] entries and drops entries whose id was
/// already seen. Fields that are missing or of the wrong type fall back to
/// empty strings, `None`, or zero; entries are never rejected for that.
pub fn normalize_repos(entries: Vec<Value>) -> Vec<ProjectRecord> {
    let mut seen = HashSet::new();

    entries
        .iter()
        .take(MAX_PROJECTS)
        .enumerate()
        .map(|(position, entry)| normalize_repo(position, entry))
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}

fn normalize_repo(position: usize, entry: &Value) -> ProjectRecord {
    let name = string_field(entry, "name").unwrap_or_default();

    ProjectRecord {
        id: record_id(position, entry, &name),
        description: string_field(entry, "description"),
        language: string_field(entry, "language"),
        topics: topics_field(entry),
        star_count: count_field(entry, "stargazers_count"),
        fork_count: count_field(entry, "forks_count"),
        external_url: string_field(entry, "html_url").unwrap_or_default(),
        homepage_url: string_field(entry, "homepage"),
        updated_at: string_field(entry, "updated_at").and_then(|raw| parse_timestamp(&raw)),
        cover_image: string_field(entry, "image"),
        name,
    }
}

fn record_id(position: usize, entry: &Value, name: &str) -> String {
    match entry.get("id") {
        Some(Value::Number(number)) if number.as_u64().is_some_and(|id| id > 0) => {
            number.to_string()
        }
        Some(Value::String(raw)) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ if !name.is_empty() => name.to_string(),
        _ => format!("#{position}"),
    }
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn count_field(entry: &Value, key: &str) -> u64 {
    entry.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn topics_field(entry: &Value) -> Vec<String> {
    let mut seen = HashSet::new();

    entry
        .get("topics")
        .and_then(Value::as_array)
        .map(|topics| {
            topics
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|topic| !topic.is_empty() && seen.insert(topic.to_string()))
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|value| value.with_timezone(&Utc))
}

fn extract_error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;

    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

#[derive(Debug, Error)]
pub enum GithubApiError {
    #[error("github api request failed")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("github api error ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("invalid github api response")]
    InvalidResponse(#[source] serde_json::Error),
    #[error("github api response is not a repository list")]
    UnexpectedShape,
}
