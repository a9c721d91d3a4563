use serde::Serialize;

use crate::fallback::bundled_projects;
use crate::github_api::{self, GithubApiError, GithubEndpoint};
use crate::model::ProjectRecord;

pub trait ProjectSource {
    fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, GithubApiError>;
}

#[derive(Debug, Clone)]
pub struct GithubSource {
    endpoint: GithubEndpoint,
}

impl GithubSource {
    pub fn new(endpoint: GithubEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &GithubEndpoint {
        &self.endpoint
    }
}

impl ProjectSource for GithubSource {
    fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, GithubApiError> {
        github_api::fetch_user_repos(&self.endpoint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListOrigin {
    Remote,
    Fallback,
}

impl ListOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProjects {
    pub origin: ListOrigin,
    pub records: Vec<ProjectRecord>,
}

pub fn load_projects<S>(source: &S) -> LoadedProjects
where
    S: ProjectSource + ?Sized,
{
    load_projects_with(source, bundled_projects)
}

/// Fetch once; on any failure (or an empty remote list) replace the whole
/// list with the fallback. The failure is logged, never returned.
pub fn load_projects_with<S, F>(source: &S, fallback: F) -> LoadedProjects
where
    S: ProjectSource + ?Sized,
    F: FnOnce() -> Vec<ProjectRecord>,
{
    match source.fetch_projects() {
        Ok(records) if !records.is_empty() => {
            tracing::debug!(count = records.len(), "using remote project list");
            LoadedProjects {
                origin: ListOrigin::Remote,
                records,
            }
        }
        Ok(_) => {
            tracing::warn!("remote project list is empty; using bundled list");
            fallback_list(fallback)
        }
        Err(error) => {
            tracing::warn!(%error, "project source unavailable; using bundled list");
            fallback_list(fallback)
        }
    }
}

fn fallback_list<F>(fallback: F) -> LoadedProjects
where
    F: FnOnce() -> Vec<ProjectRecord>,
{
    LoadedProjects {
        origin: ListOrigin::Fallback,
        records: fallback(),
    }
}
