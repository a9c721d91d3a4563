use serde_json::Value;

use crate::github_api::normalize_repos;
use crate::model::ProjectRecord;

const BUNDLED_PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// The build-time project list shown whenever the remote list is unavailable.
///
/// The file uses the same field names as the GitHub repository API and goes
/// through the same normalization, so both sources yield identical shapes.
pub fn bundled_projects() -> Vec<ProjectRecord> {
    match serde_json::from_str::<Vec<Value>>(BUNDLED_PROJECTS_JSON) {
        Ok(entries) => normalize_repos(entries),
        Err(error) => {
            tracing::error!(%error, "bundled project list is not a JSON array");
            Vec::new()
        }
    }
}
