use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::ProjectRecord;
use crate::recency::updated_label;

pub const CARD_TOPIC_LIMIT: usize = 6;
const UNTITLED_PROJECT: &str = "(untitled project)";
const UNCLASSIFIED_LANGUAGE: &str = "Other";

/// Render-ready projection of a [`ProjectRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language_label: String,
    pub topics: Vec<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub repository_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub updated_label: String,
}

impl ProjectCard {
    pub fn from_record(record: &ProjectRecord, now: DateTime<Utc>) -> Self {
        let title = if record.name.is_empty() {
            UNTITLED_PROJECT.to_string()
        } else {
            record.name.clone()
        };

        Self {
            id: record.id.clone(),
            title,
            description: record.description.clone(),
            language_label: record
                .language
                .clone()
                .unwrap_or_else(|| UNCLASSIFIED_LANGUAGE.to_string()),
            topics: record.topics.iter().take(CARD_TOPIC_LIMIT).cloned().collect(),
            star_count: record.star_count,
            fork_count: record.fork_count,
            repository_url: record.external_url.clone(),
            demo_url: record.homepage_url.clone(),
            cover_image: record.cover_image.clone(),
            updated_label: updated_label(record.updated_at, now),
        }
    }
}

pub fn cards_for(records: &[ProjectRecord], now: DateTime<Utc>) -> Vec<ProjectCard> {
    records
        .iter()
        .map(|record| ProjectCard::from_record(record, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0)
            .single()
            .expect("valid time")
    }

    #[test]
    fn card_maps_record_fields() {
        let mut record = ProjectRecord::new("42", "marketgo")
            .with_description("Marketplace")
            .with_language("Dart")
            .with_topics(["flutter"])
            .with_stars(9)
            .with_forks(2)
            .with_updated_at(now() - Duration::days(3));
        record.external_url = "https://github.com/someone/marketgo".to_string();
        record.homepage_url = Some("https://marketgo.example.com".to_string());

        let card = ProjectCard::from_record(&record, now());

        assert_eq!(card.title, "marketgo");
        assert_eq!(card.language_label, "Dart");
        assert_eq!(card.star_count, 9);
        assert_eq!(card.fork_count, 2);
        assert_eq!(card.repository_url, "https://github.com/someone/marketgo");
        assert_eq!(
            card.demo_url.as_deref(),
            Some("https://marketgo.example.com")
        );
        assert_eq!(card.updated_label, "3 days ago");
    }

    #[test]
    fn card_uses_placeholders_for_missing_name_and_language() {
        let card = ProjectCard::from_record(&ProjectRecord::new("#0", ""), now());

        assert_eq!(card.title, UNTITLED_PROJECT);
        assert_eq!(card.language_label, UNCLASSIFIED_LANGUAGE);
        assert_eq!(card.updated_label, "");
    }

    #[test]
    fn card_caps_topic_list() {
        let record = ProjectRecord::new("1", "many-topics")
            .with_topics(["a", "b", "c", "d", "e", "f", "g", "h"]);

        let card = ProjectCard::from_record(&record, now());

        assert_eq!(card.topics, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn card_optional_fields_are_omitted_from_json() {
        let card = ProjectCard::from_record(&ProjectRecord::new("1", "bare"), now());
        let json = serde_json::to_string(&card).expect("serialize card");

        assert!(!json.contains("demo_url"));
        assert!(!json.contains("description"));
        assert!(json.contains("\"language_label\":\"Other\""));
    }
}
