use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_SORT_KEY: SortKey = SortKey::StarsDesc;
pub const LANGUAGE_FILTER_ALL: &str = "all";

/// One normalized portfolio project. Built once per load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub external_url: String,
    pub homepage_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub cover_image: Option<String>,
}

impl ProjectRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            language: None,
            topics: Vec::new(),
            star_count: 0,
            fork_count: 0,
            external_url: String::new(),
            homepage_url: None,
            updated_at: None,
            cover_image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_topics<I, T>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stars(mut self, star_count: u64) -> Self {
        self.star_count = star_count;
        self
    }

    pub fn with_forks(mut self, fork_count: u64) -> Self {
        self.fork_count = fork_count;
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    StarsDesc,
    StarsAsc,
    UpdatedDesc,
    UpdatedAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::StarsDesc,
        SortKey::StarsAsc,
        SortKey::UpdatedDesc,
        SortKey::UpdatedAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StarsDesc => "stars-desc",
            Self::StarsAsc => "stars-asc",
            Self::UpdatedDesc => "updated-desc",
            Self::UpdatedAsc => "updated-asc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Exact wire-name match; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(String),
}

impl LanguageFilter {
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(LANGUAGE_FILTER_ALL) {
            return Self::All;
        }

        Self::Only(value.to_string())
    }

    pub fn matches(&self, language: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => {
                language.is_some_and(|value| eq_ignore_case(value, wanted))
            }
        }
    }

    pub fn is_active(&self, language: &str) -> bool {
        matches!(self, Self::Only(_)) && self.matches(Some(language))
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Search/filter/sort parameters owned by the caller.
///
/// `sort` is `None` when the caller asked for a key this crate does not know;
/// the query engine then keeps the filtered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub language: LanguageFilter,
    pub sort: Option<SortKey>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            language: LanguageFilter::All,
            sort: Some(DEFAULT_SORT_KEY),
        }
    }
}

impl QueryState {
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_language(mut self, language: LanguageFilter) -> Self {
        self.language = language;
        self
    }

    pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Quick-filter chip behavior: selecting the active language clears the filter.
    pub fn toggle_language(&mut self, language: &str) {
        self.language = if self.language.is_active(language) {
            LanguageFilter::All
        } else {
            LanguageFilter::parse(language)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_sort_key_parses_every_wire_name() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn model_sort_key_rejects_unknown_names() {
        assert_eq!(SortKey::parse("popularity"), None);
        assert_eq!(SortKey::parse("Stars-Desc"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn model_language_filter_treats_all_and_blank_as_no_filter() {
        assert_eq!(LanguageFilter::parse("all"), LanguageFilter::All);
        assert_eq!(LanguageFilter::parse(" ALL "), LanguageFilter::All);
        assert_eq!(LanguageFilter::parse("   "), LanguageFilter::All);
        assert_eq!(
            LanguageFilter::parse(" Rust "),
            LanguageFilter::Only("Rust".to_string())
        );
    }

    #[test]
    fn model_language_filter_matches_case_insensitively() {
        let filter = LanguageFilter::parse("go");

        assert!(filter.matches(Some("Go")));
        assert!(!filter.matches(Some("Rust")));
        assert!(!filter.matches(None));
        assert!(LanguageFilter::All.matches(None));
    }

    #[test]
    fn model_language_filter_compares_whole_names_beyond_ascii() {
        let filter = LanguageFilter::parse("ÉLIXIR");

        assert!(filter.matches(Some("élixir")));
        assert!(!filter.matches(Some("élixi")));
        assert!(!LanguageFilter::parse("Go").matches(Some("Golang")));
    }

    #[test]
    fn model_query_state_defaults_to_stars_desc() {
        let state = QueryState::default();

        assert_eq!(state.search_text, "");
        assert_eq!(state.language, LanguageFilter::All);
        assert_eq!(state.sort, Some(SortKey::StarsDesc));
    }

    #[test]
    fn model_query_state_toggle_language_switches_back_to_all() {
        let mut state = QueryState::default();

        state.toggle_language("Dart");
        assert_eq!(state.language, LanguageFilter::Only("Dart".to_string()));

        state.toggle_language("dart");
        assert_eq!(state.language, LanguageFilter::All);
    }

    #[test]
    fn model_query_state_reset_restores_defaults() {
        let mut state = QueryState::default()
            .with_search_text("mobile")
            .with_language(LanguageFilter::parse("Swift"))
            .with_sort(Some(SortKey::NameDesc));

        state.reset();

        assert_eq!(state, QueryState::default());
    }
}
