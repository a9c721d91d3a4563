use chrono::{DateTime, Utc};
use serde::Serialize;

use folio_core::card::{ProjectCard, cards_for};
use folio_core::facets::{
    DEFAULT_QUICK_FILTER_LIMIT, LanguageFacet, language_options, quick_filter_facets,
};
use folio_core::model::{LanguageFilter, QueryState};
use folio_core::query::apply_query;
use folio_core::source::{ListOrigin, LoadedProjects};
use folio_core::training::TrainingProgram;

pub const SUBTITLE_MAX_CHARS: usize = 120;
const NO_RESULTS_LINE: &str = "No projects match the current filters.";
const UNSORTED_LABEL: &str = "unsorted";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryEcho {
    pub search_text: String,
    pub language: Option<String>,
    pub sort: Option<&'static str>,
}

impl QueryEcho {
    fn from_state(state: &QueryState) -> Self {
        Self {
            search_text: state.search_text.clone(),
            language: match &state.language {
                LanguageFilter::All => None,
                LanguageFilter::Only(language) => Some(language.clone()),
            },
            sort: state.sort.map(|key| key.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    pub source: ListOrigin,
    pub query: QueryEcho,
    pub matched: usize,
    pub quick_filters: Vec<LanguageFacet>,
    pub items: Vec<ProjectCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagesView {
    pub source: ListOrigin,
    pub facets: Vec<LanguageFacet>,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub mailto: String,
}

/// Run the query over the loaded list and keep the first `limit` matches.
pub fn projects_view(
    loaded: &LoadedProjects,
    state: &QueryState,
    limit: usize,
    now: DateTime<Utc>,
) -> ProjectsView {
    let matches = apply_query(&loaded.records, state);
    let shown = &matches[..matches.len().min(limit)];

    ProjectsView {
        source: loaded.origin,
        query: QueryEcho::from_state(state),
        matched: matches.len(),
        quick_filters: quick_filter_facets(&loaded.records, DEFAULT_QUICK_FILTER_LIMIT),
        items: cards_for(shown, now),
    }
}

pub fn languages_view(loaded: &LoadedProjects, limit: usize) -> LanguagesView {
    LanguagesView {
        source: loaded.origin,
        facets: quick_filter_facets(&loaded.records, limit),
        options: language_options(&loaded.records),
    }
}

pub fn projects_to_human(view: &ProjectsView) -> String {
    let mut lines = vec![format!(
        "Projects ({} list): showing {} of {} (sort: {})",
        view.source.as_str(),
        view.items.len(),
        view.matched,
        view.query.sort.unwrap_or(UNSORTED_LABEL)
    )];

    if !view.quick_filters.is_empty() {
        lines.push(format!(
            "Languages: {}",
            facets_inline(&view.quick_filters)
        ));
    }

    if view.items.is_empty() {
        lines.push(NO_RESULTS_LINE.to_string());
        return lines.join("\n");
    }

    for (index, card) in view.items.iter().enumerate() {
        lines.push(String::new());
        lines.push(card_headline(index + 1, card));
        if let Some(description) = card.description.as_deref() {
            lines.push(format!(
                "    {}",
                single_line(description, SUBTITLE_MAX_CHARS)
            ));
        }
        if !card.topics.is_empty() {
            lines.push(format!("    #{}", card.topics.join(" #")));
        }
        if !card.repository_url.is_empty() {
            lines.push(format!("    {}", card.repository_url));
        }
        if let Some(demo_url) = card.demo_url.as_deref() {
            lines.push(format!("    demo: {demo_url}"));
        }
    }

    lines.join("\n")
}

fn card_headline(position: usize, card: &ProjectCard) -> String {
    let mut headline = format!(
        "{position:>2}. {} [{}] stars {} forks {}",
        card.title, card.language_label, card.star_count, card.fork_count
    );
    if !card.updated_label.is_empty() {
        headline.push_str(&format!(" - updated {}", card.updated_label));
    }
    headline
}

pub fn languages_to_human(view: &LanguagesView) -> String {
    if view.facets.is_empty() {
        return format!(
            "No classified projects in the {} list.",
            view.source.as_str()
        );
    }

    view.facets
        .iter()
        .map(|facet| format!("{} ({})", facet.language, facet.count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn training_to_human(program: &TrainingProgram) -> String {
    let summary = &program.summary;
    let mut lines = vec![
        summary.title.to_string(),
        format!(
            "{} - {} months, {} hours, {}-hour capstone project, {}-week internship",
            summary.mode,
            summary.duration_months,
            summary.hours,
            summary.capstone_hours,
            summary.internship_weeks
        ),
    ];

    for track in program.tracks {
        lines.push(String::new());
        lines.push(track.title.to_string());
        lines.extend(track.points.iter().map(|point| format!("  - {point}")));
    }

    lines.push(String::new());
    lines.push("Objectives".to_string());
    lines.extend(
        program
            .objectives
            .iter()
            .map(|objective| format!("  - {objective}")),
    );

    lines.push(String::new());
    lines.push(format!("Technologies: {}", program.technologies.join(", ")));

    for block in program.blocks {
        lines.push(String::new());
        lines.push(block.title.to_string());
        lines.extend(
            block
                .courses
                .iter()
                .map(|course| format!("  {}  {}", course.code, course.name)),
        );
    }

    lines.join("\n")
}

fn facets_inline(facets: &[LanguageFacet]) -> String {
    facets
        .iter()
        .map(|facet| format!("{} ({})", facet.language, facet.count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn single_line(input: &str, max_chars: usize) -> String {
    let compact = input.split_whitespace().collect::<Vec<_>>().join(" ");

    if compact.chars().count() <= max_chars {
        return compact;
    }

    if max_chars <= 3 {
        return "...".chars().take(max_chars).collect();
    }

    let truncated: String = compact.chars().take(max_chars - 3).collect();
    format!("{truncated}...")
}
