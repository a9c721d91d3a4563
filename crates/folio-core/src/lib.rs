//! Portfolio domain modules.
//!
//! - `model`: project records and query parameters.
//! - `github_api`: repository fetch and normalization.
//! - `fallback`: bundled project list.
//! - `source`: fetch-or-fallback loading.
//! - `facets`: language counts for quick filters.
//! - `query`: search/filter/sort over a loaded list.
//! - `card`, `recency`: render-ready project cards.
//! - `contact`: contact form validation and mailto links.
//! - `training`: training program content.

pub mod card;
pub mod contact;
pub mod facets;
pub mod fallback;
pub mod github_api;
pub mod model;
pub mod query;
pub mod recency;
pub mod source;
pub mod training;

pub use card::{ProjectCard, cards_for};
pub use contact::{ContactError, ContactForm, mailto_url};
pub use facets::{LanguageFacet, language_facets, language_options, quick_filter_facets};
pub use fallback::bundled_projects;
pub use github_api::{GithubApiError, GithubEndpoint};
pub use model::{LanguageFilter, ProjectRecord, QueryState, SortKey};
pub use query::apply_query;
pub use source::{GithubSource, ListOrigin, LoadedProjects, ProjectSource, load_projects};
