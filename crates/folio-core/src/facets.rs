use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::model::ProjectRecord;

pub const DEFAULT_QUICK_FILTER_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageFacet {
    pub language: String,
    pub count: usize,
}

/// Count records per language, most frequent first.
///
/// Records without a language are skipped. Equal counts keep the order in
/// which each language first appears in `records`.
pub fn language_facets(records: &[ProjectRecord]) -> Vec<LanguageFacet> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut facets: Vec<LanguageFacet> = Vec::new();

    for language in records.iter().filter_map(|record| record.language.as_deref()) {
        match positions.get(language) {
            Some(&index) => facets[index].count += 1,
            None => {
                positions.insert(language, facets.len());
                facets.push(LanguageFacet {
                    language: language.to_string(),
                    count: 1,
                });
            }
        }
    }

    facets.sort_by(|left, right| right.count.cmp(&left.count));
    facets
}

pub fn quick_filter_facets(records: &[ProjectRecord], limit: usize) -> Vec<LanguageFacet> {
    let mut facets = language_facets(records);
    facets.truncate(limit);
    facets
}

/// Distinct languages in ascending order, for the language selector.
pub fn language_options(records: &[ProjectRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.language.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
