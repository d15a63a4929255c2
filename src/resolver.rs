use crate::{
    catalog::Catalog,
    models::{MatchTier, RelationshipRecord},
    query::search,
};

const POSSESSIVE: &str = "'s ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCandidate {
    pub tier: MatchTier,
    pub record: &'static RelationshipRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    NoSelection,
    Found {
        search_term: String,
        tier: MatchTier,
        record: &'static RelationshipRecord,
    },
    NotFound {
        search_term: String,
    },
}

impl PathResolution {
    pub fn not_found_message(search_term: &str) -> String {
        format!("No term found for this relationship: {search_term}")
    }
}

pub fn search_term<S: AsRef<str>>(path: &[S]) -> Option<String> {
    match path {
        [] => None,
        [single] => Some(single.as_ref().to_string()),
        many => {
            let joined = many
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(POSSESSIVE);
            Some(joined.replace(" 's ", POSSESSIVE))
        }
    }
}

pub fn rank_candidates(catalog: &Catalog, term: &str) -> Vec<RankedCandidate> {
    let wanted = term.to_lowercase();
    let mut ranked: Vec<RankedCandidate> = search(catalog, term)
        .into_iter()
        .map(|record| {
            let tier = if record.english_label.to_lowercase() == wanted {
                MatchTier::ExactLabel
            } else if record
                .notes
                .is_some_and(|notes| notes.to_lowercase() == wanted)
            {
                MatchTier::ExactNotes
            } else {
                MatchTier::FirstSubstringHit
            };
            RankedCandidate { tier, record }
        })
        .collect();
    // stable sort keeps catalog order inside a tier
    ranked.sort_by_key(|candidate| candidate.tier);
    ranked
}

pub fn resolve_path<S: AsRef<str>>(catalog: &Catalog, path: &[S]) -> PathResolution {
    let Some(search_term) = search_term(path) else {
        return PathResolution::NoSelection;
    };

    match rank_candidates(catalog, &search_term).first() {
        Some(best) => PathResolution::Found {
            tier: best.tier,
            record: best.record,
            search_term,
        },
        None => PathResolution::NotFound { search_term },
    }
}
