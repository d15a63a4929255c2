use serde::{Deserialize, Serialize};

pub const MIN_GENERATION: i32 = -4;
pub const MAX_GENERATION: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRecord {
    pub english_label: &'static str,
    pub standard_term: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romanization: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colloquial_term: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colloquial_romanization: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
    pub generation_offset: i32,
    #[serde(skip)]
    pub kind: RelationshipKind,
}

impl RelationshipRecord {
    pub const fn new(
        english_label: &'static str,
        standard_term: &'static str,
        generation_offset: i32,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            english_label,
            standard_term,
            romanization: None,
            colloquial_term: None,
            colloquial_romanization: None,
            notes: None,
            generation_offset,
            kind,
        }
    }

    pub const fn romanization(mut self, romanization: &'static str) -> Self {
        self.romanization = Some(romanization);
        self
    }

    pub const fn notes(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Parents,
    Siblings,
    Children,
    Spouse,
    Grandparents,
    SpousesFamily,
    Cousins,
    NephewsNieces,
    InLaws,
    UnclesAunts,
    Extended,
}

impl RelationshipKind {
    // First matching rule wins; every check is case-sensitive.
    pub fn classify(english_label: &str, generation_offset: i32) -> Self {
        let label = english_label;
        let possessive = label.contains("'s");

        if label == "Father" || label == "Mother" {
            Self::Parents
        } else if (label.contains("brother") || label.contains("sister")) && !possessive {
            Self::Siblings
        } else if label == "Son" || label == "Daughter" {
            Self::Children
        } else if label == "Husband" || label == "Wife" {
            Self::Spouse
        } else if label.contains("grandfather") || label.contains("grandmother") {
            Self::Grandparents
        } else if label.contains("Father-in-law") || label.contains("Mother-in-law") {
            Self::SpousesFamily
        } else if label.contains("cousin") {
            Self::Cousins
        } else if label.contains("Nephew") || label.contains("Niece") {
            Self::NephewsNieces
        } else if label.contains("Brother's wife") || label.contains("Sister's husband") {
            Self::InLaws
        } else if (label.contains("uncle")
            || label.contains("aunt")
            || label.contains("Father's")
            || label.contains("Mother's"))
            && generation_offset == 1
        {
            Self::UnclesAunts
        } else {
            Self::Extended
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Parents | Self::Siblings | Self::Children | Self::Spouse => {
                Category::ImmediateFamily
            }
            Self::InLaws | Self::SpousesFamily => Category::InLaws,
            Self::Cousins => Category::Cousins,
            Self::Grandparents | Self::NephewsNieces | Self::UnclesAunts | Self::Extended => {
                Category::ExtendedFamily
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Immediate Family")]
    ImmediateFamily,
    #[serde(rename = "Extended Family")]
    ExtendedFamily,
    #[serde(rename = "In-Laws")]
    InLaws,
    #[serde(rename = "Cousins")]
    Cousins,
}

impl Category {
    pub const DISPLAY_ORDER: [Category; 4] = [
        Self::ImmediateFamily,
        Self::ExtendedFamily,
        Self::InLaws,
        Self::Cousins,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImmediateFamily => "Immediate Family",
            Self::ExtendedFamily => "Extended Family",
            Self::InLaws => "In-Laws",
            Self::Cousins => "Cousins",
        }
    }
}

// Ordered strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactLabel,
    ExactNotes,
    FirstSubstringHit,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    #[serde(flatten)]
    pub record: &'static RelationshipRecord,
    pub category: Category,
    pub generation_caption: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationButton {
    pub label: String,
    pub english: &'static str,
    pub key: String,
    pub category: Category,
    pub standard_term: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonGroup {
    pub category: Category,
    pub buttons: Vec<RelationButton>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationTab {
    pub generation: i32,
    pub label: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipsQuery {
    pub generation: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub english: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub generation: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub query: String,
    pub selected_generation: Option<i32>,
    pub results: Vec<RecordView>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    #[serde(default)]
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolveResponse {
    NoSelection,
    #[serde(rename_all = "camelCase")]
    Found {
        search_term: String,
        tier: MatchTier,
        record: RecordView,
    },
    #[serde(rename_all = "camelCase")]
    NotFound { search_term: String, message: String },
}
