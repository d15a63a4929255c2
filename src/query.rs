use std::ops::RangeInclusive;

use crate::{
    catalog::Catalog,
    models::{
        ButtonGroup, Category, GenerationTab, RecordView, RelationButton, RelationshipRecord,
    },
};

pub const BROWSABLE_GENERATIONS: RangeInclusive<i32> = -3..=3;

const CORE_LABELS: [&str; 14] = [
    "Father",
    "Mother",
    "Son",
    "Daughter",
    "Husband",
    "Wife",
    "Elder brother",
    "Elder sister",
    "Younger brother",
    "Younger sister",
    "Paternal grandfather",
    "Paternal grandmother",
    "Maternal grandfather",
    "Maternal grandmother",
];

const CALCULATOR_MARKERS: [&str; 7] = [
    "Father's",
    "Mother's",
    "Brother's",
    "Sister's",
    "-in-law",
    "Nephew",
    "Niece",
];

pub fn by_generation(catalog: &Catalog, offset: i32) -> Vec<&'static RelationshipRecord> {
    catalog
        .iter()
        .filter(|record| record.generation_offset == offset)
        .collect()
}

/// An empty query is a substring of every label, so it returns the whole
/// catalog.
pub fn search(catalog: &Catalog, query: &str) -> Vec<&'static RelationshipRecord> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|record| matches_query(record, &needle))
        .collect()
}

fn matches_query(record: &RelationshipRecord, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(record.english_label)
        || record.romanization.is_some_and(hit)
        || record.notes.is_some_and(hit)
}

pub fn find_by_english(catalog: &Catalog, text: &str) -> Option<&'static RelationshipRecord> {
    let needle = text.to_lowercase();
    catalog
        .iter()
        .find(|record| record.english_label.to_lowercase().contains(&needle))
}

pub fn categorize(record: &RelationshipRecord) -> Category {
    record.kind.category()
}

pub fn record_view(record: &'static RelationshipRecord) -> RecordView {
    RecordView {
        record,
        category: categorize(record),
        generation_caption: generation_caption(record.generation_offset),
    }
}

fn is_calculator_relation(record: &RelationshipRecord) -> bool {
    let label = record.english_label;
    CORE_LABELS.contains(&label)
        || CALCULATOR_MARKERS.iter().any(|marker| label.contains(marker))
        || (label.contains("cousin") && record.generation_offset == 0)
}

pub fn button_key(english_label: &str) -> String {
    english_label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

pub fn calculator_buttons(catalog: &Catalog) -> Vec<RelationButton> {
    catalog
        .iter()
        .filter(|record| is_calculator_relation(record))
        .map(|record| {
            let label = match record.english_label {
                "Father" | "Mother" => {
                    format!("{} ({})", record.english_label, record.standard_term)
                }
                other => other.to_string(),
            };
            RelationButton {
                label,
                english: record.english_label,
                key: button_key(record.english_label),
                category: categorize(record),
                standard_term: record.standard_term,
            }
        })
        .collect()
}

// Empty buckets are kept so every tab is present.
pub fn grouped_buttons(catalog: &Catalog) -> Vec<ButtonGroup> {
    let buttons = calculator_buttons(catalog);
    Category::DISPLAY_ORDER
        .iter()
        .map(|category| ButtonGroup {
            category: *category,
            buttons: buttons
                .iter()
                .filter(|button| button.category == *category)
                .cloned()
                .collect(),
        })
        .collect()
}

fn plural(count: u32) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

pub fn generation_tab_label(generation: i32) -> String {
    let distance = generation.unsigned_abs();
    match generation {
        0 => "Same Generation".to_string(),
        g if g > 0 => format!("+{distance} Generation{} Above", plural(distance)),
        _ => format!("{distance} Generation{} Below", plural(distance)),
    }
}

pub fn generation_caption(generation: i32) -> String {
    let distance = generation.unsigned_abs();
    match generation {
        0 => "Same generation as you".to_string(),
        g if g > 0 => format!("{distance} generation{} above you", plural(distance)),
        _ => format!("{distance} generation{} below you", plural(distance)),
    }
}

pub fn generation_tabs(catalog: &Catalog) -> Vec<GenerationTab> {
    BROWSABLE_GENERATIONS
        .map(|generation| GenerationTab {
            generation,
            label: generation_tab_label(generation),
            record_count: by_generation(catalog, generation).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RelationshipKind, MAX_GENERATION, MIN_GENERATION};

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn labels(records: &[&RelationshipRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.english_label).collect()
    }

    #[test]
    fn by_generation_filters_in_catalog_order() {
        let catalog = catalog();
        for offset in MIN_GENERATION - 2..=MAX_GENERATION + 2 {
            let hits = by_generation(&catalog, offset);
            assert!(hits.iter().all(|r| r.generation_offset == offset));

            let expected: Vec<_> = catalog
                .iter()
                .filter(|r| r.generation_offset == offset)
                .collect();
            assert_eq!(hits, expected);
            assert_eq!(hits, by_generation(&catalog, offset));
        }
    }

    #[test]
    fn by_generation_counts() {
        let catalog = catalog();
        assert_eq!(by_generation(&catalog, 1).len(), 16);
        assert_eq!(by_generation(&catalog, 0).len(), 44);
        assert_eq!(by_generation(&catalog, -3).len(), 4);
        assert!(by_generation(&catalog, 4).is_empty());
        assert!(by_generation(&catalog, 42).is_empty());
    }

    #[test]
    fn search_is_sound_and_complete() {
        let catalog = catalog();
        for query in ["father", "FATHER", "biu2", "cousin", "in-law", "'s", "xyz"] {
            let needle = query.to_lowercase();
            let hits = search(&catalog, query);
            for record in catalog.iter() {
                let matches = record.english_label.to_lowercase().contains(&needle)
                    || record
                        .romanization
                        .is_some_and(|r| r.to_lowercase().contains(&needle))
                    || record
                        .notes
                        .is_some_and(|n| n.to_lowercase().contains(&needle));
                assert_eq!(hits.contains(&record), matches, "{query} / {}", record.english_label);
            }
        }
    }

    #[test]
    fn search_matches_romanization_and_notes() {
        let catalog = catalog();
        let hits = search(&catalog, "biu2 hing1");
        assert_eq!(
            labels(&hits),
            vec![
                "Elder male cousin (father's sister's son)",
                "Elder male cousin (mother's brother's son)",
                "Elder male cousin (mother's sister's son)",
            ]
        );

        let hits = search(&catalog, "wife's father");
        assert_eq!(labels(&hits), vec!["Father-in-law (wife's father)"]);
    }

    #[test]
    fn search_with_empty_query_returns_everything() {
        let catalog = catalog();
        assert_eq!(search(&catalog, "").len(), catalog.len());
        assert!(search(&catalog, "nonexistent").is_empty());
    }

    #[test]
    fn every_label_finds_its_own_record() {
        let catalog = catalog();
        for record in catalog.iter() {
            assert!(search(&catalog, record.english_label).contains(&record));
        }
    }

    #[test]
    fn find_by_english_returns_first_containing_label() {
        let catalog = catalog();
        let hit = find_by_english(&catalog, "father").expect("hit");
        assert_eq!(hit.english_label, "Paternal grandfather");
        assert_eq!(
            find_by_english(&catalog, "SON-IN").map(|r| r.english_label),
            Some("Son-in-law")
        );
        assert!(find_by_english(&catalog, "godmother").is_none());
    }

    #[test]
    fn categorize_examples() {
        let cases = [
            ("Father", 1, Category::ImmediateFamily),
            ("Father-in-law (wife's father)", 1, Category::InLaws),
            ("Elder male cousin (father's brother's son)", 0, Category::Cousins),
            ("Father's younger brother", 1, Category::ExtendedFamily),
            ("Brother's wife", 0, Category::InLaws),
            ("Younger brother's wife", 0, Category::ExtendedFamily),
            ("Elder sister", 0, Category::ImmediateFamily),
            ("Nephew (brother's son)", -1, Category::ExtendedFamily),
            ("Father's sister", 0, Category::ExtendedFamily),
        ];
        for (label, generation, expected) in cases {
            let kind = RelationshipKind::classify(label, generation);
            let record = RelationshipRecord::new(label, "測試", generation, kind);
            assert_eq!(categorize(&record), expected, "{label}");
        }
    }

    #[test]
    fn cascade_order_decides_overlapping_patterns() {
        assert_eq!(
            RelationshipKind::classify("Elder male cousin (father's brother's son)", 1),
            RelationshipKind::Cousins
        );
        assert_eq!(
            RelationshipKind::classify("Father's younger brother", 1),
            RelationshipKind::UnclesAunts
        );
        assert_eq!(
            RelationshipKind::classify("Great grandfather (paternal)", 3),
            RelationshipKind::Grandparents
        );
        // "brother" without a possessive always reads as a sibling
        assert_eq!(
            RelationshipKind::classify("Half brother", -2),
            RelationshipKind::Siblings
        );
    }

    #[test]
    fn categorize_is_total_over_catalog() {
        let catalog = catalog();
        for record in catalog.iter() {
            let first = categorize(record);
            assert_eq!(first, categorize(record));
            assert!(Category::DISPLAY_ORDER.contains(&first));
        }
    }

    #[test]
    fn button_key_strips_punctuation_and_spaces() {
        assert_eq!(button_key("Father's elder brother"), "fatherselderbrother");
        assert_eq!(
            button_key("Father-in-law (wife's father)"),
            "fatherinlawwifesfather"
        );
    }

    #[test]
    fn calculator_buttons_grouped_in_tab_order() {
        let groups = grouped_buttons(&catalog());
        let order: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, Category::DISPLAY_ORDER.to_vec());

        let sizes: Vec<_> = groups.iter().map(|g| g.buttons.len()).collect();
        assert_eq!(sizes, vec![10, 20, 6, 24]);

        let immediate = &groups[0].buttons;
        assert_eq!(immediate[0].label, "Father (爸爸)");
        assert_eq!(immediate[0].english, "Father");
        assert_eq!(immediate[1].label, "Mother (媽媽)");
        assert_eq!(immediate[2].label, "Elder brother");

        let in_laws: Vec<_> = groups[2].buttons.iter().map(|b| b.english).collect();
        assert_eq!(in_laws[..2], ["Brother's wife", "Sister's husband"]);
    }

    #[test]
    fn calculator_skips_relations_outside_the_common_set() {
        let buttons = calculator_buttons(&catalog());
        let english: Vec<_> = buttons.iter().map(|b| b.english).collect();
        assert!(!english.contains(&"Husband's sister"));
        assert!(!english.contains(&"Great grandson"));
        assert!(!english.contains(&"Paternal male cousin's son"));
        assert!(english.contains(&"Son-in-law"));
    }

    #[test]
    fn generation_labels() {
        assert_eq!(generation_tab_label(2), "+2 Generations Above");
        assert_eq!(generation_tab_label(1), "+1 Generation Above");
        assert_eq!(generation_tab_label(0), "Same Generation");
        assert_eq!(generation_tab_label(-1), "1 Generation Below");
        assert_eq!(generation_tab_label(-3), "3 Generations Below");

        assert_eq!(generation_caption(1), "1 generation above you");
        assert_eq!(generation_caption(0), "Same generation as you");
        assert_eq!(generation_caption(-2), "2 generations below you");
    }

    #[test]
    fn generation_tabs_cover_browsable_range() {
        let tabs = generation_tabs(&catalog());
        assert_eq!(tabs.len(), 7);
        assert_eq!(tabs[0].generation, -3);
        assert_eq!(tabs[6].generation, 3);
        let total: usize = tabs.iter().map(|t| t.record_count).sum();
        assert_eq!(total, catalog().len());
    }
}
