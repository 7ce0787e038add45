//! Per-locale kinship lexicons and the resolver that evaluates them.
//!
//! A lexicon is an ordered, first-match-wins rule table plus the
//! lineage-degree markers that gate it. Rules are plain data, so each row
//! can be audited and tested on its own; the resolver is a single pass
//! over the slice.

use crate::pattern::{LabelPattern, normalize_label};
use crate::relationship::{MappedKinship, RelationshipCode, SpecificValue};

/// One row of a lexicon: a pattern and the descriptor it resolves to.
#[derive(Debug, Clone, Copy)]
pub struct KinshipRule {
    pub pattern: LabelPattern,
    pub code: RelationshipCode,
    pub value: SpecificValue,
}

impl KinshipRule {
    /// The descriptor this rule resolves to.
    pub fn mapped(&self) -> MappedKinship {
        MappedKinship {
            relationship_code: self.code,
            specific_value: self.value,
        }
    }
}

/// One locale's kinship vocabulary.
///
/// Rule order is significant: exact, unambiguous rows sit above the
/// prefix and substring rows that could otherwise shadow them. The
/// built-in tables live in [`crate::locales`]; their tests audit the
/// ordering row by row.
#[derive(Debug)]
pub struct Lexicon {
    locale: &'static str,
    name: &'static str,
    rules: &'static [KinshipRule],
    degree_markers: &'static [&'static str],
}

impl Lexicon {
    pub(crate) const fn new(
        locale: &'static str,
        name: &'static str,
        rules: &'static [KinshipRule],
        degree_markers: &'static [&'static str],
    ) -> Self {
        Self {
            locale,
            name,
            rules,
            degree_markers,
        }
    }

    /// Locale tag this vocabulary covers ("ru", "en").
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Human-readable language name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ordered rule table.
    pub fn rules(&self) -> &'static [KinshipRule] {
        self.rules
    }

    /// Lineage-degree markers that gate the `Marked` rules.
    pub fn degree_markers(&self) -> &'static [&'static str] {
        self.degree_markers
    }

    /// Resolve a free-text kinship label against this vocabulary.
    ///
    /// The label is trimmed and lowercased, then matched against the rule
    /// table in order; the first matching rule wins. `None` means the
    /// phrase is not recognised — an expected outcome the caller handles
    /// as a normal branch (typically by falling back to a structured
    /// picker), never a fault.
    ///
    /// A label carrying a lineage-degree marker is matched only by the
    /// `Marked` rules: "тётя двоюродная" stays unrecognised instead of
    /// coming back as a plain aunt.
    ///
    /// Pure: no logging, no I/O, no shared state.
    pub fn resolve(&self, label: &str) -> Option<MappedKinship> {
        let label = normalize_label(label);
        if label.is_empty() {
            return None;
        }

        let degree_qualified = self
            .degree_markers
            .iter()
            .any(|marker| label.contains(marker));

        for rule in self.rules {
            if degree_qualified && !matches!(rule.pattern, LabelPattern::Marked { .. }) {
                continue;
            }
            if rule.pattern.matches(&label) {
                return Some(rule.mapped());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Synthetic vocabulary exercising the resolver mechanics; the real
    // tables are covered in locales.rs.
    const RULES: &[KinshipRule] = &[
        KinshipRule {
            pattern: LabelPattern::Exact(&["pat"]),
            code: RelationshipCode::Parent,
            value: SpecificValue::Father,
        },
        KinshipRule {
            pattern: LabelPattern::Marked {
                marker: "step",
                term: "bro",
            },
            code: RelationshipCode::Cousin,
            value: SpecificValue::CousinM1st,
        },
        KinshipRule {
            pattern: LabelPattern::Prefix(&["pat"]),
            code: RelationshipCode::AuntUncle,
            value: SpecificValue::Uncle,
        },
        KinshipRule {
            pattern: LabelPattern::Prefix(&["sis"]),
            code: RelationshipCode::Sibling,
            value: SpecificValue::Sister,
        },
    ];

    static LEXICON: Lexicon = Lexicon::new("xx", "Synthetic", RULES, &["step"]);

    #[test]
    fn first_matching_rule_wins() {
        // "pat" satisfies both the exact row and the prefix row; the
        // earlier, narrower row decides.
        let mapped = LEXICON.resolve("pat").unwrap();
        assert_eq!(mapped.specific_value, SpecificValue::Father);

        let mapped = LEXICON.resolve("patron").unwrap();
        assert_eq!(mapped.specific_value, SpecificValue::Uncle);
    }

    #[test]
    fn input_is_normalised_before_matching() {
        assert_eq!(LEXICON.resolve("  PAT "), LEXICON.resolve("pat"));
        assert_eq!(LEXICON.resolve("SIS"), LEXICON.resolve("sis"));
    }

    #[test]
    fn marked_rule_resolves_degree_phrases() {
        let mapped = LEXICON.resolve("step bro").unwrap();
        assert_eq!(mapped.relationship_code, RelationshipCode::Cousin);
        assert_eq!(mapped.specific_value, SpecificValue::CousinM1st);
        // Token order within the phrase does not matter.
        assert_eq!(LEXICON.resolve("bro step"), LEXICON.resolve("step bro"));
    }

    #[test]
    fn degree_marker_blocks_fallthrough_to_other_rules() {
        // "sis step" starts with "sis", but the degree marker means only
        // marked rules may claim it — and none does.
        assert_eq!(LEXICON.resolve("sis step"), None);
        assert_eq!(LEXICON.resolve("pat step"), None);
        // Without the marker the prefix row applies as usual.
        assert_eq!(
            LEXICON.resolve("sister").map(|m| m.specific_value),
            Some(SpecificValue::Sister)
        );
    }

    #[test]
    fn unmatched_and_empty_labels_are_not_recognised() {
        assert_eq!(LEXICON.resolve("colleague"), None);
        assert_eq!(LEXICON.resolve(""), None);
        assert_eq!(LEXICON.resolve("   "), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        for label in ["pat", "patron", "step bro", "colleague", ""] {
            assert_eq!(LEXICON.resolve(label), LEXICON.resolve(label));
        }
    }

    #[test]
    fn rule_mapped_pairs_code_and_value() {
        let rule = &RULES[0];
        let mapped = rule.mapped();
        assert_eq!(mapped.relationship_code, rule.code);
        assert_eq!(mapped.specific_value, rule.value);
    }

    #[test]
    fn accessors_expose_the_table() {
        assert_eq!(LEXICON.locale(), "xx");
        assert_eq!(LEXICON.name(), "Synthetic");
        assert_eq!(LEXICON.rules().len(), 4);
        assert_eq!(LEXICON.degree_markers(), &["step"]);
    }
}
